//! Integration tests for the importviz CLI.
//!
//! These run the built binary and check stdout and exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use rstest::{fixture, rstest};
use tempfile::TempDir;

const USAGE: &str = "USAGE: $ importviz PROJECT_PATH\n";

fn run_importviz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_importviz"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute importviz binary")
}

/// Provides a project where `A` and `B` import each other
#[fixture]
fn cyclic_project() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::write(temp.path().join("A.h"), "#import \"B.h\"\n").expect("should write A.h");
    fs::write(temp.path().join("B.h"), "#import \"A.h\"\n").expect("should write B.h");
    temp
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

#[test]
fn missing_argument_prints_usage_and_succeeds() {
    let output = run_importviz(&[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
}

#[test]
fn nonexistent_path_prints_usage_and_succeeds() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let missing = temp.path().join("does-not-exist");

    let output = run_importviz(&[path_arg(&missing)]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
}

#[rstest]
#[case("--help", "Usage:")]
#[case("--version", "importviz")]
fn help_and_version_succeed(#[case] flag: &str, #[case] expected: &str) {
    let output = run_importviz(&[flag]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(expected));
}

#[rstest]
fn cyclic_project_prints_one_blue_edge(cyclic_project: TempDir) {
    let output = run_importviz(&[path_arg(cyclic_project.path())]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "digraph G {\n\
         \tnode [shape=box];\n\
         \t\n\
         \t\n\
         \tedge [color=blue];\n\
         \t\"A\" -> \"B\";\n\
         }\n"
    );
}

#[rstest]
fn verbose_logging_stays_off_stdout(cyclic_project: TempDir) {
    let quiet = run_importviz(&[path_arg(cyclic_project.path())]);
    let verbose = run_importviz(&["-vv", path_arg(cyclic_project.path())]);

    assert!(verbose.status.success());
    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(!verbose.stderr.is_empty());
}

#[test]
fn empty_project_prints_skeleton_graph() {
    let temp = TempDir::new().expect("Failed to create temp directory");

    let output = run_importviz(&[path_arg(temp.path())]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("digraph G {\n\tnode [shape=box];\n"));
    assert!(stdout.ends_with("\tedge [color=blue];\n}\n"));
}

#[rstest]
fn extra_argument_prints_usage_and_succeeds(cyclic_project: TempDir) {
    let output = run_importviz(&[path_arg(cyclic_project.path()), "extra"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
}

#[rstest]
fn unknown_flag_prints_usage_and_succeeds(cyclic_project: TempDir) {
    let output = run_importviz(&["--no-such-flag", path_arg(cyclic_project.path())]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), USAGE);
}

#[rstest]
fn file_root_prints_skeleton_graph_quietly(cyclic_project: TempDir) {
    let output = run_importviz(&[path_arg(&cyclic_project.path().join("A.h"))]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("digraph G {\n"));
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[cfg(unix)]
#[rstest]
fn unreadable_source_file_fails_with_cause_chain(cyclic_project: TempDir) {
    use std::os::unix::fs::PermissionsExt;

    let locked = cyclic_project.path().join("Locked.m");
    fs::write(&locked, "#import \"A.h\"\n").expect("should write Locked.m");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("should lock Locked.m");

    // Privileged users can read the file anyway
    if fs::read(&locked).is_ok() {
        return;
    }

    let output = run_importviz(&[path_arg(cyclic_project.path())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "stderr: {stderr}");
    assert!(stderr.contains("Locked.m"), "stderr: {stderr}");
    assert!(stderr.contains("caused by"), "stderr: {stderr}");
}
