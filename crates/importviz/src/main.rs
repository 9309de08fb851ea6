//! Importviz CLI - print a project's `#import` graph as Graphviz DOT.
//!
//! Typical usage:
//!
//! ```text
//! $ importviz /path/to/project > graph.dot
//! $ dot -Tpng graph.dot -o graph.png
//! ```
//!
//! Red arrows are precompiled header imports, blue arrows are two-way imports.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Importviz: render Objective-C import dependencies as a Graphviz graph.
#[derive(Parser)]
#[command(name = "importviz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Root directory of the project to scan
    project: Option<PathBuf>,

    /// Verbose output on stderr (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Any malformed invocation is a usage mistake, not a failure
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return usage(),
    };

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let Some(project) = cli.project.filter(|p| p.exists()) else {
        return usage();
    };

    let graph = match importviz::scan_project(&project) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            return ExitCode::FAILURE;
        }
    };

    info!(
        units = graph.units.len(),
        two_ways = graph.two_ways.len(),
        pch = graph.pch.len(),
        unresolved = importviz::unresolved_imports(&graph.units).len(),
        "Scanned project"
    );

    print!("{}", importviz::render(&graph));
    ExitCode::SUCCESS
}

fn usage() -> ExitCode {
    println!("USAGE: $ {} PROJECT_PATH", env!("CARGO_PKG_NAME"));
    ExitCode::SUCCESS
}
