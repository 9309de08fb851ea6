//! Recursive discovery of source files under a project root.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::types::SourceKind;

/// Find every file below `root` whose name ends with `kind`'s suffix.
///
/// Directories that cannot be listed are logged and skipped. Symlinked
/// directories are not followed. The result is sorted by path.
#[must_use]
pub fn discover_files(root: &Path, kind: SourceKind) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_dir(root, kind, &mut files);
    files.sort();
    debug!(
        root = %root.display(),
        suffix = kind.suffix(),
        count = files.len(),
        "Discovered source files"
    );
    files
}

fn walk_dir(dir: &Path, kind: SourceKind, files: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(
                directory = %dir.display(),
                error = %e,
                "Cannot read directory, skipping"
            );
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    directory = %dir.display(),
                    error = %e,
                    "Failed to read directory entry, skipping"
                );
                continue;
            }
        };

        let path = entry.path();
        let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

        if is_dir {
            walk_dir(&path, kind, files);
        } else if path.is_file() && kind.matches(&entry.file_name().to_string_lossy()) {
            files.push(path);
        }
    }
}
