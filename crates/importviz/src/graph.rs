//! Dependency map construction and two-way import detection.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::imports::scan_file;
use crate::types::{DependencyGraph, DependencyMap, SourceKind, TwoWayPair, TwoWaySet, unit_name};
use crate::walker::discover_files;

/// Build the dependency map for every file of one kind under `root`.
///
/// Every matching file gets an entry, even if it imports nothing. Files
/// sharing a unit name in different directories share one entry.
///
/// # Errors
///
/// Returns [`Error::Io`] if a matching file cannot be read.
pub fn dependencies_in_project(root: &Path, kind: SourceKind) -> Result<DependencyMap> {
    let mut map = DependencyMap::new();

    for path in discover_files(root, kind) {
        let deps = map.entry(unit_name(&path)).or_default();
        let before = deps.len();
        for name in scan_file(&path)? {
            deps.insert(name.map_err(|e| Error::io(&path, e))?);
        }
        debug!(
            file = %path.display(),
            new_imports = deps.len() - before,
            "Scanned file"
        );
    }

    Ok(map)
}

/// Build one dependency map over several kinds, unioning imports per unit.
///
/// # Errors
///
/// Returns [`Error::Io`] if a matching file cannot be read.
pub fn dependencies_in_project_with_kinds(
    root: &Path,
    kinds: &[SourceKind],
) -> Result<DependencyMap> {
    let mut merged = DependencyMap::new();

    for &kind in kinds {
        for (unit, deps) in dependencies_in_project(root, kind)? {
            merged.entry(unit).or_default().extend(deps);
        }
    }

    Ok(merged)
}

/// Find every pair of distinct units that import each other.
///
/// A pair only counts when both sides have an entry in `map`. Each pair
/// is recorded once regardless of which side is visited first.
#[must_use]
pub fn two_way_dependencies(map: &DependencyMap) -> TwoWaySet {
    let mut two_ways = TwoWaySet::new();

    for (a, deps) in map {
        for b in deps {
            if a == b {
                continue;
            }
            if map.get(b).is_some_and(|back| back.contains(a)) {
                two_ways.insert(TwoWayPair::new(a, b));
            }
        }
    }

    two_ways
}

/// Scan a project and assemble its full dependency graph.
///
/// A root that exists but is not a directory yields an empty graph.
///
/// # Errors
///
/// Returns [`Error::InvalidRoot`] if `root` does not exist, or
/// [`Error::Io`] if a source file cannot be read.
pub fn scan_project(root: &Path) -> Result<DependencyGraph> {
    if !root.exists() {
        return Err(Error::InvalidRoot(root.to_path_buf()));
    }
    if !root.is_dir() {
        debug!(root = %root.display(), "Project root is not a directory, nothing to scan");
        return Ok(DependencyGraph::default());
    }

    let units = dependencies_in_project_with_kinds(root, SourceKind::UNITS)?;
    let two_ways = two_way_dependencies(&units);
    let pch = dependencies_in_project_with_kinds(root, SourceKind::PRECOMPILED)?;

    debug!(
        units = units.len(),
        two_ways = two_ways.len(),
        pch = pch.len(),
        "Built dependency graph"
    );

    Ok(DependencyGraph {
        units,
        two_ways,
        pch,
    })
}

/// Unit names that are imported somewhere but were never scanned.
///
/// Typically framework or generated headers.
#[must_use]
pub fn unresolved_imports(map: &DependencyMap) -> BTreeSet<&str> {
    map.values()
        .flatten()
        .filter(|name| !map.contains_key(*name))
        .map(String::as_str)
        .collect()
}
