//! # Importviz: Objective-C import graphs for Graphviz
//!
//! Importviz walks a project tree, picks up local `#import "Foo.h"`
//! directives from `.h`, `.m` and `.pch` files, and renders who imports whom
//! as a DOT document.
//!
//! - Units are file names without extension, so `Foo.h` and `Foo.m` merge.
//! - Units that import each other are drawn once, in blue.
//! - Precompiled headers and their imports are drawn in red.
//!
//! Matching is purely textual, one line at a time. Nothing is preprocessed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! let graph = importviz::scan_project(Path::new("/path/to/project"))?;
//! println!("{} units, {} two-way pairs", graph.units.len(), graph.two_ways.len());
//!
//! print!("{}", importviz::render(&graph));
//! # Ok::<(), importviz::Error>(())
//! ```

mod dot;
mod error;
mod graph;
mod imports;
mod types;
mod walker;

pub use dot::render;
pub use error::{Error, Result};
pub use graph::{
    dependencies_in_project, dependencies_in_project_with_kinds, scan_project,
    two_way_dependencies, unresolved_imports,
};
pub use imports::{Imports, imported_name, scan_file};
pub use types::{DependencyGraph, DependencyMap, SourceKind, TwoWayPair, TwoWaySet, unit_name};
pub use walker::discover_files;

use std::path::Path;

/// Scan `root` and render its import graph as DOT in one step.
///
/// # Errors
///
/// See [`scan_project`].
pub fn dependencies_in_dot_format(root: &Path) -> Result<String> {
    scan_project(root).map(|graph| render(&graph))
}
