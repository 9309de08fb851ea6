//! Core types for importviz.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Map from unit name to the names it imports.
///
/// Imported names are taken verbatim from the import directive and need not
/// match any scanned unit.
pub type DependencyMap = BTreeMap<String, BTreeSet<String>>;

/// Set of mutually importing unit pairs.
pub type TwoWaySet = BTreeSet<TwoWayPair>;

/// Kinds of files scanned for imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Header files (`.h`)
    Header,
    /// Implementation files (`.m`)
    Implementation,
    /// Precompiled header files (`.pch`)
    PrecompiledHeader,
}

impl SourceKind {
    /// Kinds whose files make up the main dependency map.
    pub const UNITS: &'static [Self] = &[Self::Header, Self::Implementation];

    /// Kinds rendered as the red precompiled-header section.
    pub const PRECOMPILED: &'static [Self] = &[Self::PrecompiledHeader];

    /// File name suffix, including the leading dot.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Header => ".h",
            Self::Implementation => ".m",
            Self::PrecompiledHeader => ".pch",
        }
    }

    /// Whether a file name carries this kind's suffix.
    ///
    /// Matching is a case-sensitive suffix test on the whole name, so
    /// `Foo.mm` is not an implementation file and `Foo.H` is not a header.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(self.suffix())
    }
}

/// Unit name for a source file: its file name without the last extension.
///
/// `Classes/Foo.h` and `Other/Foo.m` both belong to unit `Foo`.
#[must_use]
pub fn unit_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Two units that import each other.
///
/// Stored in canonical order (`first < second`), so `(a, b)` and `(b, a)`
/// build the same pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TwoWayPair {
    /// Lexicographically smaller unit name
    pub first: String,
    /// Lexicographically larger unit name
    pub second: String,
}

impl TwoWayPair {
    /// Build the canonical pair for two unit names.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}

/// Everything learned from scanning one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// Header and implementation units with their merged imports
    pub units: DependencyMap,
    /// Pairs of units importing each other
    pub two_ways: TwoWaySet,
    /// Precompiled headers with their imports
    pub pch: DependencyMap,
}

impl DependencyGraph {
    /// Whether `a` and `b` import each other.
    #[must_use]
    pub fn is_two_way(&self, a: &str, b: &str) -> bool {
        self.two_ways.contains(&TwoWayPair::new(a, b))
    }
}
