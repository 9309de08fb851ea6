//! Graphviz DOT rendering of a [`DependencyGraph`].
//!
//! Layout:
//!
//! ```text
//! digraph G {
//!     node [shape=box];
//!     "Lonely" -> {};          units without imports
//!     "A" -> "C";              one-way imports (black)
//!
//!     "Prefix" [color=red];    precompiled headers
//!     "Prefix" -> "A" [color=red];
//!
//!     edge [color=blue];
//!     "A" -> "B";              two-way imports, once per pair
//! }
//! ```
//!
//! Statements are tab-indented and the sections are separated by a line
//! holding a single tab.

use std::borrow::Cow;
use std::fmt;

use crate::types::DependencyGraph;

/// Render the graph as a complete DOT document ending in a newline.
#[must_use]
pub fn render(graph: &DependencyGraph) -> String {
    graph.to_string()
}

impl fmt::Display for DependencyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        writeln!(f, "\tnode [shape=box];")?;

        for (unit, deps) in &self.units {
            let mut deps = deps.iter().filter(|dep| *dep != unit).peekable();

            if deps.peek().is_none() {
                writeln!(f, "\t\"{}\" -> {{}};", escape(unit))?;
                continue;
            }

            for dep in deps {
                if !self.is_two_way(unit, dep) {
                    writeln!(f, "\t\"{}\" -> \"{}\";", escape(unit), escape(dep))?;
                }
            }
        }

        writeln!(f, "\t")?;
        for (unit, deps) in &self.pch {
            writeln!(f, "\t\"{}\" [color=red];", escape(unit))?;
            for dep in deps {
                writeln!(
                    f,
                    "\t\"{}\" -> \"{}\" [color=red];",
                    escape(unit),
                    escape(dep)
                )?;
            }
        }

        writeln!(f, "\t")?;
        writeln!(f, "\tedge [color=blue];")?;
        for pair in &self.two_ways {
            writeln!(
                f,
                "\t\"{}\" -> \"{}\";",
                escape(&pair.first),
                escape(&pair.second)
            )?;
        }

        writeln!(f, "}}")
    }
}

/// Escape a name for use inside a double-quoted DOT ID.
fn escape(name: &str) -> Cow<'_, str> {
    if name.contains(['"', '\\']) {
        Cow::Owned(name.replace('\\', "\\\\").replace('"', "\\\""))
    } else {
        Cow::Borrowed(name)
    }
}
