//! Line-level extraction of local `#import` directives.
//!
//! Only quoted imports of `.h` files count: `#import "Foo.h"` yields `Foo`.
//! System imports (`#import <UIKit/UIKit.h>`) and `#include` are ignored.
//! No preprocessing is done, so commented-out imports still match.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static LOCAL_IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"#import "(?P<name>\S*)\.h"#).expect("valid import regex"));

/// Name imported on a single line, without its `.h` extension.
///
/// Returns the first match on the line, if any.
#[must_use]
pub fn imported_name(line: &str) -> Option<&str> {
    LOCAL_IMPORT
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Iterator over the names imported by a reader, one per matching line.
///
/// Names repeated on several lines are yielded each time. Lines that are
/// not valid UTF-8 are decoded lossily.
pub struct Imports<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Imports<R> {
    /// Scan lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Imports<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&self.buf);
                    if let Some(name) = imported_name(&line) {
                        return Some(Ok(name.to_string()));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Open `path` and scan it for imports.
///
/// Each call starts a fresh pass over the file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened.
pub fn scan_file(path: &Path) -> Result<Imports<BufReader<File>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(Imports::new(BufReader::new(file)))
}
