//! Position tracking for definition sources
//!
//! This module defines the data structures for representing where a token
//! of a definition text starts.

use std::fmt;

/// A position in definition source text.
///
/// Both `line` and `column` are 1-based. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A position qualified by the name of the source it came from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub source_name: String,
    pub position: Position,
}

impl Location {
    pub fn new(source_name: impl Into<String>, position: Position) -> Self {
        Self {
            source_name: source_name.into(),
            position,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_name, self.position)
    }
}
