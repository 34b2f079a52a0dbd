//! Source location types.
//!
//! Parsers report locations with a byte offset plus a line/column pair.
//! Offsets are what range remapping works on; lines and columns are what
//! lint messages carry.

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// Offsets are 0-indexed byte offsets. Lines and columns are 1-indexed, the
/// convention used by ESLint messages and by mdast positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the document (0-indexed).
    pub offset: usize,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Start and end positions of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the byte range covered by this location.
    #[inline]
    pub const fn byte_range(&self) -> std::ops::Range<usize> {
        self.start.offset..self.end.offset
    }

    /// Returns true if the end precedes the start.
    #[inline]
    pub const fn is_inverted(&self) -> bool {
        self.end.offset < self.start.offset
    }
}
