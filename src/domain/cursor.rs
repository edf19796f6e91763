// ============================================================================
// Cursor Domain Model
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Zero-based position of an active cursor in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CursorPosition {
    pub line: usize,
    /// Character (not byte) offset within the line
    pub character: usize,
}

impl CursorPosition {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Text to insert at one cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insertion {
    pub position: CursorPosition,
    pub text: String,
}

impl Insertion {
    pub fn new(position: CursorPosition, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}
