// ============================================================================
// Text Editor Interface
// Cursor access and batched text insertion
// ============================================================================

use crate::domain::{CursorPosition, Insertion};

/// Active document of the host editor
pub trait TextEditor {
    /// Active cursors, in the order the host reports its selections.
    fn cursors(&self) -> Vec<CursorPosition>;

    /// Apply all insertions as one edit.
    ///
    /// Positions refer to the document before any of them is applied.
    fn insert(&mut self, insertions: Vec<Insertion>);
}

/// In-memory document with a fixed set of cursors
///
/// Cursors stay where they were after an insertion. Insertions outside the
/// document clamp to the nearest end; the line count never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferEditor {
    lines: Vec<String>,
    cursors: Vec<CursorPosition>,
}

impl BufferEditor {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            cursors: Vec::new(),
        }
    }

    /// Builder method: Set cursors
    pub fn with_cursors(mut self, cursors: impl IntoIterator<Item = CursorPosition>) -> Self {
        self.cursors = cursors.into_iter().collect();
        self
    }

    /// Builder method: One cursor at the end of each of the given lines
    pub fn with_cursor_at_line_ends(mut self, lines: impl IntoIterator<Item = usize>) -> Self {
        self.cursors = lines
            .into_iter()
            .map(|line| {
                let character = self.lines.get(line).map_or(0, |l| l.chars().count());
                CursorPosition::new(line, character)
            })
            .collect();
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn insert_one(&mut self, position: CursorPosition, text: &str) {
        let last = self.lines.len().saturating_sub(1);
        // Lines past the end clamp to the end of the document, which never grows
        let (index, character) = if position.line > last {
            tracing::trace!(line = position.line, last, "Clamping insertion to document end");
            (last, usize::MAX)
        } else {
            (position.line, position.character)
        };

        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        // Positions past the end of the line clamp to the end
        let byte = line
            .char_indices()
            .nth(character)
            .map_or(line.len(), |(byte, _)| byte);
        line.insert_str(byte, text);
    }
}

impl TextEditor for BufferEditor {
    fn cursors(&self) -> Vec<CursorPosition> {
        self.cursors.clone()
    }

    fn insert(&mut self, mut insertions: Vec<Insertion>) {
        // Back to front so earlier positions are unaffected; equal positions
        // keep cursor order
        insertions.sort_by_key(|insertion| insertion.position);
        for insertion in insertions.iter().rev() {
            self.insert_one(insertion.position, &insertion.text);
        }
    }
}
