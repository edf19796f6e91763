// ============================================================================
// Increment Library
// Numbered sequences for multi-cursor editing
// ============================================================================

//! # Increment
//!
//! Insert a formatted number at every cursor: `start`, `start + increment`,
//! `start + 2 * increment`, ... rendered through a printf-style template.
//!
//! ## Features
//!
//! - **Accuracy-preserving arithmetic**: `0.1 + 0.2` is `0.3`, rounded to the
//!   decimal precision the operands were written with
//! - **printf-style formatting** for `%d`, `%x`, `%X` and `%f` with flags,
//!   width and precision
//! - **Host-agnostic command flow** over small prompt/notify/edit traits
//!
//! ## Example
//!
//! ```rust
//! use increment::prelude::*;
//!
//! assert_eq!(next_value(0.0, 0.1, 3), 0.3);
//! assert_eq!(format("0x%02x", 10.0).unwrap(), "0x0a");
//!
//! let mut editor = BufferEditor::new("x = \ny = ").with_cursor_at_line_ends([0, 1]);
//! let mut prompter = ScriptedPrompter::new(["10", "0.5", "%.1f"]);
//!
//! IncrementCommand::new(IncrementPreset::prompted())
//!     .execute(&mut prompter, &LoggingNotifier, Some(&mut editor))
//!     .unwrap();
//!
//! assert_eq!(editor.text(), "x = 10.0\ny = 10.5");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod printf;
pub mod sequence;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CommandId, CursorPosition, IncrementPreset, Insertion, Parameter};
    pub use crate::engine::{apply_increment, IncrementCommand, IncrementError, IncrementResult};
    pub use crate::interfaces::{
        AcceptDefaults, BufferEditor, LoggingNotifier, NoOpNotifier, Notice, Notifier,
        PromptRequest, Prompter, RecordingNotifier, ScriptedPrompter, TextEditor,
    };
    pub use crate::numeric::{accuracy, add, multiply};
    pub use crate::printf::{format, FormatError, FormatTemplate};
    pub use crate::sequence::{next_value, Sequence};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_commands() {
        for (id, expected) in [
            (CommandId::IndexedFromZero, "0,\n1,\n2,"),
            (CommandId::IndexedFromOne, "1,\n2,\n3,"),
        ] {
            let mut editor = BufferEditor::new(",\n,\n,").with_cursors([
                CursorPosition::new(0, 0),
                CursorPosition::new(1, 0),
                CursorPosition::new(2, 0),
            ]);
            let notifier = RecordingNotifier::new();

            let count = IncrementCommand::new(id.preset())
                .execute(&mut AcceptDefaults, &notifier, Some(&mut editor))
                .unwrap();

            assert_eq!(count, 3);
            assert_eq!(editor.text(), expected);
            assert!(notifier.notices().is_empty());
        }
    }

    #[test]
    fn test_prompted_command_with_defaults() {
        let mut editor = BufferEditor::new("a b").with_cursors([
            CursorPosition::new(0, 1),
            CursorPosition::new(0, 3),
        ]);

        IncrementCommand::new(CommandId::Increment.preset())
            .execute(&mut AcceptDefaults, &NoOpNotifier, Some(&mut editor))
            .unwrap();

        assert_eq!(editor.text(), "a0 b1");
    }

    #[test]
    fn test_core_contract() {
        assert_eq!(accuracy(-1.25), 2);
        assert_eq!(add(1.1, 2.2), 3.3);
        assert_eq!(multiply(1.1, 2.2), 2.4);
        assert_eq!(format("%.1f", 1.1).unwrap(), "1.1");

        let values: Vec<String> = Sequence::new(0.0, 0.1)
            .take(3)
            .map(|v| format("%.1f", v).unwrap())
            .collect();
        assert_eq!(values, ["0.0", "0.1", "0.2"]);
    }
}
