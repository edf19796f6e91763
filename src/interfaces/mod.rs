// ============================================================================
// Interfaces Module
// Contracts with the host editor: prompts, notifications, text edits
// ============================================================================

mod editor;
mod notifier;
mod prompter;

pub use editor::{BufferEditor, TextEditor};
pub use notifier::{LoggingNotifier, NoOpNotifier, Notice, Notifier, RecordingNotifier};
pub use prompter::{AcceptDefaults, PromptRequest, Prompter, ScriptedPrompter};
