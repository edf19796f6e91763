// ============================================================================
// Domain Models Module
// Commands, presets and the cursor/insertion value objects
// ============================================================================

pub mod command;
pub mod config;
pub mod cursor;

pub use command::CommandId;
pub use config::{IncrementPreset, Parameter};
pub use cursor::{CursorPosition, Insertion};
