// ============================================================================
// Engine Module
// The increment command flow on top of the numeric core
// ============================================================================

mod command;
mod errors;

pub use command::{
    apply_increment, build_insertions, parse_number, IncrementCommand, INVALID_FORMAT,
    INVALID_NUMBER, INVALID_PRESET, UNCHANGED_FORMAT,
};
pub use errors::{IncrementError, IncrementResult};
