// ============================================================================
// Increment Errors
// Reasons an increment command inserts nothing
// ============================================================================

use crate::printf::FormatError;
use std::fmt;

/// Errors that abort an increment command before any text is inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncrementError {
    /// Host has no active document
    NoActiveEditor,
    /// User dismissed the prompt for `parameter`
    Cancelled { parameter: &'static str },
    /// User input for `parameter` is not a finite number
    InvalidNumber {
        parameter: &'static str,
        input: String,
    },
    /// Format template could not be parsed
    InvalidFormat(FormatError),
    /// Preset failed validation
    InvalidPreset(String),
}

impl fmt::Display for IncrementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncrementError::NoActiveEditor => write!(f, "no active editor"),
            IncrementError::Cancelled { parameter } => {
                write!(f, "cancelled while entering {}", parameter)
            }
            IncrementError::InvalidNumber { parameter, input } => {
                write!(f, "invalid {} number: {:?}", parameter, input)
            }
            IncrementError::InvalidFormat(err) => write!(f, "invalid format string: {}", err),
            IncrementError::InvalidPreset(reason) => write!(f, "invalid preset: {}", reason),
        }
    }
}

impl std::error::Error for IncrementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IncrementError::InvalidFormat(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for IncrementError {
    fn from(err: FormatError) -> Self {
        IncrementError::InvalidFormat(err)
    }
}

/// Result type alias for increment commands
pub type IncrementResult<T> = Result<T, IncrementError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        assert_eq!(
            IncrementError::InvalidNumber {
                parameter: "start",
                input: "abc".to_string()
            }
            .to_string(),
            "invalid start number: \"abc\""
        );
        assert_eq!(
            IncrementError::from(FormatError::MissingDirective).to_string(),
            "invalid format string: missing directive: template has no numeric conversion"
        );
    }

    #[test]
    fn test_error_source() {
        let err = IncrementError::from(FormatError::MissingDirective);
        assert!(err.source().is_some());
        assert!(IncrementError::NoActiveEditor.source().is_none());
    }
}
