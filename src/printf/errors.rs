// ============================================================================
// Format Errors
// Error types for printf-style template parsing
// ============================================================================

use std::fmt;

/// Errors raised when a format template is not a single valid directive.
///
/// Positions are byte offsets of the offending `%` within the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// Template has no conversion directive
    MissingDirective,
    /// A second directive was found
    MultipleDirectives { position: usize },
    /// Conversion letter is not one of `d`, `x`, `X`, `f`
    UnknownConversion { position: usize, conversion: char },
    /// Template ends in the middle of a directive
    IncompleteDirective { position: usize },
    /// Width or precision is larger than the formatter accepts
    FieldTooLarge { position: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingDirective => {
                write!(f, "missing directive: template has no numeric conversion")
            }
            FormatError::MultipleDirectives { position } => {
                write!(f, "multiple directives: another conversion at offset {}", position)
            }
            FormatError::UnknownConversion {
                position,
                conversion,
            } => write!(
                f,
                "unknown conversion '%{}' at offset {}",
                conversion, position
            ),
            FormatError::IncompleteDirective { position } => {
                write!(f, "incomplete directive at offset {}", position)
            }
            FormatError::FieldTooLarge { position } => {
                write!(f, "field width or precision too large at offset {}", position)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for template operations
pub type FormatResult<T> = Result<T, FormatError>;
