// ============================================================================
// Increment Preset Configuration
// Which parameters are fixed and which are asked from the user
// ============================================================================

use crate::printf::FormatTemplate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder prefilled when prompting for the start value
pub const DEFAULT_START: f64 = 0.0;

/// Placeholder prefilled when prompting for the increment
pub const DEFAULT_INCREMENT: f64 = 1.0;

/// Placeholder prefilled when prompting for the format
pub const DEFAULT_FORMAT: &str = "%d";

// ============================================================================
// Parameter Source
// ============================================================================

/// Where a command parameter comes from
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Parameter<T> {
    /// Value is fixed by the preset, no prompt
    Fixed(T),
    /// Ask the user, with `placeholder` prefilled in the input box
    Prompt { placeholder: T },
}

impl<T> Parameter<T> {
    /// Whether resolving this parameter needs user input.
    pub fn is_prompted(&self) -> bool {
        matches!(self, Parameter::Prompt { .. })
    }

    /// The fixed value or the placeholder.
    pub fn value(&self) -> &T {
        match self {
            Parameter::Fixed(value) => value,
            Parameter::Prompt { placeholder } => placeholder,
        }
    }
}

// ============================================================================
// Increment Preset
// ============================================================================

/// Configuration of one increment command
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IncrementPreset {
    /// Value inserted at the first cursor
    pub start: Parameter<f64>,

    /// Step between consecutive cursors
    pub increment: Parameter<f64>,

    /// printf-style template with a single numeric directive
    pub format: Parameter<String>,
}

impl IncrementPreset {
    /// Create a preset with every parameter fixed
    pub fn new(start: f64, increment: f64, format: impl Into<String>) -> Self {
        Self {
            start: Parameter::Fixed(start),
            increment: Parameter::Fixed(increment),
            format: Parameter::Fixed(format.into()),
        }
    }

    /// Builder method: Set start source
    pub fn with_start(mut self, start: Parameter<f64>) -> Self {
        self.start = start;
        self
    }

    /// Builder method: Set increment source
    pub fn with_increment(mut self, increment: Parameter<f64>) -> Self {
        self.increment = increment;
        self
    }

    /// Builder method: Set format source
    pub fn with_format(mut self, format: Parameter<String>) -> Self {
        self.format = format;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.start.value().is_finite() {
            return Err("Start must be a finite number".to_string());
        }

        if !self.increment.value().is_finite() {
            return Err("Increment must be a finite number".to_string());
        }

        // A prompted format may start out empty or half-written
        if let Parameter::Fixed(format) = &self.format {
            FormatTemplate::parse(format).map_err(|err| format!("Invalid format: {}", err))?;
        }

        Ok(())
    }

    /// Parse a preset from JSON.
    ///
    /// ```json
    /// {
    ///   "start": { "prompt": { "placeholder": 0.0 } },
    ///   "increment": { "fixed": 0.5 },
    ///   "format": { "fixed": "%.1f" }
    /// }
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let preset: Self =
            serde_json::from_str(json).map_err(|err| format!("Invalid preset JSON: {}", err))?;
        preset.validate()?;
        Ok(preset)
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl IncrementPreset {
    /// Ask for start, increment and format
    /// - Placeholders: 0, 1, %d
    pub fn prompted() -> Self {
        Self {
            start: Parameter::Prompt {
                placeholder: DEFAULT_START,
            },
            increment: Parameter::Prompt {
                placeholder: DEFAULT_INCREMENT,
            },
            format: Parameter::Prompt {
                placeholder: DEFAULT_FORMAT.to_string(),
            },
        }
    }

    /// 0, 1, 2, ... as plain integers
    pub fn indexed_from_zero() -> Self {
        Self::new(0.0, 1.0, DEFAULT_FORMAT)
    }

    /// 1, 2, 3, ... as plain integers
    pub fn indexed_from_one() -> Self {
        Self::new(1.0, 1.0, DEFAULT_FORMAT)
    }
}

impl Default for IncrementPreset {
    fn default() -> Self {
        Self::prompted()
    }
}
