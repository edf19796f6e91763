// ============================================================================
// Command Identifiers
// The built-in commands a host registers, each bound to a preset
// ============================================================================

use super::config::IncrementPreset;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommandId {
    /// Prompt for start, increment and format
    Increment,
    /// Insert 0, 1, 2, ...
    IndexedFromZero,
    /// Insert 1, 2, 3, ...
    IndexedFromOne,
}

impl CommandId {
    pub const ALL: [CommandId; 3] = [
        CommandId::Increment,
        CommandId::IndexedFromZero,
        CommandId::IndexedFromOne,
    ];

    /// Name the host registers the command under.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandId::Increment => "increment",
            CommandId::IndexedFromZero => "increment-indexed-0",
            CommandId::IndexedFromOne => "increment-indexed-1",
        }
    }

    pub fn preset(self) -> IncrementPreset {
        match self {
            CommandId::Increment => IncrementPreset::prompted(),
            CommandId::IndexedFromZero => IncrementPreset::indexed_from_zero(),
            CommandId::IndexedFromOne => IncrementPreset::indexed_from_one(),
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown command: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for id in CommandId::ALL {
            assert_eq!(id.to_string().parse::<CommandId>(), Ok(id));
        }
        assert!("increment-indexed-2".parse::<CommandId>().is_err());
    }

    #[test]
    fn test_presets() {
        assert!(CommandId::Increment.preset().start.is_prompted());
        assert_eq!(
            CommandId::IndexedFromOne.preset(),
            IncrementPreset::indexed_from_one()
        );
        for id in CommandId::ALL {
            assert!(id.preset().validate().is_ok());
        }
    }
}
