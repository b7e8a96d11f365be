//! Commands the presentation layer sends to the engine.
//!
//! `Command` is the serializable form of the engine's command methods so a
//! front end can queue, log or replay them. `CommandRecord` stores an
//! applied command together with when it happened.

use serde::{Deserialize, Serialize};

use super::error::{CommandKind, EngineError};

/// Raw target input as typed or chosen by the player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetInput {
    /// Nothing entered; take the default.
    #[default]
    Unset,
    /// Free text from an input field.
    Text(String),
    /// An already numeric value.
    Number(i64),
}

impl TargetInput {
    /// Resolve to a target score.
    ///
    /// `Unset` and blank text resolve to `default`. Anything that is not a
    /// whole number in `1..=u32::MAX` is rejected.
    ///
    /// ```
    /// use lucky_toss::core::TargetInput;
    ///
    /// assert_eq!(TargetInput::from(" 75 ").resolve(101), Ok(75));
    /// assert_eq!(TargetInput::from("").resolve(101), Ok(101));
    /// assert!(TargetInput::from(-3i64).resolve(101).is_err());
    /// ```
    pub fn resolve(&self, default: u32) -> Result<u32, EngineError> {
        let invalid = || EngineError::InvalidTarget {
            input: self.to_string(),
        };

        let value = match self {
            TargetInput::Unset => return Ok(default),
            TargetInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(default);
                }
                trimmed.parse::<i64>().map_err(|_| invalid())?
            }
            TargetInput::Number(n) => *n,
        };

        match u32::try_from(value) {
            Ok(target) if target > 0 => Ok(target),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for TargetInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetInput::Unset => f.write_str("<unset>"),
            TargetInput::Text(text) => f.write_str(text),
            TargetInput::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TargetInput {
    fn from(text: &str) -> Self {
        TargetInput::Text(text.to_string())
    }
}

impl From<String> for TargetInput {
    fn from(text: String) -> Self {
        TargetInput::Text(text)
    }
}

impl From<i64> for TargetInput {
    fn from(n: i64) -> Self {
        TargetInput::Number(n)
    }
}

impl From<i32> for TargetInput {
    fn from(n: i32) -> Self {
        TargetInput::Number(i64::from(n))
    }
}

impl From<u32> for TargetInput {
    fn from(n: u32) -> Self {
        TargetInput::Number(i64::from(n))
    }
}

impl<T: Into<TargetInput>> From<Option<T>> for TargetInput {
    fn from(input: Option<T>) -> Self {
        input.map_or(TargetInput::Unset, Into::into)
    }
}

/// A command accepted by `TurnEngine::apply`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Confirm the target score for this game.
    SetTarget { input: TargetInput },
    /// Make the turn's initial throw.
    Throw,
    /// Flip the kept flag of one human die.
    ToggleKeep { index: usize },
    /// Re-roll every die that is not kept.
    ReRoll,
    /// Bank the turn and let the computer play.
    Score,
    /// Start a new game at the same target.
    Reset,
}

impl Command {
    /// Shorthand for `Command::SetTarget`.
    pub fn set_target(input: impl Into<TargetInput>) -> Self {
        Command::SetTarget {
            input: input.into(),
        }
    }

    /// The kind of command, for error reporting.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::SetTarget { .. } => CommandKind::SetTarget,
            Command::Throw => CommandKind::Throw,
            Command::ToggleKeep { .. } => CommandKind::ToggleKeep,
            Command::ReRoll => CommandKind::ReRoll,
            Command::Score => CommandKind::Score,
            Command::Reset => CommandKind::Reset,
        }
    }
}

/// An applied command with metadata for history tracking.
///
/// Used for replay and debugging. `refused` marks a command that failed
/// after it had already drawn dice; it only appears in the engine journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command applied.
    pub command: Command,

    /// Turn number when the command was applied.
    pub turn: u32,

    /// Position in the game's history (0-based).
    pub sequence: u32,

    #[serde(default)]
    pub refused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(TargetInput::Unset.resolve(101), Ok(101));
        assert_eq!(TargetInput::from("   ").resolve(101), Ok(101));
        assert_eq!(TargetInput::from(None::<&str>).resolve(55), Ok(55));
    }

    #[test]
    fn test_resolve_values() {
        assert_eq!(TargetInput::from("120").resolve(101), Ok(120));
        assert_eq!(TargetInput::from(Some(30i64)).resolve(101), Ok(30));
        assert_eq!(TargetInput::from(1u32).resolve(101), Ok(1));
    }

    #[test]
    fn test_resolve_rejects() {
        for bad in ["0", "-5", "abc", "12.5", "99999999999"] {
            assert_eq!(
                TargetInput::from(bad).resolve(101),
                Err(EngineError::InvalidTarget {
                    input: bad.to_string()
                }),
                "input {bad:?}"
            );
        }
        assert!(TargetInput::from(0i64).resolve(101).is_err());
        assert!(TargetInput::from(i64::from(u32::MAX) + 1).resolve(101).is_err());
    }

    #[test]
    fn test_command_kind() {
        assert_eq!(Command::set_target("10").kind(), CommandKind::SetTarget);
        assert_eq!(Command::ToggleKeep { index: 2 }.kind(), CommandKind::ToggleKeep);
        assert_eq!(Command::Reset.kind(), CommandKind::Reset);
    }

    #[test]
    fn test_command_serialization() {
        let record = CommandRecord {
            command: Command::ToggleKeep { index: 3 },
            turn: 2,
            sequence: 7,
            refused: false,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""type":"ToggleKeep""#));

        let deserialized: CommandRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
