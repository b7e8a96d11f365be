//! Error types.
//!
//! Every engine error is a caller-input validation failure. A command that
//! fails leaves the game state exactly as it was.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Commands that can be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    SetTarget,
    Throw,
    ToggleKeep,
    ReRoll,
    Score,
    Reset,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::SetTarget => "set-target",
            CommandKind::Throw => "throw",
            CommandKind::ToggleKeep => "toggle-keep",
            CommandKind::ReRoll => "re-roll",
            CommandKind::Score => "score",
            CommandKind::Reset => "reset",
        };
        f.write_str(name)
    }
}

/// Why a command was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Precondition {
    /// The game already has a winner; only `reset` is accepted.
    GameOver,
    /// No target score has been set yet.
    TargetUnset,
    /// The turn's initial throw has already been made.
    AlreadyThrown,
    /// The turn's initial throw has not been made yet.
    NotThrown,
    /// All rolls of this turn are used up.
    NoRollsLeft,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Precondition::GameOver => "the game is over",
            Precondition::TargetUnset => "no target score is set",
            Precondition::AlreadyThrown => "the dice were already thrown this turn",
            Precondition::NotThrown => "the dice have not been thrown this turn",
            Precondition::NoRollsLeft => "no rolls are left this turn",
        };
        f.write_str(reason)
    }
}

/// Errors returned by `TurnEngine` commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid target score {input:?}: expected a positive whole number")]
    InvalidTarget { input: String },

    #[error("target score is already set to {target}")]
    TargetAlreadySet { target: u32 },

    #[error("cannot {command}: {reason}")]
    PreconditionNotMet {
        command: CommandKind,
        reason: Precondition,
    },

    #[error("die index {index} is out of range (hand has 5 dice)")]
    IndexOutOfRange { index: usize },

    #[error("sudden death still tied after {rounds} rounds")]
    TieBreakExhausted { rounds: u32 },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A journal entry behaved differently when replayed.
    #[error("replay diverged at journal entry {position}")]
    ReplayDiverged { position: usize },
}

impl EngineError {
    pub(crate) fn precondition(command: CommandKind, reason: Precondition) -> Self {
        EngineError::PreconditionNotMet { command, reason }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("default target must be positive")]
    InvalidDefaultTarget,

    #[error("tie-break limit must be at least one round")]
    InvalidTieBreakLimit,

    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_message() {
        let err = EngineError::precondition(CommandKind::ReRoll, Precondition::NotThrown);
        assert_eq!(
            err.to_string(),
            "cannot re-roll: the dice have not been thrown this turn"
        );
    }

    #[test]
    fn test_invalid_target_message() {
        let err = EngineError::InvalidTarget {
            input: "abc".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_replay_diverged_message() {
        let err = EngineError::ReplayDiverged { position: 4 };
        assert_eq!(err.to_string(), "replay diverged at journal entry 4");
    }
}
