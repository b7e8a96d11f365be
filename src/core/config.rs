//! Game configuration.
//!
//! Callers configure the engine at construction by providing a
//! `GameConfig`. Defaults reproduce the standard game: target 101, an
//! unbounded sudden death and a computer that flips a fair coin for every
//! decision.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Target used when the player confirms an empty target.
pub const DEFAULT_TARGET: u32 = 101;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target applied when `set_target` receives no input.
    pub default_target: u32,

    /// Maximum sudden-death rounds (None = retry until someone wins).
    pub tie_break_limit: Option<u32>,

    /// Probability that the computer takes another roll.
    pub computer_continue_probability: f64,

    /// Probability that the computer re-rolls a given die.
    pub computer_reroll_probability: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_target: DEFAULT_TARGET,
            tie_break_limit: None,
            computer_continue_probability: 0.5,
            computer_reroll_probability: 0.5,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_target == 0 {
            return Err(ConfigError::InvalidDefaultTarget);
        }
        if self.tie_break_limit == Some(0) {
            return Err(ConfigError::InvalidTieBreakLimit);
        }
        for (name, value) in [
            ("computer_continue_probability", self.computer_continue_probability),
            ("computer_reroll_probability", self.computer_reroll_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }

    /// Set the default target.
    #[must_use]
    pub fn with_default_target(mut self, target: u32) -> Self {
        self.default_target = target;
        self
    }

    /// Cap the number of sudden-death rounds.
    #[must_use]
    pub fn with_tie_break_limit(mut self, rounds: u32) -> Self {
        self.tie_break_limit = Some(rounds);
        self
    }

    /// Set both computer decision probabilities.
    #[must_use]
    pub fn with_computer_probabilities(mut self, continue_p: f64, reroll_p: f64) -> Self {
        self.computer_continue_probability = continue_p;
        self.computer_reroll_probability = reroll_p;
        self
    }
}
