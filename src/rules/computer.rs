//! The computer opponent's roll policy.
//!
//! The computer plays its whole turn in one go once the human banks.
//! Policies are trait-based so callers can plug in their own; the stock
//! `RandomReroller` never looks at its dice.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;
use crate::core::dice::{pips, ComputerHand, MAX_ROLLS};
use crate::core::rng::DiceSource;

/// The computer's finished turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerTurn {
    /// Dice after the last roll.
    pub dice: ComputerHand,
    /// Initial sum plus every replacement face drawn.
    pub score: u32,
    /// Rolls taken, the initial throw included (1-3).
    pub rolls: u8,
}

/// Policy for playing the computer's turn.
pub trait ComputerStrategy: Send + Sync {
    /// Play a turn starting from the already thrown `initial` hand.
    fn play_turn(&self, initial: ComputerHand, source: &mut dyn DiceSource) -> ComputerTurn;
}

/// Random re-roll policy.
///
/// Before each optional roll it draws "keep rolling?"; when rolling, every
/// die independently draws "re-roll me?". Replaced dice add their new face
/// to the score without subtracting the old one.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomReroller {
    /// Probability of taking another roll.
    pub continue_probability: f64,
    /// Probability of re-rolling each die.
    pub reroll_probability: f64,
}

impl Default for RandomReroller {
    fn default() -> Self {
        Self {
            continue_probability: 0.5,
            reroll_probability: 0.5,
        }
    }
}

impl RandomReroller {
    /// Policy with the probabilities from `config`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            continue_probability: config.computer_continue_probability,
            reroll_probability: config.computer_reroll_probability,
        }
    }
}

impl ComputerStrategy for RandomReroller {
    fn play_turn(&self, initial: ComputerHand, source: &mut dyn DiceSource) -> ComputerTurn {
        let mut dice = initial;
        let mut score = pips(&dice);
        let mut rolls = 1;

        while rolls < MAX_ROLLS {
            if !source.chance(self.continue_probability) {
                log::trace!("computer stands after {} rolls", rolls);
                break;
            }

            for die in &mut dice {
                if source.chance(self.reroll_probability) {
                    let face = source.roll_die();
                    log::trace!("computer re-rolls {} -> {}", die, face);
                    *die = face;
                    score += u32::from(face);
                }
            }
            rolls += 1;
        }

        ComputerTurn { dice, score, rolls }
    }
}
