//! Game state.
//!
//! ## GameState
//!
//! The single aggregate the engine owns:
//! - Target, dice for both sides, running totals
//! - Human roll count and turn score
//! - Outcome marker
//! - Command history of the current game
//!
//! ## SessionTally
//!
//! Win counts across games played on one engine. Survives `reset`.
//!
//! Callers only ever see `&GameState`; mutation goes through `TurnEngine`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::command::CommandRecord;
use super::dice::{human_pips, ComputerHand, HumanHand, MAX_ROLLS};
use super::outcome::Outcome;
use super::side::{Side, SideMap};

/// Wins per side across games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTally {
    /// Finished games won by each side.
    pub games_won: SideMap<u32>,

    /// Games decided by sudden death.
    pub tie_breaks: u32,
}

impl SessionTally {
    /// Games finished so far.
    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_won.human + self.games_won.computer
    }

    pub(crate) fn record(&mut self, winner: Side, sudden_death: bool) {
        self.games_won[winner] += 1;
        if sudden_death {
            self.tie_breaks += 1;
        }
    }
}

/// Complete game state.
///
/// Uses an `im` vector for the history so snapshot clones stay O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Configuration ===
    /// Target score; `None` until confirmed.
    pub(crate) target: Option<u32>,

    // === Dice ===
    pub(crate) human_dice: HumanHand,
    pub(crate) computer_dice: ComputerHand,

    // === Scores ===
    pub(crate) totals: SideMap<u32>,
    pub(crate) roll_count: u8,
    pub(crate) turn_score: u32,

    // === Progression ===
    pub(crate) turn_number: u32,
    pub(crate) outcome: Option<Outcome>,

    // === Bookkeeping ===
    pub(crate) history: Vector<CommandRecord>,
    pub(crate) tally: SessionTally,
}

impl GameState {
    /// Create a state for a new game with the given opening dice.
    ///
    /// ## Defaults
    ///
    /// - `target`: unset
    /// - `totals`: zero
    /// - `roll_count`: 0 (not thrown)
    /// - `turn_number`: 1
    #[must_use]
    pub fn new(human_dice: HumanHand, computer_dice: ComputerHand) -> Self {
        Self {
            target: None,
            human_dice,
            computer_dice,
            totals: SideMap::default(),
            roll_count: 0,
            turn_score: 0,
            turn_number: 1,
            outcome: None,
            history: Vector::new(),
            tally: SessionTally::default(),
        }
    }

    /// Target score, if confirmed.
    #[must_use]
    pub fn target(&self) -> Option<u32> {
        self.target
    }

    /// The human's dice.
    #[must_use]
    pub fn human_dice(&self) -> &HumanHand {
        &self.human_dice
    }

    /// The computer's dice.
    #[must_use]
    pub fn computer_dice(&self) -> &ComputerHand {
        &self.computer_dice
    }

    /// Running totals for both sides.
    #[must_use]
    pub fn totals(&self) -> SideMap<u32> {
        self.totals
    }

    /// Running total of one side.
    #[must_use]
    pub fn total(&self, side: Side) -> u32 {
        self.totals[side]
    }

    /// Human rolls taken this turn (0 = not thrown yet).
    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    /// Rolls the human may still take this turn.
    #[must_use]
    pub fn rolls_left(&self) -> u8 {
        MAX_ROLLS.saturating_sub(self.roll_count)
    }

    /// Pips the human has accumulated this turn.
    #[must_use]
    pub fn turn_score(&self) -> u32 {
        self.turn_score
    }

    /// Sum of the faces currently showing on the human's dice.
    #[must_use]
    pub fn showing(&self) -> u32 {
        human_pips(&self.human_dice)
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The game's outcome, `None` while it is still running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the game has a winner.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Commands applied in this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// Wins across games on this engine.
    #[must_use]
    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    /// Record a command in history.
    pub(crate) fn record(&mut self, record: CommandRecord) {
        self.history.push_back(record);
    }

    /// Next history sequence number.
    pub(crate) fn next_sequence(&self) -> u32 {
        u32::try_from(self.history.len()).unwrap_or(u32::MAX)
    }
}
