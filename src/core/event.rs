//! Events emitted by the engine for UI feedback.
//!
//! Every state transition queues one or more events. The presentation layer
//! drains them after each command to drive animations and announcements.

use serde::{Deserialize, Serialize};

use super::dice::{ComputerHand, Faces, HumanHand};
use super::outcome::Outcome;
use super::side::{Side, SideMap};

/// Something that happened in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Target confirmed for this game.
    TargetSet { target: u32 },
    /// Initial throw of a turn.
    Thrown {
        human: HumanHand,
        computer: ComputerHand,
        turn_score: u32,
    },
    /// A human die was kept or released.
    KeepToggled { index: usize, kept: bool },
    /// Non-kept human dice were re-rolled.
    ReRolled {
        dice: HumanHand,
        added: u32,
        roll_count: u8,
    },
    /// The computer finished its roll sequence.
    ComputerPlayed {
        dice: ComputerHand,
        rolls: u8,
        turn_score: u32,
    },
    /// One sudden-death round.
    TieBreakRound {
        round: u32,
        human: Faces,
        computer: Faces,
    },
    /// A turn was banked.
    TurnScored {
        turn: u32,
        human_turn_score: u32,
        computer_turn_score: u32,
        totals: SideMap<u32>,
    },
    /// The game has a winner. The engine waits for `reset`.
    GameOver { outcome: Outcome, winner: Side },
    /// A new game started at the same target.
    Reset { target: Option<u32> },
}
