//! Turn rules.
//!
//! - `engine`: `TurnEngine`, the command API that owns the game state
//! - `computer`: the computer's roll policy
//! - `tiebreak`: sudden death when both sides tie past the target
//! - `outcome`: judging totals and reporting banked turns

pub mod computer;
pub mod engine;
pub mod outcome;
pub mod tiebreak;

pub use computer::{ComputerStrategy, ComputerTurn, RandomReroller};
pub use engine::{CommandOutput, TurnEngine};
pub use outcome::{judge, TieBreak, TieBreakRound, TurnReport, Verdict};

pub use crate::core::Outcome;
pub use tiebreak::sudden_death;
