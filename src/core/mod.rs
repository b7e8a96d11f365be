//! Core engine types: dice, sides, randomness, configuration, commands,
//! events, outcomes, state and errors.
//!
//! Nothing in here knows the turn rules; `rules` builds on these types.

pub mod command;
pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod outcome;
pub mod rng;
pub mod side;
pub mod state;

pub use command::{Command, CommandRecord, TargetInput};
pub use config::{GameConfig, DEFAULT_TARGET};
pub use dice::{ComputerHand, Die, Faces, HumanHand, DICE_PER_HAND, FACES, MAX_ROLLS};
pub use error::{CommandKind, ConfigError, EngineError, Precondition};
pub use event::GameEvent;
pub use outcome::Outcome;
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use side::{Side, SideMap};
pub use state::{GameState, SessionTally};
