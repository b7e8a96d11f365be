//! # lucky-toss
//!
//! Turn-resolution engine for a two-player dice game: a human against the
//! computer, first to a target score.
//!
//! ## Rules in brief
//!
//! - Each side throws five dice per turn.
//! - The human may keep any dice and re-roll the rest up to twice; every
//!   freshly rolled face adds to the turn score.
//! - Banking the turn lets the computer play its own (random) turn.
//! - Reaching the target wins; a tie at or past the target goes to sudden
//!   death.
//!
//! ## Design Principles
//!
//! 1. **No presentation**: the engine takes commands and hands back state
//!    snapshots and events. Rendering, input and timers live in the caller.
//!
//! 2. **Injected randomness**: all dice come from a `DiceSource`, so a seed
//!    reproduces a game and tests can script every face.
//!
//! 3. **All-or-nothing commands**: a refused command leaves the state as it
//!    was.
//!
//! ## Modules
//!
//! - `core`: dice, sides, randomness, configuration, commands, events, state
//! - `rules`: the turn engine, computer policy, tie-break and outcomes

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Command, CommandKind, CommandRecord, ConfigError, DiceSource, Die, EngineError, GameConfig,
    GameEvent, GameRng, GameState, Precondition, ScriptedDice, SessionTally, Side, SideMap,
    TargetInput,
};

pub use crate::rules::{
    CommandOutput, ComputerStrategy, ComputerTurn, Outcome, RandomReroller, TieBreak, TurnEngine,
    TurnReport,
};
