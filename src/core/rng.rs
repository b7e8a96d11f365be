//! Randomness for dice and computer decisions.
//!
//! The engine never reaches for an ambient random source. Every face and
//! every yes/no decision is drawn from a `DiceSource` handed to the engine
//! at construction.
//!
//! ## Provided sources
//!
//! - `GameRng`: seeded ChaCha8 stream. Same seed, same game.
//! - `ScriptedDice`: replays fixed faces and decisions, then falls back to a
//!   seeded `GameRng`. Intended for tests and tutorials.
//!
//! ```
//! use lucky_toss::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::dice::FACES;

/// Source of die faces and random decisions.
///
/// Implementations must return faces in `1..=6`.
pub trait DiceSource {
    /// Draw one uniform die face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Draw a boolean that is `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;

    /// Draw a fair boolean.
    fn coin_flip(&mut self) -> bool {
        self.chance(0.5)
    }
}

impl<R: DiceSource + ?Sized> DiceSource for &mut R {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }

    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }
}

/// Deterministic RNG for dice.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// The chosen seed is kept so the game can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=FACES)
    }

    /// NaN counts as zero; anything else is clamped into `[0, 1]`.
    fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() {
            return false;
        }
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Replays scripted faces and decisions.
///
/// Faces and decisions are kept in separate queues so a test can script
/// "the human throws 6,6,6,6,6" without caring how many decisions the
/// computer draws in between. Once a queue runs dry the fallback stream
/// takes over.
///
/// ```
/// use lucky_toss::core::{DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([6, 5]).with_decisions([false]);
/// assert_eq!(dice.roll_die(), 6);
/// assert_eq!(dice.roll_die(), 5);
/// assert!(!dice.coin_flip());
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
    decisions: VecDeque<bool>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Script the given faces. Values outside `1..=6` are clamped.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, FACES)).collect(),
            decisions: VecDeque::new(),
            fallback: GameRng::new(0),
        }
    }

    /// Script the yes/no decisions, consumed by `chance` and `coin_flip`.
    #[must_use]
    pub fn with_decisions(mut self, decisions: impl IntoIterator<Item = bool>) -> Self {
        self.decisions = decisions.into_iter().collect();
        self
    }

    /// Seed the stream used once the script is exhausted.
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback = GameRng::new(seed);
        self
    }

    /// Append more faces to the script.
    pub fn push_faces(&mut self, faces: impl IntoIterator<Item = u8>) {
        self.faces.extend(faces.into_iter().map(|f| f.clamp(1, FACES)));
    }

    /// Append more decisions to the script.
    pub fn push_decisions(&mut self, decisions: impl IntoIterator<Item = bool>) {
        self.decisions.extend(decisions);
    }

    /// Scripted faces not yet drawn.
    #[must_use]
    pub fn remaining_faces(&self) -> usize {
        self.faces.len()
    }

    /// Scripted decisions not yet drawn.
    #[must_use]
    pub fn remaining_decisions(&self) -> usize {
        self.decisions.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        match self.faces.pop_front() {
            Some(face) => face,
            None => self.fallback.roll_die(),
        }
    }

    /// Scripted decisions ignore `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        match self.decisions.pop_front() {
            Some(decision) => decision,
            None => self.fallback.chance(probability),
        }
    }
}
