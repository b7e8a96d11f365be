//! Dice and hands.
//!
//! Each side always holds exactly five dice. The human's dice carry a
//! `kept` flag that shields them from re-rolls; the computer's hand is just
//! five face values.

use serde::{Deserialize, Serialize};

use super::rng::DiceSource;

/// Number of dice in a hand.
pub const DICE_PER_HAND: usize = 5;

/// Highest face on a die.
pub const FACES: u8 = 6;

/// Rolls allowed per turn, the initial throw included.
pub const MAX_ROLLS: u8 = 3;

/// Five bare face values.
pub type Faces = [u8; DICE_PER_HAND];

/// The computer's hand.
pub type ComputerHand = Faces;

/// The human's hand.
pub type HumanHand = [Die; DICE_PER_HAND];

/// A human die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    /// Face value, `1..=6`.
    pub value: u8,
    /// Excluded from re-rolls for the rest of the turn.
    pub kept: bool,
}

impl Die {
    /// A fresh, unkept die.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self { value, kept: false }
    }

    /// Same face, kept.
    #[must_use]
    pub const fn kept(self) -> Self {
        Self {
            value: self.value,
            kept: true,
        }
    }
}

/// Roll five fresh human dice, none kept.
pub fn roll_human_hand(source: &mut impl DiceSource) -> HumanHand {
    std::array::from_fn(|_| Die::new(source.roll_die()))
}

/// Roll five fresh bare faces, e.g. the computer's hand.
pub fn roll_faces(source: &mut impl DiceSource) -> Faces {
    std::array::from_fn(|_| source.roll_die())
}

/// Sum of the faces of a human hand.
#[must_use]
pub fn human_pips(hand: &HumanHand) -> u32 {
    hand.iter().map(|d| u32::from(d.value)).sum()
}

/// Sum of five bare faces.
#[must_use]
pub fn pips(hand: &Faces) -> u32 {
    hand.iter().map(|&v| u32::from(v)).sum()
}
