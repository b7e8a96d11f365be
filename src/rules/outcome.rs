//! Judging totals and end-of-turn reports.

use serde::{Deserialize, Serialize};

use crate::core::dice::{ComputerHand, Faces};
use crate::core::outcome::Outcome;
use crate::core::side::{Side, SideMap};

/// How the totals stand after a turn is banked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nobody reached the target.
    Continue,
    /// One side reached the target and is declared the winner.
    Winner(Side),
    /// Both sides reached the target with equal totals.
    SuddenDeath,
}

/// Judge the totals against the target.
///
/// The human is checked first: when both sides pass the target with
/// different totals the human wins regardless of who is ahead.
///
/// ```
/// use lucky_toss::core::{Side, SideMap};
/// use lucky_toss::rules::{judge, Verdict};
///
/// assert_eq!(judge(SideMap::new(90, 80), 101), Verdict::Continue);
/// assert_eq!(judge(SideMap::new(90, 105), 101), Verdict::Winner(Side::Computer));
/// assert_eq!(judge(SideMap::new(105, 105), 101), Verdict::SuddenDeath);
/// ```
#[must_use]
pub fn judge(totals: SideMap<u32>, target: u32) -> Verdict {
    let human_there = totals.human >= target;
    let computer_there = totals.computer >= target;

    if human_there && computer_there && totals.human == totals.computer {
        Verdict::SuddenDeath
    } else if human_there {
        Verdict::Winner(Side::Human)
    } else if computer_there {
        Verdict::Winner(Side::Computer)
    } else {
        Verdict::Continue
    }
}

/// One sudden-death round: both sides throw five fresh dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakRound {
    pub dice: SideMap<Faces>,
    pub sums: SideMap<u32>,
}

/// A finished sudden death.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreak {
    /// Every round thrown; only the last one is decisive.
    pub rounds: Vec<TieBreakRound>,
    pub winner: Side,
}

/// Everything that happened when a turn was banked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn that was banked.
    pub turn: u32,

    /// Pips the human banked.
    pub human_turn_score: u32,

    /// Pips the computer scored.
    pub computer_turn_score: u32,

    /// Rolls the computer took (1-3).
    pub computer_rolls: u8,

    /// The computer's dice after its last roll.
    pub computer_dice: ComputerHand,

    /// Totals after this turn.
    pub totals: SideMap<u32>,

    /// Present when both sides tied at or above the target.
    pub tie_break: Option<TieBreak>,

    /// `None` when the game continues.
    pub outcome: Option<Outcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_below_target() {
        assert_eq!(judge(SideMap::new(0, 0), 101), Verdict::Continue);
        assert_eq!(judge(SideMap::new(100, 100), 101), Verdict::Continue);
    }

    #[test]
    fn test_judge_exact_target_wins() {
        assert_eq!(judge(SideMap::new(101, 40), 101), Verdict::Winner(Side::Human));
        assert_eq!(judge(SideMap::new(40, 101), 101), Verdict::Winner(Side::Computer));
    }

    #[test]
    fn test_judge_human_checked_first() {
        // Computer is further past the target but the human still wins
        assert_eq!(judge(SideMap::new(102, 120), 101), Verdict::Winner(Side::Human));
    }

    #[test]
    fn test_judge_tie_below_target_continues() {
        assert_eq!(judge(SideMap::new(50, 50), 101), Verdict::Continue);
    }

    #[test]
    fn test_judge_tie_at_target() {
        assert_eq!(judge(SideMap::new(105, 105), 100), Verdict::SuddenDeath);
        assert_eq!(judge(SideMap::new(100, 100), 100), Verdict::SuddenDeath);
    }
}
