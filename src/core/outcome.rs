//! Game outcome.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    HumanWins,
    ComputerWins,
}

impl Outcome {
    /// Outcome in which `side` wins.
    #[must_use]
    pub const fn for_winner(side: Side) -> Self {
        match side {
            Side::Human => Outcome::HumanWins,
            Side::Computer => Outcome::ComputerWins,
        }
    }

    /// The winning side.
    #[must_use]
    pub const fn winner(self) -> Side {
        match self {
            Outcome::HumanWins => Side::Human,
            Outcome::ComputerWins => Side::Computer,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(self, side: Side) -> bool {
        self.winner() == side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::HumanWins.winner(), Side::Human);
        assert_eq!(Outcome::for_winner(Side::Computer), Outcome::ComputerWins);
        assert!(Outcome::ComputerWins.is_winner(Side::Computer));
        assert!(!Outcome::ComputerWins.is_winner(Side::Human));
    }
}
