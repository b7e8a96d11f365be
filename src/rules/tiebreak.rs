//! Sudden-death tie-break.
//!
//! When both sides bank past the target with equal totals, each side throws
//! five fresh dice and the higher sum wins. Equal sums throw again.
//!
//! Without a round limit the loop ends with probability 1 but has no hard
//! bound. A limit turns an endless streak of ties into
//! `EngineError::TieBreakExhausted`.

use crate::core::dice::{pips, roll_faces};
use crate::core::error::EngineError;
use crate::core::rng::DiceSource;
use crate::core::side::{Side, SideMap};

use super::outcome::{TieBreak, TieBreakRound};

/// Throw rounds until the sums differ, or until `limit` rounds all tie.
pub fn sudden_death(
    source: &mut impl DiceSource,
    limit: Option<u32>,
) -> Result<TieBreak, EngineError> {
    let mut rounds = Vec::new();

    loop {
        if let Some(limit) = limit {
            if rounds.len() as u64 >= u64::from(limit) {
                log::warn!("sudden death still tied after {} rounds", limit);
                return Err(EngineError::TieBreakExhausted { rounds: limit });
            }
        }

        // Human throws first
        let human = roll_faces(source);
        let computer = roll_faces(source);
        let round = TieBreakRound {
            dice: SideMap::new(human, computer),
            sums: SideMap::new(pips(&human), pips(&computer)),
        };
        log::trace!(
            "sudden death round {}: human {:?}={} computer {:?}={}",
            rounds.len() + 1,
            human,
            round.sums.human,
            computer,
            round.sums.computer
        );
        rounds.push(round);

        let winner = match round.sums.human.cmp(&round.sums.computer) {
            std::cmp::Ordering::Greater => Side::Human,
            std::cmp::Ordering::Less => Side::Computer,
            std::cmp::Ordering::Equal => continue,
        };

        log::debug!("sudden death won by {} after {} rounds", winner, rounds.len());
        return Ok(TieBreak { rounds, winner });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedDice};

    #[test]
    fn test_single_round_human_wins() {
        // Human 20, computer 15
        let mut dice = ScriptedDice::new([4, 4, 4, 4, 4, 3, 3, 3, 3, 3]);
        let result = sudden_death(&mut dice, None).unwrap();

        assert_eq!(result.winner, Side::Human);
        assert_eq!(result.rounds.len(), 1);
        assert_eq!(result.rounds[0].sums, SideMap::new(20, 15));
    }

    #[test]
    fn test_ties_repeat() {
        let mut dice = ScriptedDice::new([
            1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 5 vs 5
            6, 6, 6, 6, 6, 6, 6, 6, 6, 6, // 30 vs 30
            1, 2, 3, 4, 5, 6, 6, 6, 6, 6, // 15 vs 30
        ]);
        let result = sudden_death(&mut dice, None).unwrap();

        assert_eq!(result.winner, Side::Computer);
        assert_eq!(result.rounds.len(), 3);
        assert_eq!(result.rounds[0].sums, SideMap::new(5, 5));
        assert_eq!(result.rounds[2].dice.human, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_limit_exhausted() {
        let mut dice = ScriptedDice::new([2; 20]);
        let err = sudden_death(&mut dice, Some(2)).unwrap_err();

        assert_eq!(err, EngineError::TieBreakExhausted { rounds: 2 });
        assert_eq!(dice.remaining_faces(), 0);
    }

    #[test]
    fn test_limit_not_hit_when_decided() {
        let mut dice = ScriptedDice::new([2, 2, 2, 2, 2, 2, 2, 2, 2, 3]);
        let result = sudden_death(&mut dice, Some(1)).unwrap();
        assert_eq!(result.winner, Side::Computer);
    }

    #[test]
    fn test_always_one_winner() {
        let mut rng = GameRng::new(5);
        for _ in 0..200 {
            let result = sudden_death(&mut rng, None).unwrap();
            let last = result.rounds.last().unwrap();
            assert_ne!(last.sums.human, last.sums.computer);
            assert!(result.rounds[..result.rounds.len() - 1]
                .iter()
                .all(|r| r.sums.human == r.sums.computer));
        }
    }
}
