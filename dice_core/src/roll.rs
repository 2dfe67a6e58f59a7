//! Rolling - evaluating a DiceFormula into a full roll record
//!
//! Every entry point is generic over `rand::Rng` so hosts and tests can
//! supply their own generator; `roll_seeded` gives reproducible draws for
//! replay or audit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::{DiceFormula, Keep};

/// A single die result within a roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieRoll {
    pub value: u32,
    /// True when a keep rule dropped this die from the total
    pub discarded: bool,
}

/// The complete record of one evaluated formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub formula: DiceFormula,
    /// Every die drawn, in draw order
    pub dice: Vec<DieRoll>,
    /// Sum of the non-discarded dice, before the modifier
    pub kept: u32,
    /// Final total: kept + modifier
    pub total: i32,
}

impl DiceFormula {
    /// Roll with the provided generator
    pub fn roll_with_rng<R: Rng>(&self, rng: &mut R) -> RollOutcome {
        let values: Vec<u32> = (0..self.count)
            .map(|_| rng.gen_range(1..=self.die.sides()))
            .collect();

        // Ties keep the first die drawn
        let kept_index = match self.keep {
            Keep::All => None,
            Keep::Lowest => values
                .iter()
                .enumerate()
                .min_by_key(|(_, v)| **v)
                .map(|(i, _)| i),
            Keep::Highest => values
                .iter()
                .enumerate()
                .max_by_key(|(_, v)| **v)
                .map(|(i, _)| i),
        };

        let dice: Vec<DieRoll> = values
            .iter()
            .enumerate()
            .map(|(i, &value)| DieRoll {
                value,
                discarded: kept_index.is_some_and(|k| i != k),
            })
            .collect();

        let kept: u32 = dice.iter().filter(|d| !d.discarded).map(|d| d.value).sum();

        RollOutcome {
            formula: *self,
            dice,
            kept,
            total: kept as i32 + self.modifier,
        }
    }

    /// Roll with the thread-local generator
    pub fn roll(&self) -> RollOutcome {
        self.roll_with_rng(&mut rand::thread_rng())
    }

    /// Roll deterministically from a seed
    pub fn roll_seeded(&self, seed: u64) -> RollOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.roll_with_rng(&mut rng)
    }
}

impl RollOutcome {
    /// The single kept die of a keep-lowest/keep-highest draw, or the first
    /// die of a plain draw
    pub fn kept_die(&self) -> u32 {
        self.dice
            .iter()
            .find(|d| !d.discarded)
            .map(|d| d.value)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DieSize;

    #[test]
    fn test_roll_range() {
        let f = DiceFormula::single(DieSize::D20);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let outcome = f.roll_with_rng(&mut rng);
            assert!(outcome.total >= 1 && outcome.total <= 20);
            assert_eq!(outcome.dice.len(), 1);
            assert!(!outcome.dice[0].discarded);
        }
    }

    #[test]
    fn test_keep_lowest_discards_higher() {
        let f = DiceFormula::new(2, DieSize::D20).with_keep(Keep::Lowest);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let outcome = f.roll_with_rng(&mut rng);
            assert_eq!(outcome.dice.len(), 2);
            assert_eq!(outcome.dice.iter().filter(|d| d.discarded).count(), 1);
            let kept = outcome.kept_die();
            let min = outcome.dice.iter().map(|d| d.value).min().unwrap();
            assert_eq!(kept, min);
            assert_eq!(outcome.total, min as i32);
        }
    }

    #[test]
    fn test_keep_highest_discards_lower() {
        let f = DiceFormula::new(2, DieSize::D20).with_keep(Keep::Highest);
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let outcome = f.roll_with_rng(&mut rng);
            let kept = outcome.kept_die();
            let max = outcome.dice.iter().map(|d| d.value).max().unwrap();
            assert_eq!(kept, max);
        }
    }

    #[test]
    fn test_sum_with_modifier() {
        let f = DiceFormula::new(2, DieSize::D6).with_modifier(3);
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let outcome = f.roll_with_rng(&mut rng);
            let sum: u32 = outcome.dice.iter().map(|d| d.value).sum();
            assert_eq!(outcome.kept, sum);
            assert_eq!(outcome.total, sum as i32 + 3);
            assert!(outcome.total >= f.min_total() && outcome.total <= f.max_total());
        }
    }

    #[test]
    fn test_seeded_rolls_reproduce() {
        let f = DiceFormula::parse("2d20kl").unwrap();
        let a = f.roll_seeded(42);
        let b = f.roll_seeded(42);
        assert_eq!(a, b);
    }
}
