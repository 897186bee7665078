use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::{rng, Rng};
use tracing::trace;

use super::DiscardStrategy;
use crate::core::{DiscardMask, Hand, Rank};

/// A probability-weighted discard selector.
///
/// The table holds one weight per (hand rank, discard mask) pair and picks
/// a mask with probability proportional to its weight within the hand's
/// rank row. Tables are produced elsewhere (training, hand tuning) and
/// cross this boundary as plain arrays through [`WeightedDiscard::from_weights`]
/// and [`WeightedDiscard::weights`]; persistence is not this crate's
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedDiscard {
    weights: [[u32; DiscardMask::COUNT]; Rank::COUNT],
}

impl WeightedDiscard {
    /// The smallest weight a table entry can hold. Keeping every weight
    /// positive means every mask stays reachable and every row stays a
    /// valid distribution.
    pub const MIN_WEIGHT: u32 = 1;

    /// The largest weight a table entry can hold.
    pub const MAX_WEIGHT: u32 = 279;

    /// Builds a table with uniformly random weights, the usual starting
    /// point before any feedback is recorded.
    pub fn new_random<R: Rng>(rng: &mut R) -> Self {
        let mut weights = [[0u32; DiscardMask::COUNT]; Rank::COUNT];
        for row in weights.iter_mut() {
            for weight in row.iter_mut() {
                *weight = rng.random_range(Self::MIN_WEIGHT..Self::MAX_WEIGHT);
            }
        }
        Self { weights }
    }

    /// Builds a table from externally produced weights, clamping each
    /// entry into the valid range.
    pub fn from_weights(weights: [[u32; DiscardMask::COUNT]; Rank::COUNT]) -> Self {
        let mut clamped = weights;
        for row in clamped.iter_mut() {
            for weight in row.iter_mut() {
                *weight = (*weight).clamp(Self::MIN_WEIGHT, Self::MAX_WEIGHT);
            }
        }
        Self { weights: clamped }
    }

    /// The current weights, for hand-off to whatever stores them.
    pub fn weights(&self) -> &[[u32; DiscardMask::COUNT]; Rank::COUNT] {
        &self.weights
    }

    /// Nudges the weight of a (rank, mask) cell by `reward`. Adjustments
    /// that would leave the valid range are dropped, saturating the cell
    /// at whichever bound it is pressing against.
    pub fn record(&mut self, rank: Rank, mask: DiscardMask, reward: i32) {
        let cell = &mut self.weights[rank.index() as usize][mask.index() as usize];
        let next = *cell as i64 + reward as i64;
        if (Self::MIN_WEIGHT as i64..=Self::MAX_WEIGHT as i64).contains(&next) {
            *cell = next as u32;
        }
    }

    /// The normalized selection probabilities for a rank's row.
    pub fn probabilities(&self, rank: Rank) -> [f64; DiscardMask::COUNT] {
        let row = &self.weights[rank.index() as usize];
        let total: u32 = row.iter().sum();
        let mut probabilities = [0.0; DiscardMask::COUNT];
        for (p, &w) in probabilities.iter_mut().zip(row.iter()) {
            *p = w as f64 / total as f64;
        }
        probabilities
    }
}

impl Default for WeightedDiscard {
    fn default() -> Self {
        Self::new_random(&mut rng())
    }
}

impl DiscardStrategy for WeightedDiscard {
    fn select(&mut self, hand: &Hand) -> DiscardMask {
        let rank = hand.rank();
        let row = &self.weights[rank.index() as usize];
        // Weights are clamped on every path in, so each row sums > 0.
        let dist = WeightedIndex::new(row).expect("table weights stay within bounds");
        let mut rng = rng();
        let mask = DiscardMask::from_index(dist.sample(&mut rng) as u8);
        trace!(%mask, %rank, hand = %hand, "WeightedDiscard selection");
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn uniform_table() -> WeightedDiscard {
        WeightedDiscard::from_weights([[1; DiscardMask::COUNT]; Rank::COUNT])
    }

    #[test]
    fn test_from_weights_clamps() {
        let mut weights = [[50; DiscardMask::COUNT]; Rank::COUNT];
        weights[0][0] = 0;
        weights[8][31] = 100_000;
        let table = WeightedDiscard::from_weights(weights);
        assert_eq!(WeightedDiscard::MIN_WEIGHT, table.weights()[0][0]);
        assert_eq!(WeightedDiscard::MAX_WEIGHT, table.weights()[8][31]);
        assert_eq!(50, table.weights()[3][7]);
    }

    #[test]
    fn test_new_random_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(11);
        let table = WeightedDiscard::new_random(&mut rng);
        for row in table.weights() {
            for &weight in row {
                assert!(weight >= WeightedDiscard::MIN_WEIGHT);
                assert!(weight < WeightedDiscard::MAX_WEIGHT);
            }
        }
    }

    #[test]
    fn test_probabilities_normalize() {
        let mut rng = SmallRng::seed_from_u64(13);
        let table = WeightedDiscard::new_random(&mut rng);
        for rank in [Rank::HighCard, Rank::Straight, Rank::StraightFlush] {
            let probabilities = table.probabilities(rank);
            assert_relative_eq!(1.0, probabilities.iter().sum::<f64>(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_heavier_masks_are_likelier() {
        let mut weights = [[1; DiscardMask::COUNT]; Rank::COUNT];
        weights[Rank::OnePair.index() as usize][10] = 200;
        let table = WeightedDiscard::from_weights(weights);
        let probabilities = table.probabilities(Rank::OnePair);
        assert!(probabilities[10] > probabilities[0] * 100.0);
    }

    #[test]
    fn test_record_adjusts_within_bounds() {
        let mut table = uniform_table();
        let mask = DiscardMask::from_index(10);
        table.record(Rank::OnePair, mask, 5);
        assert_eq!(6, table.weights()[Rank::OnePair.index() as usize][10]);
        table.record(Rank::OnePair, mask, -3);
        assert_eq!(3, table.weights()[Rank::OnePair.index() as usize][10]);
    }

    #[test]
    fn test_record_saturates_at_bounds() {
        let mut table = uniform_table();
        let mask = DiscardMask::from_index(0);

        // Already at the minimum, a negative reward is dropped.
        table.record(Rank::HighCard, mask, -1);
        assert_eq!(
            WeightedDiscard::MIN_WEIGHT,
            table.weights()[Rank::HighCard.index() as usize][0]
        );

        // A reward overshooting the maximum is dropped too.
        table.record(Rank::HighCard, mask, WeightedDiscard::MAX_WEIGHT as i32);
        assert_eq!(
            WeightedDiscard::MIN_WEIGHT,
            table.weights()[Rank::HighCard.index() as usize][0]
        );

        // One that lands exactly on the bound is kept.
        table.record(Rank::HighCard, mask, (WeightedDiscard::MAX_WEIGHT - 1) as i32);
        assert_eq!(
            WeightedDiscard::MAX_WEIGHT,
            table.weights()[Rank::HighCard.index() as usize][0]
        );
    }

    #[test]
    fn test_select_returns_well_formed_masks() {
        let hand = Hand::new_from_str("5o6e10eJcAe").unwrap();
        let mut table = uniform_table();
        for _ in 0..50 {
            let mask = table.select(&hand);
            assert!((mask.index() as usize) < DiscardMask::COUNT);
        }
    }
}
