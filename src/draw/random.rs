use rand::{rng, Rng};
use tracing::trace;

use super::DiscardStrategy;
use crate::core::{DiscardMask, Hand};

/// A strategy that discards a uniformly random subset of the hand,
/// ignoring the cards entirely. Useful as a baseline opponent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDiscard;

impl DiscardStrategy for RandomDiscard {
    fn select(&mut self, hand: &Hand) -> DiscardMask {
        let mut rng = rng();
        let mask = DiscardMask::from_index(rng.random_range(0..DiscardMask::COUNT as u8));
        trace!(%mask, hand = %hand, "RandomDiscard selection");
        mask
    }
}
