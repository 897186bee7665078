use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::core::card::{Card, Value};
use crate::core::errors::HandError;
use crate::core::rank::{value_counts, Rank};

/// How many cards make a hand.
pub const HAND_SIZE: usize = 5;

/// A per-position discard indicator over the five canonical hand slots.
///
/// Position 0 is the strongest canonical slot; a set bit means the card at
/// that position is discarded in an exchange. Parsed from five character
/// `'0'`/`'1'` strings (`"01010"` discards positions 1 and 3) or built from
/// a plain index for table driven strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscardMask(u8);

impl DiscardMask {
    /// The mask that keeps every card.
    pub const KEEP_ALL: DiscardMask = DiscardMask(0);

    /// The mask that discards the whole hand.
    pub const DISCARD_ALL: DiscardMask = DiscardMask(0b11111);

    /// How many distinct masks there are.
    pub const COUNT: usize = 1 << HAND_SIZE;

    /// Build a mask from its index (0..32); only the low five bits are
    /// used. The index treats the mask as a binary number with position 0
    /// as the most significant bit, so `from_index(0b01010)` discards
    /// positions 1 and 3.
    pub fn from_index(index: u8) -> DiscardMask {
        DiscardMask(index & Self::DISCARD_ALL.0)
    }

    /// The mask's index (0..32).
    pub fn index(self) -> u8 {
        self.0
    }

    /// Whether the card at `position` (0 = strongest) is discarded.
    pub fn is_discard(self, position: usize) -> bool {
        position < HAND_SIZE && (self.0 >> (HAND_SIZE - 1 - position)) & 1 == 1
    }

    /// How many cards this mask discards.
    pub fn count(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromStr for DiscardMask {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != HAND_SIZE {
            return Err(HandError::InvalidMaskLength { len });
        }
        let mut bits = 0u8;
        for symbol in s.chars() {
            bits = (bits << 1)
                | match symbol {
                    '0' => 0,
                    '1' => 1,
                    _ => return Err(HandError::InvalidMaskSymbol { symbol }),
                };
        }
        Ok(DiscardMask(bits))
    }
}

impl fmt::Display for DiscardMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05b}", self.0)
    }
}

/// Five pairwise distinct cards held in canonical order.
///
/// Canonical order sorts descending by value (suit as deterministic
/// tiebreak) and then pulls repeated-value groups to the front, strongest
/// group first, kickers descending behind them; the wheel A-5-4-3-2 keeps
/// the ace at the end. Position-wise comparison over this order is exactly
/// the poker tiebreak, and the `Display` form is the canonical token run.
///
/// ```
/// use draw_poker::core::{Hand, Rank};
///
/// let hand = Hand::new_from_str("5o6e10eJcAe")?;
/// assert_eq!(Rank::HighCard, hand.rank());
/// assert_eq!("AeJc10e6e5o", hand.to_string());
/// # Ok::<(), draw_poker::core::HandError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Create a hand from five distinct cards, in any order.
    ///
    /// Fails with [`HandError::InvalidHandSize`] carrying the distinct card
    /// count when given anything other than five unique cards.
    pub fn new(cards: Vec<Card>) -> Result<Hand, HandError> {
        let mut distinct = cards.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if cards.len() != HAND_SIZE || distinct.len() != HAND_SIZE {
            return Err(HandError::InvalidHandSize {
                count: distinct.len(),
            });
        }
        let mut hand = Hand {
            cards: [cards[0], cards[1], cards[2], cards[3], cards[4]],
        };
        hand.canonicalize();
        Ok(hand)
    }

    /// Parse a hand from the compact text encoding, e.g. `"Ae2o3p4c5e"`.
    pub fn new_from_str(text: &str) -> Result<Hand, HandError> {
        Ok(Hand::new(Card::parse_cards(text)?)?)
    }

    /// The five cards in canonical order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand's rank, re-derived from the current cards.
    pub fn rank(&self) -> Rank {
        Rank::of(&self.cards)
    }

    /// Restore canonical order after construction or an exchange.
    ///
    /// One generic regrouping covers every positional sub-case: a stable
    /// sort by descending value-occurrence count over the descending card
    /// sort leads with the strongest repeated group and leaves kickers
    /// descending. The wheel is the single special case, rotating the ace
    /// from the front to the end.
    fn canonicalize(&mut self) {
        self.cards.sort_unstable_by(|a, b| b.cmp(a));

        use Value::*;
        if self.cards.map(|c| c.value) == [Ace, Five, Four, Three, Two] {
            self.cards.rotate_left(1);
        } else {
            let counts = value_counts(&self.cards);
            self.cards
                .sort_by_key(|c| Reverse(counts[c.value as usize]));
        }
    }

    fn assert_disjoint(&self, other: &Hand) -> Result<(), HandError> {
        if self
            .cards
            .iter()
            .any(|card| other.cards.contains(card))
        {
            Err(HandError::OverlappingHands)
        } else {
            Ok(())
        }
    }

    /// Compare two hands for winner determination.
    ///
    /// Fails with [`HandError::OverlappingHands`] before any ranking when
    /// the hands share a card. Otherwise the higher rank wins and equal
    /// ranks are broken position-wise by value over the canonical order;
    /// `Ordering::Equal` is a true tie (same values everywhere, only suits
    /// differ).
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use draw_poker::core::Hand;
    ///
    /// let low = Hand::new_from_str("5o6e10eJcKe")?;
    /// let high = Hand::new_from_str("5e6c10cJpAc")?;
    /// assert_eq!(Ordering::Less, low.compare(&high)?);
    /// # Ok::<(), draw_poker::core::HandError>(())
    /// ```
    pub fn compare(&self, other: &Hand) -> Result<Ordering, HandError> {
        self.assert_disjoint(other)?;
        let by_rank = self.rank().cmp(&other.rank());
        if by_rank != Ordering::Equal {
            return Ok(by_rank);
        }
        for (mine, theirs) in self.cards.iter().zip(other.cards.iter()) {
            let by_value = mine.value.cmp(&theirs.value);
            if by_value != Ordering::Equal {
                return Ok(by_value);
            }
        }
        Ok(Ordering::Equal)
    }

    /// Whether two hands hold the same rank.
    ///
    /// This is deliberately a separate predicate from [`Hand::compare`]:
    /// two hands can match ranks while `compare` still discriminates their
    /// kickers. The same disjointness precondition applies.
    pub fn matches_rank(&self, other: &Hand) -> Result<bool, HandError> {
        self.assert_disjoint(other)?;
        Ok(self.rank() == other.rank())
    }

    /// The cards an exchange with `mask` would remove, in canonical order.
    ///
    /// Callers use this to hand cards back before drawing replacements;
    /// the hand itself is untouched.
    pub fn discards(&self, mask: DiscardMask) -> Vec<Card> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(position, _)| mask.is_discard(*position))
            .map(|(_, card)| *card)
            .collect()
    }

    /// Replace the masked positions with `replacements` and re-canonicalize.
    ///
    /// Fails with [`HandError::InvalidReplacementCount`] when the
    /// replacement count doesn't match the mask's discard count, and with
    /// [`HandError::InvalidHandSize`] when the resulting five cards would
    /// not be pairwise distinct. On any failure the hand is left unchanged.
    pub fn exchange(
        &mut self,
        mask: DiscardMask,
        replacements: &[Card],
    ) -> Result<(), HandError> {
        let expected = mask.count();
        if replacements.len() != expected {
            return Err(HandError::InvalidReplacementCount {
                expected,
                actual: replacements.len(),
            });
        }

        let mut next: Vec<Card> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(position, _)| !mask.is_discard(*position))
            .map(|(_, card)| *card)
            .collect();
        next.extend_from_slice(replacements);

        let exchanged = Hand::new(next)?;
        *self = exchanged;
        trace!(mask = %mask, hand = %self, rank = %self.rank(), "exchanged cards");
        Ok(())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
