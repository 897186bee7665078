use std::fmt;

use crate::core::card::{Card, Value};
use crate::core::hand::HAND_SIZE;

/// All the different hand ranks, declared in ascending strength so the
/// derived ordering is the comparison order. Exactly one rank applies to
/// any five card hand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Rank {
    /// No matches, no sequence, mixed suits.
    HighCard,
    /// One card value matches another.
    OnePair,
    /// Two different pairs of matching values.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in sequence, all of the same suit.
    StraightFlush,
}

impl Rank {
    /// How many ranks there are.
    pub const COUNT: usize = 9;

    /// The rank's strength index (0..=8), higher is stronger.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Classify five cards in canonical order.
    ///
    /// The priority ladder makes the ranks mutually exclusive: straight
    /// flush before quads before full house before flush before straight,
    /// then the pair shapes, falling through to high card.
    pub(crate) fn of(cards: &[Card; HAND_SIZE]) -> Rank {
        let mut pairs = 0;
        let mut trips = false;
        let mut quads = false;
        for &n in &value_counts(cards) {
            match n {
                2 => pairs += 1,
                3 => trips = true,
                4 => quads = true,
                _ => {}
            }
        }

        let sequence = is_sequence(cards);
        let flush = is_flush(cards);

        if sequence && flush {
            Rank::StraightFlush
        } else if quads {
            Rank::FourOfAKind
        } else if trips && pairs == 1 {
            Rank::FullHouse
        } else if flush {
            Rank::Flush
        } else if sequence {
            Rank::Straight
        } else if trips {
            Rank::ThreeOfAKind
        } else if pairs == 2 {
            Rank::TwoPair
        } else if pairs == 1 {
            Rank::OnePair
        } else {
            Rank::HighCard
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::HighCard => "high card",
                Rank::OnePair => "one pair",
                Rank::TwoPair => "two pair",
                Rank::ThreeOfAKind => "three of a kind",
                Rank::Straight => "straight",
                Rank::Flush => "flush",
                Rank::FullHouse => "full house",
                Rank::FourOfAKind => "four of a kind",
                Rank::StraightFlush => "straight flush",
            }
        )
    }
}

/// Occurrences of each value index across the hand.
pub(crate) fn value_counts(cards: &[Card; HAND_SIZE]) -> [u8; Value::COUNT] {
    let mut counts = [0u8; Value::COUNT];
    for card in cards {
        counts[card.value as usize] += 1;
    }
    counts
}

/// Five consecutive value indices modulo the 13 value cycle, anchored at
/// the first (strongest) card of the canonical order.
///
/// The wheel A-5-4-3-2 is canonicalized with the ace rotated to the end,
/// which is the single arrangement where the modular wrap fires; no other
/// low wraparound exists in poker and none is recognized here.
fn is_sequence(cards: &[Card; HAND_SIZE]) -> bool {
    let top = cards[0].value as i32;
    cards
        .iter()
        .enumerate()
        .all(|(i, c)| c.value as i32 == (top - i as i32).rem_euclid(Value::COUNT as i32))
}

fn is_flush(cards: &[Card; HAND_SIZE]) -> bool {
    cards.iter().all(|c| c.suit == cards[0].suit)
}
