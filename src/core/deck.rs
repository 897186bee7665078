use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::card::{Card, Suit, Value};
use crate::core::errors::DeckError;

/// A deck of cards.
///
/// A fresh deck holds all 52 cards in suit-major, value-minor order and
/// only ever shrinks: dealing removes cards from the back of the sequence
/// and discarded cards are never returned. Equality is order-sensitive
/// over the remaining cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a full deck in the fixed deterministic order.
    pub fn new() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Value::values().map(move |v| Card::new(v, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals `n` cards from the back of the deck.
    ///
    /// The request is atomic: when fewer than `n` cards remain nothing is
    /// dealt and [`DeckError::InsufficientCards`] reports both sides.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.split_off(self.cards.len() - n).into_iter().rev().collect())
    }

    /// Deals specific cards by identity, preserving the caller's order.
    ///
    /// Atomic: if any card is absent the deck is unchanged and the error
    /// names the first missing card.
    pub fn deal_cards(&mut self, wanted: &[Card]) -> Result<Vec<Card>, DeckError> {
        let mut remaining = self.cards.clone();
        let mut dealt = Vec::with_capacity(wanted.len());
        for card in wanted {
            match remaining.iter().position(|c| c == card) {
                Some(idx) => dealt.push(remaining.remove(idx)),
                // Covers a card already dealt and a card requested twice.
                None => return Err(DeckError::CardNotFound { card: *card }),
            }
        }
        self.cards = remaining;
        Ok(dealt)
    }

    /// Number of cards left in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has been drained.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Iterates the remaining cards without dealing them.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_deck() {
        let deck = Deck::new();
        assert_eq!(Deck::SIZE, deck.len());
        for value in Value::values() {
            for suit in Suit::suits() {
                assert!(deck.contains(&Card::new(value, suit)), "{value}{suit}");
            }
        }
    }

    #[test]
    fn test_deck_has_no_duplicates() {
        let cards: HashSet<Card> = Deck::new().into_iter().collect();
        assert_eq!(Deck::SIZE, cards.len());
    }

    #[test]
    fn test_fresh_deal_order() {
        // Dealing pops from the back of the fixed order.
        let mut deck = Deck::new();
        let cards = deck.deal(5).unwrap();
        assert_eq!(47, deck.len());
        assert_eq!(Card::parse_cards("ApKpQpJp10p").unwrap(), cards);
    }

    #[test]
    fn test_deal_too_many() {
        let mut deck = Deck::new();
        assert_eq!(
            Err(DeckError::InsufficientCards {
                requested: 53,
                remaining: 52
            }),
            deck.deal(53)
        );
        // A failed deal leaves the deck whole.
        assert_eq!(Deck::SIZE, deck.len());

        deck.deal(50).unwrap();
        assert_eq!(
            Err(DeckError::InsufficientCards {
                requested: 3,
                remaining: 2
            }),
            deck.deal(3)
        );
        assert_eq!(2, deck.len());
    }

    #[test]
    fn test_deal_specific_cards() {
        let mut deck = Deck::new();
        let mut rng = SmallRng::seed_from_u64(7);
        deck.shuffle(&mut rng);

        let wanted = Card::parse_cards("9c9e9o5p5o").unwrap();
        let dealt = deck.deal_cards(&wanted).unwrap();
        assert_eq!(wanted, dealt);
        assert_eq!(47, deck.len());
        for card in &wanted {
            assert!(!deck.contains(card));
        }
    }

    #[test]
    fn test_deal_specific_missing_card() {
        let mut deck = Deck::new();
        let wanted = Card::parse_cards("9c").unwrap();
        deck.deal_cards(&wanted).unwrap();

        let again = Card::parse_cards("2o9c").unwrap();
        assert_eq!(
            Err(DeckError::CardNotFound { card: again[1] }),
            deck.deal_cards(&again)
        );
        // Atomic: the present card was not removed.
        assert!(deck.contains(&again[0]));
        assert_eq!(51, deck.len());
    }

    #[test]
    fn test_deal_specific_rejects_duplicate_request() {
        let mut deck = Deck::new();
        let wanted = Card::parse_cards("9c9c").unwrap();
        assert_eq!(
            Err(DeckError::CardNotFound { card: wanted[1] }),
            deck.deal_cards(&wanted)
        );
        assert_eq!(Deck::SIZE, deck.len());
    }

    #[test]
    fn test_deck_equality_is_order_sensitive() {
        let mut d1 = Deck::new();
        let mut d2 = Deck::new();
        assert_eq!(d1, d2);

        d1.deal(1).unwrap();
        assert_ne!(d1, d2);

        d2.deal(1).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_shuffle_permutes() {
        let mut deck = Deck::new();
        let mut rng = SmallRng::seed_from_u64(42);
        deck.shuffle(&mut rng);

        assert_ne!(Deck::new(), deck);
        assert_eq!(Deck::SIZE, deck.len());

        // Shuffling is a permutation, not a structural change.
        let shuffled: HashSet<Card> = deck.into_iter().collect();
        let fresh: HashSet<Card> = Deck::new().into_iter().collect();
        assert_eq!(fresh, shuffled);
    }
}
