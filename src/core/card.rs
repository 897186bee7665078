use std::fmt;

use crate::core::errors::CardError;

/// The value of a card.
///
/// The discriminant is the value's index (0..=12), the projection used for
/// every piece of arithmetic in the crate: straight detection, canonical
/// ordering, and tiebreak comparison. Display tokens are decoupled from the
/// index; ten renders as the two character token `10`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Value {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Value {
    /// How many distinct values there are.
    pub const COUNT: usize = 13;

    /// All values, lowest first.
    pub fn values() -> impl DoubleEndedIterator<Item = Value> {
        use Value::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The stable numeric index of this value (0..=12).
    pub fn index(self) -> u8 {
        self as u8
    }

    fn from_token(token: &str) -> Option<Value> {
        match token {
            "2" => Some(Value::Two),
            "3" => Some(Value::Three),
            "4" => Some(Value::Four),
            "5" => Some(Value::Five),
            "6" => Some(Value::Six),
            "7" => Some(Value::Seven),
            "8" => Some(Value::Eight),
            "9" => Some(Value::Nine),
            "10" => Some(Value::Ten),
            "J" => Some(Value::Jack),
            "Q" => Some(Value::Queen),
            "K" => Some(Value::King),
            "A" => Some(Value::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Value::Two => "2",
                Value::Three => "3",
                Value::Four => "4",
                Value::Five => "5",
                Value::Six => "6",
                Value::Seven => "7",
                Value::Eight => "8",
                Value::Nine => "9",
                Value::Ten => "10",
                Value::Jack => "J",
                Value::Queen => "Q",
                Value::King => "K",
                Value::Ace => "A",
            }
        )
    }
}

/// The suit of a card.
///
/// Suits keep their canonical names: ouros (diamonds), espadas (spades),
/// copas (hearts) and paus (clubs), because the compact text encoding uses
/// the first letter of each name (`o`, `e`, `c`, `p`). The declaration order
/// is the fixed comparison order; it is only a deterministic sort key, suits
/// never decide a poker tiebreak.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Suit {
    Ouros = 0,
    Espadas = 1,
    Copas = 2,
    Paus = 3,
}

impl Suit {
    /// How many suits there are.
    pub const COUNT: usize = 4;

    /// All suits in canonical order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Ouros, Suit::Espadas, Suit::Copas, Suit::Paus].into_iter()
    }

    /// The stable numeric index of this suit (0..=3).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The canonical suit name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Ouros => "ouros",
            Suit::Espadas => "espadas",
            Suit::Copas => "copas",
            Suit::Paus => "paus",
        }
    }

    /// The single letter used in the compact text encoding.
    pub fn letter(self) -> char {
        match self {
            Suit::Ouros => 'o',
            Suit::Espadas => 'e',
            Suit::Copas => 'c',
            Suit::Paus => 'p',
        }
    }

    fn from_letter(letter: char) -> Option<Suit> {
        match letter {
            'o' => Some(Suit::Ouros),
            'e' => Some(Suit::Espadas),
            'c' => Some(Suit::Copas),
            'p' => Some(Suit::Paus),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One of the 52 cards.
///
/// Cards are immutable values; equality and hashing are structural and the
/// derived ordering compares value first with suit as tiebreak (the field
/// order matters for the derive).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    /// Create a card. The enums make out-of-universe cards unrepresentable.
    pub fn new(value: Value, suit: Suit) -> Card {
        Card { value, suit }
    }

    /// Create a card from a value token and a suit letter.
    ///
    /// This is the fallible construction path: text input can name cards
    /// outside the 52 card universe. On failure the error carries the
    /// rejected tokens; a recognized suit letter is expanded to its
    /// canonical name, an unrecognized one is passed through verbatim.
    ///
    /// ```
    /// use draw_poker::core::{Card, Suit, Value};
    ///
    /// let card = Card::from_tokens("10", 'e').unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Espadas), card);
    /// assert!(Card::from_tokens("J", 'h').is_err());
    /// ```
    pub fn from_tokens(value: &str, suit: char) -> Result<Card, CardError> {
        match (Value::from_token(value), Suit::from_letter(suit)) {
            (Some(value), Some(suit)) => Ok(Card::new(value, suit)),
            (_, maybe_suit) => Err(CardError::InvalidCard {
                value: value.to_owned(),
                suit: maybe_suit
                    .map(|s| s.name().to_owned())
                    .unwrap_or_else(|| suit.to_string()),
            }),
        }
    }

    /// Parse a run of cards from the compact text encoding, e.g. `2o3p10cAe`.
    ///
    /// Each card is a value token directly followed by a suit letter, with
    /// no separators. The value buffer consumes its first character
    /// unconditionally, then digits and `J`/`Q`/`K`/`A`, until the next
    /// character is read as the suit letter. A trailing value run with no
    /// suit letter is ignored.
    ///
    /// ```
    /// use draw_poker::core::Card;
    ///
    /// let cards = Card::parse_cards("AeKp10o").unwrap();
    /// assert_eq!(3, cards.len());
    /// assert_eq!("10o", cards[2].to_string());
    /// ```
    pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardError> {
        let mut cards = Vec::new();
        let mut value = String::new();
        for c in text.chars() {
            if value.is_empty() || c.is_ascii_digit() || matches!(c, 'J' | 'Q' | 'K' | 'A') {
                value.push(c);
            } else {
                cards.push(Card::from_tokens(&value, c)?);
                value.clear();
            }
        }
        Ok(cards)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}
