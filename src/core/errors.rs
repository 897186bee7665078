use thiserror::Error;

use crate::core::card::Card;

/// Errors from text-level card construction.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum CardError {
    /// The token pair names a card outside the 52 card universe. The
    /// rejected tokens are carried verbatim for diagnostic display.
    #[error("invalid card ({value:?}, {suit:?})")]
    InvalidCard { value: String, suit: String },
}

/// Errors from dealing out of a deck.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DeckError {
    #[error("can't deal {requested} cards from a deck holding {remaining}")]
    InsufficientCards { requested: usize, remaining: usize },

    #[error("card {card} is not in the deck")]
    CardNotFound { card: Card },
}

/// Errors from hand construction, comparison, and exchange.
///
/// All of these signal contract violations by the caller; none are
/// retryable and every failing operation leaves its hand unchanged.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HandError {
    /// A hand needs exactly five pairwise distinct cards; the payload is
    /// the distinct count that was actually supplied.
    #[error("invalid number of distinct cards for a hand: {count}")]
    InvalidHandSize { count: usize },

    #[error("discard mask must cover 5 positions, got {len}")]
    InvalidMaskLength { len: usize },

    #[error("discard mask may only contain '0' or '1', got {symbol:?}")]
    InvalidMaskSymbol { symbol: char },

    #[error("mask discards {expected} cards but {actual} replacements were given")]
    InvalidReplacementCount { expected: usize, actual: usize },

    /// Two hands under comparison share a card; a usage error, not a game
    /// outcome.
    #[error("hands under comparison share a card")]
    OverlappingHands,

    #[error(transparent)]
    Card(#[from] CardError),
}
