//! A library for five card draw poker.
//!
//! The heart of the crate is the [`core`] module: card values and suits,
//! decks, and the [`core::Hand`] engine that classifies five cards into one
//! of nine ranks, keeps them in canonical order, compares hands for winner
//! determination, and exchanges cards during the draw round. The [`draw`]
//! module provides discard strategies behind a narrow trait, and [`game`]
//! drives a full round so strategies can be played against each other.
//!
//! ```
//! use draw_poker::core::{Hand, Rank};
//!
//! // The wheel: the one straight where the ace plays low.
//! let hand = Hand::new_from_str("Ae2o3p4c5e")?;
//! assert_eq!(Rank::Straight, hand.rank());
//! assert_eq!("5e4c3p2oAe", hand.to_string());
//! # Ok::<(), draw_poker::core::HandError>(())
//! ```
pub mod core;
pub mod draw;
pub mod game;
