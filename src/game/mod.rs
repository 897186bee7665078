//! A thin driver for one round of five card draw: deal every player five
//! cards, let each player's discard strategy exchange once, then show down.
//! There is no betting here; the round exists so strategies can be played
//! against each other and scored.
use rand::Rng;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::{Deck, DeckError, Hand, HandError, Rank, HAND_SIZE};
use crate::draw::DiscardStrategy;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Hand(#[from] HandError),
}

/// A seat at the table: a name, a discard strategy, and (once dealt) a
/// hand.
pub struct Player {
    name: String,
    strategy: Box<dyn DiscardStrategy>,
    hand: Option<Hand>,
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn DiscardStrategy>) -> Self {
        Self {
            name: name.into(),
            strategy,
            hand: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's current hand, if one has been dealt.
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }
}

/// How a round ended: who won, with what rank, and what everyone held.
#[derive(Debug, Clone)]
pub struct Showdown {
    /// Names of every player holding the best rank. More than one name is
    /// a split.
    pub winners: Vec<String>,
    /// The winning rank.
    pub rank: Rank,
    /// Every player's name and final hand, in seating order.
    pub reveals: Vec<(String, String)>,
}

/// One round of five card draw over a freshly shuffled deck.
pub struct DrawGame {
    deck: Deck,
    players: Vec<Player>,
}

impl DrawGame {
    pub fn new(players: Vec<Player>) -> Result<DrawGame, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(DrawGame {
            deck: Deck::new(),
            players,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Plays the round: shuffle, deal, one exchange pass, showdown.
    ///
    /// Winners are every player whose hand holds the best rank; hands that
    /// tie on rank split regardless of kickers, which is how the showdown
    /// is scored here.
    #[instrument(level = "debug", skip_all, fields(players = self.players.len()))]
    pub fn run<R: Rng>(&mut self, rng: &mut R) -> Result<Showdown, GameError> {
        self.deck.shuffle(rng);

        for player in self.players.iter_mut() {
            let hand = Hand::new(self.deck.deal(HAND_SIZE)?)?;
            debug!(player = %player.name, hand = %hand, "dealt");
            player.hand = Some(hand);
        }

        for player in self.players.iter_mut() {
            let Some(hand) = player.hand.as_mut() else {
                continue;
            };
            let mask = player.strategy.select(hand);
            let discarded = hand.discards(mask);
            let replacements = self.deck.deal(discarded.len())?;
            hand.exchange(mask, &replacements)?;
            debug!(
                player = %player.name,
                %mask,
                exchanged = discarded.len(),
                hand = %hand,
                "exchange round"
            );
        }

        let best = self
            .players
            .iter()
            .filter_map(|p| p.hand.as_ref())
            .map(Hand::rank)
            .max()
            .ok_or(GameError::NoPlayers)?;

        let winners = self
            .players
            .iter()
            .filter(|p| p.hand.as_ref().is_some_and(|h| h.rank() == best))
            .map(|p| p.name.clone())
            .collect::<Vec<_>>();

        let reveals = self
            .players
            .iter()
            .map(|p| {
                (
                    p.name.clone(),
                    p.hand.as_ref().map(Hand::to_string).unwrap_or_default(),
                )
            })
            .collect();

        debug!(?winners, rank = %best, "showdown");
        Ok(Showdown {
            winners,
            rank: best,
            reveals,
        })
    }
}
