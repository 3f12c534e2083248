//! The 52 card deck.
//!
//! A [`Deck`] owns its cards and only hands out copies, so callers cannot
//! break the no-duplicates invariant. Cards are dealt from the top, which is
//! the end of the internal list.
//!
//! ```
//! use poker_eval::deck::Deck;
//!
//! let mut deck = Deck::shuffled();
//! let hole = deck.deal_many(2).unwrap();
//! assert_eq!(hole.len(), 2);
//! assert_eq!(deck.len(), 50);
//!
//! deck.reset();
//! assert_eq!(deck.len(), Deck::SIZE);
//! ```

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::card::{Card, Rank, Suit};

/// Errors that can occur when dealing from or returning cards to a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left to deal.
    #[error("cannot deal from an empty deck")]
    Empty,

    /// Fewer cards left than requested.
    #[error("not enough cards in the deck: requested {requested}, available {available}")]
    NotEnoughCards { requested: usize, available: usize },

    /// The card being returned is already in the deck.
    #[error("card {0} is already in the deck")]
    DuplicateCard(Card),
}

/// A deck of playing cards.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a full, unshuffled deck.
    pub fn standard() -> Self {
        Self {
            cards: standard_cards(),
        }
    }

    /// Creates a full deck shuffled with the thread local RNG.
    pub fn shuffled() -> Self {
        let mut deck = Self::standard();
        deck.shuffle();
        deck
    }

    /// Shuffles the remaining cards with the thread local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffles the remaining cards with the given RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the top card.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Empty)?;
        tracing::trace!(%card, remaining = self.cards.len(), "dealt card");
        Ok(card)
    }

    /// Deals `count` cards from the top, or none if there are not enough.
    pub fn deal_many(&mut self, count: usize) -> Result<Vec<Card>, DeckError> {
        if count > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        (0..count).map(|_| self.deal()).collect()
    }

    /// Refills the deck to all 52 cards and shuffles it.
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::rng());
    }

    /// Refills the deck to all 52 cards and shuffles it with the given RNG.
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards = standard_cards();
        self.shuffle_with(rng);
        tracing::debug!("deck reset");
    }

    /// Puts cards back at the bottom of the deck.
    ///
    /// Fails without changing the deck if a card is already in the deck or
    /// is returned twice.
    pub fn return_cards<I>(&mut self, cards: I) -> Result<(), DeckError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut returned: Vec<Card> = Vec::new();
        for card in cards {
            if self.cards.contains(&card) || returned.contains(&card) {
                return Err(DeckError::DuplicateCard(card));
            }
            returned.push(card);
        }

        tracing::debug!(returned = returned.len(), "cards returned to deck");
        self.cards.splice(0..0, returned);
        Ok(())
    }

    /// Returns the top card without dealing it.
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// A copy of the cards left in the deck, the top card last.
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_cards() -> Vec<Card> {
    Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(rank, suit)))
        .collect()
}
