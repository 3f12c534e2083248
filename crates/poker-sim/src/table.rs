//! A dealer that runs hands straight to showdown.
//!
//! No betting happens: every seat gets two hole cards, the full board is
//! dealt, and the evaluator decides the winners.

use std::fmt;

use poker_eval::{Card, Deck, DeckError, EvalError, Showdown, showdown};
use rand::Rng;
use thiserror::Error;

/// Errors that can occur while dealing a hand.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("dealing error: {0}")]
    Deck(#[from] DeckError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Seats numbered from 1.
pub type Seat = usize;

/// A table with a fixed number of seats and its own deck.
pub struct Table<R> {
    seats: usize,
    deck: Deck,
    rng: R,
}

/// Cards dealt in one hand and its showdown.
pub struct Round {
    pub board: Vec<Card>,
    pub holes: Vec<(Seat, [Card; 2])>,
    pub showdown: Showdown<Seat>,
}

impl<R: Rng> Table<R> {
    pub fn new(seats: usize, rng: R) -> Self {
        Self {
            seats,
            deck: Deck::standard(),
            rng,
        }
    }

    /// Deals a fresh hand and evaluates the showdown.
    pub fn play_hand(&mut self) -> Result<Round, TableError> {
        self.deck.reset_with(&mut self.rng);

        // One card at a time around the table, twice.
        let first = self.deck.deal_many(self.seats)?;
        let second = self.deck.deal_many(self.seats)?;
        let holes: Vec<(Seat, [Card; 2])> = first
            .into_iter()
            .zip(second)
            .enumerate()
            .map(|(i, (a, b))| (i + 1, [a, b]))
            .collect();

        let mut board = Vec::with_capacity(5);
        // Burn one before the flop, the turn, and the river.
        for street in [3, 1, 1] {
            self.deck.deal()?;
            board.extend(self.deck.deal_many(street)?);
        }

        let showdown = showdown(&holes, &board)?;
        tracing::debug!(winners = ?showdown.winners, "hand finished");

        Ok(Round {
            board,
            holes,
            showdown,
        })
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  Board:")?;
        for card in &self.board {
            write!(f, " {card}")?;
        }
        writeln!(f)?;

        for ((seat, hole), (_, hand)) in self.holes.iter().zip(&self.showdown.hands) {
            let marker = if self.showdown.winners.contains(seat) { "*" } else { " " };
            writeln!(f, "{marker} Seat {seat}: {} {}  {hand}", hole[0], hole[1])?;
        }
        Ok(())
    }
}
