//! Playing card model.
//!
//! A [`Card`] is a plain `Copy` value made of a [`Rank`] and a [`Suit`]. Cards
//! can be built directly or parsed from short text such as `"A♠"`, `"As"` or
//! `"10h"`:
//!
//! ```
//! use poker_eval::card::{Card, Rank, Suit, parse_cards};
//!
//! let ace = Card::new(Rank::Ace, Suit::Spades);
//! assert_eq!(ace.to_string(), "A♠");
//! assert_eq!("As".parse::<Card>().unwrap(), ace);
//!
//! let board = parse_cards("Qh Jh Th").unwrap();
//! assert_eq!(board.len(), 3);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents a card suit (Diamonds, Spades, Clubs, Hearts).
///
/// Suits carry no strength: they only matter for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Spades,
    Clubs,
    Hearts,
}

impl Suit {
    /// All suits in standard order
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Spades, Suit::Clubs, Suit::Hearts];

    /// Returns the suit as a display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
            Suit::Hearts => "♥",
        }
    }

    fn parse(s: &str) -> Option<Suit> {
        match s {
            "♦" | "d" | "D" => Some(Suit::Diamonds),
            "♠" | "s" | "S" => Some(Suit::Spades),
            "♣" | "c" | "C" => Some(Suit::Clubs),
            "♥" | "h" | "H" => Some(Suit::Hearts),
            _ => None,
        }
    }
}

/// Represents a card rank (2-14, where 14 = Ace).
///
/// The derived ordering follows the strength value, so `Rank::Ace` is the
/// highest rank. The ace-low straight is handled by the hand classifier and
/// never changes a rank's stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All ranks from Two to Ace.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric strength, 2 for a Two up to 14 for an Ace.
    pub fn strength(&self) -> u8 {
        *self as u8
    }

    /// Looks up the rank with the given strength.
    pub fn from_strength(strength: u8) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.strength() == strength)
    }

    /// Returns the rank as a display character
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn parse(s: &str) -> Option<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "T" | "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A playing card.
///
/// Two cards are equal only when both rank and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Strength of the card's rank (2..=14).
    pub fn strength(&self) -> u8 {
        self.rank.strength()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Errors returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is too short to hold a rank and a suit.
    #[error("card {0:?} must be a rank followed by a suit")]
    Length(String),

    #[error("unknown rank {0:?}")]
    Rank(String),

    #[error("unknown suit {0:?}")]
    Suit(String),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // The suit is the last char, which may be a multi-byte symbol.
        let Some((split, _)) = s.char_indices().last() else {
            return Err(ParseCardError::Length(s.to_string()));
        };
        if split == 0 {
            return Err(ParseCardError::Length(s.to_string()));
        }

        let (rank, suit) = s.split_at(split);
        let rank = Rank::parse(rank).ok_or_else(|| ParseCardError::Rank(rank.to_string()))?;
        let suit = Suit::parse(suit).ok_or_else(|| ParseCardError::Suit(suit.to_string()))?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace separated list of cards, e.g. `"Ah Kh Qh"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
