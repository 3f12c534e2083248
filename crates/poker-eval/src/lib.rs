//! Texas Hold'em hand evaluation.
//!
//! Cards and a 52 card [`Deck`](deck::Deck) for dealing, a five card
//! [`classify`](hand::classify) step that sorts a hand into one of ten
//! categories, and the search that picks a player's best hand out of hole and
//! community cards and finds the winners of a showdown.
//!
//! # Examples
//!
//! ```
//! use poker_eval::card::parse_cards;
//! use poker_eval::eval::evaluate_hand;
//! use poker_eval::hand::HandCategory;
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th").unwrap();
//!
//! let hand = evaluate_hand(&hole, &board).unwrap();
//! assert_eq!(hand.category(), HandCategory::RoyalFlush);
//! ```

pub mod card;
pub mod combinations;
pub mod deck;
pub mod eval;
pub mod hand;

pub use card::{Card, ParseCardError, Rank, Suit, parse_cards};
pub use deck::{Deck, DeckError};
pub use eval::{EvalError, Showdown, determine_winners, evaluate_hand, showdown};
pub use hand::{EvaluatedHand, HandCategory, classify, compare};
