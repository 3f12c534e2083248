//! Best hand search and showdown.
//!
//! A player's hand is the best five card hand out of their two hole cards and
//! the three to five community cards. [`evaluate_hand`] searches every five
//! card subset, [`determine_winners`] runs that search for each player and
//! returns everyone holding the best hand.
//!
//! ```
//! use poker_eval::card::parse_cards;
//! use poker_eval::eval::determine_winners;
//!
//! let board = parse_cards("Kd 7s 2c 9h Jd").unwrap();
//! let players = [
//!     ("alice", parse_cards("Ks Qc").unwrap()),
//!     ("bob", parse_cards("9c 9d").unwrap()),
//! ];
//!
//! assert_eq!(determine_winners(&players, &board).unwrap(), vec!["bob"]);
//! ```

use std::collections::HashSet;
use thiserror::Error;

use crate::card::Card;
use crate::combinations::Combinations;
use crate::hand::{EvaluatedHand, HAND_SIZE, classify};

/// Number of private cards each player holds.
pub const HOLE_CARDS: usize = 2;

/// Community cards on the flop.
pub const MIN_COMMUNITY_CARDS: usize = 3;

/// Community cards on the river.
pub const MAX_COMMUNITY_CARDS: usize = 5;

/// Errors that can occur while evaluating hands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The classifier was given other than five cards.
    #[error("a poker hand has exactly 5 cards, got {0}")]
    InvalidHandSize(usize),

    /// Wrong number of hole or community cards.
    #[error("expected 2 hole cards and 3 to 5 community cards, got {hole} and {community}")]
    InvalidInputSize { hole: usize, community: usize },

    /// The same card was dealt more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Evaluates the best five card hand for a player.
///
/// Requires exactly [`HOLE_CARDS`] hole cards and between
/// [`MIN_COMMUNITY_CARDS`] and [`MAX_COMMUNITY_CARDS`] community cards, and
/// rejects any card that appears twice.
pub fn evaluate_hand(hole: &[Card], community: &[Card]) -> Result<EvaluatedHand, EvalError> {
    check_sizes(hole, community)?;

    let cards: Vec<Card> = hole.iter().chain(community).copied().collect();
    check_unique(&cards)?;

    best_hand(&cards)
}

/// Returns the best five card hand out of five or more cards.
///
/// Does not check for duplicate cards.
pub fn best_hand(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    search(cards).map(|(best, _)| best)
}

/// Classifies every five card subset and keeps the best one, returns it
/// together with the number of subsets examined.
fn search(cards: &[Card]) -> Result<(EvaluatedHand, usize), EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::InvalidHandSize(cards.len()));
    }

    let mut best: Option<EvaluatedHand> = None;
    let mut examined = 0;

    for subset in Combinations::new(cards, HAND_SIZE) {
        let hand = classify(&subset)?;
        examined += 1;
        tracing::trace!(%hand, "classified combination");

        if best.is_none_or(|b| hand > b) {
            best = Some(hand);
        }
    }

    // At least one subset exists once the length check passed.
    let best = best.ok_or(EvalError::InvalidHandSize(cards.len()))?;
    tracing::debug!(category = %best.category(), examined, "best hand found");
    Ok((best, examined))
}

/// Outcome of a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown<P> {
    /// Every player's best hand, in input order.
    pub hands: Vec<(P, EvaluatedHand)>,
    /// Players holding the best hand, in input order. More than one means a
    /// tie; how to split the pot is up to the caller.
    pub winners: Vec<P>,
}

/// Evaluates every player's hand against the shared community cards.
///
/// Besides the checks in [`evaluate_hand`], a card dealt to two different
/// players is also rejected.
pub fn showdown<P, H>(players: &[(P, H)], community: &[Card]) -> Result<Showdown<P>, EvalError>
where
    P: Clone,
    H: AsRef<[Card]>,
{
    let mut dealt: Vec<Card> = community.to_vec();
    let mut hands = Vec::with_capacity(players.len());

    for (id, hole) in players {
        let hole = hole.as_ref();
        let hand = evaluate_hand(hole, community)?;
        dealt.extend_from_slice(hole);
        hands.push((id.clone(), hand));
    }
    check_unique(&dealt)?;

    let winners: Vec<P> = match hands.iter().map(|(_, hand)| hand).max() {
        Some(best) => hands
            .iter()
            .filter(|(_, hand)| hand == best)
            .map(|(id, _)| id.clone())
            .collect(),
        None => Vec::new(),
    };

    tracing::debug!(
        players = players.len(),
        winners = winners.len(),
        "showdown evaluated"
    );

    Ok(Showdown { hands, winners })
}

/// Returns the ids of all players holding the best hand.
pub fn determine_winners<P, H>(players: &[(P, H)], community: &[Card]) -> Result<Vec<P>, EvalError>
where
    P: Clone,
    H: AsRef<[Card]>,
{
    showdown(players, community).map(|s| s.winners)
}

fn check_sizes(hole: &[Card], community: &[Card]) -> Result<(), EvalError> {
    let community_ok = (MIN_COMMUNITY_CARDS..=MAX_COMMUNITY_CARDS).contains(&community.len());
    if hole.len() != HOLE_CARDS || !community_ok {
        return Err(EvalError::InvalidInputSize {
            hole: hole.len(),
            community: community.len(),
        });
    }
    Ok(())
}

fn check_unique(cards: &[Card]) -> Result<(), EvalError> {
    let mut seen = HashSet::with_capacity(cards.len());
    match cards.iter().find(|&&c| !seen.insert(c)) {
        Some(&card) => Err(EvalError::DuplicateCard(card)),
        None => Ok(()),
    }
}
