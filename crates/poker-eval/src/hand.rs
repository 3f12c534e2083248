//! Five card hand classification.
//!
//! [`classify`] maps exactly five cards to an [`EvaluatedHand`]: a
//! [`HandCategory`] plus the five ranks ordered so that two hands of the same
//! category can be compared position by position.
//!
//! ```
//! use poker_eval::card::parse_cards;
//! use poker_eval::hand::{HandCategory, classify};
//!
//! let hand = classify(&parse_cards("Kd Ks Ah Ac Ad").unwrap()).unwrap();
//! assert_eq!(hand.category(), HandCategory::FullHouse);
//! assert_eq!(hand.to_string(), "Full House (A♥ A♣ A♦ K♦ K♠)");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::card::{Card, Rank};
use crate::eval::EvalError;

/// Number of cards in a poker hand.
pub const HAND_SIZE: usize = 5;

/// Represents the category of a poker hand, from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No made hand, only high card.
    HighCard,
    /// Two cards of the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive cards of different suits.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five consecutive cards of the same suit.
    StraightFlush,
    /// A-K-Q-J-T of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// All categories from weakest to strongest.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandCategory::HighCard => write!(f, "High Card"),
            HandCategory::OnePair => write!(f, "One Pair"),
            HandCategory::TwoPair => write!(f, "Two Pair"),
            HandCategory::ThreeOfAKind => write!(f, "Three of a Kind"),
            HandCategory::Straight => write!(f, "Straight"),
            HandCategory::Flush => write!(f, "Flush"),
            HandCategory::FullHouse => write!(f, "Full House"),
            HandCategory::FourOfAKind => write!(f, "Four of a Kind"),
            HandCategory::StraightFlush => write!(f, "Straight Flush"),
            HandCategory::RoyalFlush => write!(f, "Royal Flush"),
        }
    }
}

/// A classified five card hand.
///
/// The rank sequence is laid out per category so that comparing two hands
/// of the same category position by position resolves ties:
///
/// | Category        | Ranks                                     |
/// |-----------------|-------------------------------------------|
/// | Four of a Kind  | quad, quad, quad, quad, kicker            |
/// | Full House      | trip, trip, trip, pair, pair              |
/// | Three of a Kind | trip, trip, trip, high kicker, low kicker |
/// | Two Pair        | high pair ×2, low pair ×2, kicker         |
/// | One Pair        | pair ×2, kickers descending               |
/// | Straights       | high to low, the wheel as 5-4-3-2-A       |
/// | Flush/High Card | descending                                |
///
/// Equality and ordering only look at the category and the ranks, the cards
/// are kept to show which cards make the hand.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvaluatedHand {
    category: HandCategory,
    ranks: [Rank; HAND_SIZE],
    cards: [Card; HAND_SIZE],
}

impl EvaluatedHand {
    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Tie-break ranks, see the type docs for the layout.
    pub fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.ranks
    }

    /// The cards making the hand, in the same order as [`ranks`](Self::ranks).
    pub fn cards(&self) -> [Card; HAND_SIZE] {
        self.cards
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.ranks.cmp(&other.ranks))
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        write!(f, ")")
    }
}

/// Compares two hands: category first, then the rank sequences position by
/// position. `Equal` means an exact tie.
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.cmp(b)
}

/// Classifies exactly five cards.
///
/// Categories are tried from strongest to weakest and the first match wins,
/// so a full house is never reported as three of a kind. Fails with
/// [`EvalError::InvalidHandSize`] for any other number of cards.
pub fn classify(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let cards: [Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidHandSize(cards.len()))?;

    let counts = rank_counts(&cards);

    // Group sizes of the hand, e.g. [3, 2] for a full house.
    let mut shape: Vec<u8> = counts.iter().copied().filter(|&n| n > 0).collect();
    shape.sort_by(|a, b| b.cmp(a));

    // Bigger groups first, higher ranks first within the same group size.
    let mut ordered = cards;
    ordered.sort_by_key(|c| std::cmp::Reverse((counts[c.strength() as usize], c.rank())));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight = straight_kind(&ordered);
    if straight == Some(StraightKind::Wheel) {
        // The ace plays low: A-5-4-3-2 becomes 5-4-3-2-A.
        ordered.rotate_left(1);
    }

    let category = match (is_flush, straight, shape.as_slice()) {
        (true, Some(StraightKind::Broadway), _) => HandCategory::RoyalFlush,
        (true, Some(_), _) => HandCategory::StraightFlush,
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, None, _) => HandCategory::Flush,
        (false, Some(_), _) => HandCategory::Straight,
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    Ok(EvaluatedHand {
        category,
        ranks: ordered.map(|c| c.rank()),
        cards: ordered,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StraightKind {
    /// A-K-Q-J-T.
    Broadway,
    /// A-2-3-4-5.
    Wheel,
    Other,
}

/// Number of cards per rank, indexed by rank strength.
fn rank_counts(cards: &[Card; HAND_SIZE]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for card in cards {
        counts[card.strength() as usize] += 1;
    }
    counts
}

/// Detects a straight in cards sorted by descending rank.
///
/// Only A-2-3-4-5 may use the ace low, nothing wraps around the ace.
fn straight_kind(sorted: &[Card; HAND_SIZE]) -> Option<StraightKind> {
    let ranks = sorted.map(|c| c.rank());
    if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
        return Some(StraightKind::Wheel);
    }

    let consecutive = ranks
        .windows(2)
        .all(|w| w[0].strength() == w[1].strength() + 1);

    match (consecutive, ranks[0]) {
        (false, _) => None,
        (true, Rank::Ace) => Some(StraightKind::Broadway),
        (true, _) => Some(StraightKind::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Suit, parse_cards};
    use crate::card::Rank::*;

    fn hand(cards: &str) -> EvaluatedHand {
        classify(&parse_cards(cards).unwrap()).unwrap()
    }

    #[test]
    fn test_royal_flush() {
        let h = hand("Th Ah Jh Kh Qh");
        assert_eq!(h.category(), HandCategory::RoyalFlush);
        assert_eq!(h.ranks(), [Ace, King, Queen, Jack, Ten]);
    }

    #[test]
    fn test_straight_flush() {
        let h = hand("5h 9h 7h 8h 6h");
        assert_eq!(h.category(), HandCategory::StraightFlush);
        assert_eq!(h.ranks(), [Nine, Eight, Seven, Six, Five]);

        // King high is not royal.
        let h = hand("Ks Qs Js Ts 9s");
        assert_eq!(h.category(), HandCategory::StraightFlush);
    }

    #[test]
    fn test_steel_wheel() {
        let h = hand("Ad 2d 3d 4d 5d");
        assert_eq!(h.category(), HandCategory::StraightFlush);
        assert_eq!(h.ranks(), [Five, Four, Three, Two, Ace]);
        assert!(h < hand("6d 2d 3d 4d 5d"));
    }

    #[test]
    fn test_four_of_a_kind() {
        let h = hand("3c Kd Ks Kh Kc");
        assert_eq!(h.category(), HandCategory::FourOfAKind);
        assert_eq!(h.ranks(), [King, King, King, King, Three]);
    }

    #[test]
    fn test_full_house() {
        // Pair ranks above trip ranks must still put the trips first.
        let h = hand("Ac 2d As 2s 2h");
        assert_eq!(h.category(), HandCategory::FullHouse);
        assert_eq!(h.ranks(), [Two, Two, Two, Ace, Ace]);
        assert!(hand("3c 3d 3s 2h 2c") > h);
    }

    #[test]
    fn test_flush() {
        let h = hand("Ac 4c Tc 2c 7c");
        assert_eq!(h.category(), HandCategory::Flush);
        assert_eq!(h.ranks(), [Ace, Ten, Seven, Four, Two]);
    }

    #[test]
    fn test_straight() {
        let h = hand("9s 8h 7c 6d 5s");
        assert_eq!(h.category(), HandCategory::Straight);
        assert_eq!(h.ranks(), [Nine, Eight, Seven, Six, Five]);

        let h = hand("As Kh Qc Jd Ts");
        assert_eq!(h.category(), HandCategory::Straight);
        assert_eq!(h.ranks(), [Ace, King, Queen, Jack, Ten]);
    }

    #[test]
    fn test_wheel_straight() {
        let wheel = hand("A♣ 2♦ 3♥ 4♠ 5♣");
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert_eq!(wheel.ranks(), [Five, Four, Three, Two, Ace]);
        assert_eq!(wheel.cards()[4], Card::new(Ace, Suit::Clubs));

        // Loses to the six high straight, beats any pair.
        assert!(wheel < hand("2c 3d 4h 5s 6c"));
        assert!(wheel > hand("Ac Ad Kh Qs Jc"));
        assert!(wheel > hand("As Kd Qh Js 9c"));
    }

    #[test]
    fn test_no_wrap_around_straight() {
        let h = hand("Kc Ad 2h 3s 4c");
        assert_eq!(h.category(), HandCategory::HighCard);
        assert_eq!(h.ranks(), [Ace, King, Four, Three, Two]);

        let h = hand("Qc Kd Ah 2s 3c");
        assert_eq!(h.category(), HandCategory::HighCard);
    }

    #[test]
    fn test_three_of_a_kind() {
        let h = hand("2h Jd Js Ac Jh");
        assert_eq!(h.category(), HandCategory::ThreeOfAKind);
        assert_eq!(h.ranks(), [Jack, Jack, Jack, Ace, Two]);
    }

    #[test]
    fn test_two_pair() {
        // Input order never changes the pair order.
        for cards in ["3c 3d Ks Kh 9c", "Ks 3c 9c Kh 3d", "9c 3d 3c Kh Ks"] {
            let h = hand(cards);
            assert_eq!(h.category(), HandCategory::TwoPair);
            assert_eq!(h.ranks(), [King, King, Three, Three, Nine]);
        }
    }

    #[test]
    fn test_one_pair() {
        let h = hand("7c Kd 9s Kh Qc");
        assert_eq!(h.category(), HandCategory::OnePair);
        assert_eq!(h.ranks(), [King, King, Queen, Nine, Seven]);
    }

    #[test]
    fn test_high_card() {
        let h = hand("2h 9d 4s Ac Kh");
        assert_eq!(h.category(), HandCategory::HighCard);
        assert_eq!(h.ranks(), [Ace, King, Nine, Four, Two]);
    }

    #[test]
    fn test_invalid_hand_size() {
        let cards = parse_cards("Ah Kh Qh Jh Th 9h").unwrap();
        assert_eq!(classify(&cards), Err(EvalError::InvalidHandSize(6)));
        assert_eq!(classify(&cards[..4]), Err(EvalError::InvalidHandSize(4)));
        assert_eq!(classify(&[]), Err(EvalError::InvalidHandSize(0)));
    }

    #[test]
    fn test_kicker_resolution() {
        let a = hand("Kc Kd Qs 9h 7c");
        let b = hand("Ks Kh Qd 9c 6s");
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);

        // Same ranks in different suits tie.
        let c = hand("Kh Ks Qc 9d 7d");
        assert_eq!(compare(&a, &c), Ordering::Equal);
        assert_eq!(a, c);
    }

    #[test]
    fn test_category_dominance() {
        // Strongest hand of each category against the weakest one of the
        // category above.
        let ladder = [
            ("As Kd Qh Js 9c", "2c 2d 3h 4s 5c"),
            ("Ac Ad Kh Qs Jc", "2c 2d 3h 3s 4c"),
            ("Ac Ad Kh Ks Qc", "2c 2d 2h 3s 4c"),
            ("Ac Ad Ah Ks Qc", "Ac 2d 3h 4s 5c"),
            ("As Kd Qh Js Tc", "2c 3c 4c 5c 7c"),
            ("Ac Kc Qc Jc 9c", "2c 2d 2h 3s 3c"),
            ("Ac Ad Ah Ks Kc", "2c 2d 2h 2s 3c"),
            ("Ac Ad Ah As Kc", "Ac 2c 3c 4c 5c"),
            ("Kc Qc Jc Tc 9c", "Ah Kh Qh Jh Th"),
        ];

        for (i, (lower, upper)) in ladder.into_iter().enumerate() {
            let lower = hand(lower);
            let upper = hand(upper);
            assert_eq!(lower.category(), HandCategory::ALL[i]);
            assert_eq!(upper.category(), HandCategory::ALL[i + 1]);
            assert!(upper > lower, "{upper} should beat {lower}");
        }
    }

    #[test]
    fn test_category_ordering() {
        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
        assert!(HandCategory::StraightFlush > HandCategory::FourOfAKind);
        assert!(HandCategory::FourOfAKind > HandCategory::FullHouse);
        assert!(HandCategory::FullHouse > HandCategory::Flush);
        assert!(HandCategory::Flush > HandCategory::Straight);
        assert!(HandCategory::Straight > HandCategory::ThreeOfAKind);
        assert!(HandCategory::ThreeOfAKind > HandCategory::TwoPair);
        assert!(HandCategory::TwoPair > HandCategory::OnePair);
        assert!(HandCategory::OnePair > HandCategory::HighCard);
    }

    #[test]
    fn test_input_order_invariance() {
        let cards = parse_cards("Qd 4c Qh 4s Qs").unwrap();
        let expected = classify(&cards).unwrap();

        let mut rotated = cards.clone();
        for _ in 0..cards.len() {
            rotated.rotate_left(1);
            assert_eq!(classify(&rotated).unwrap(), expected);
            rotated.reverse();
            assert_eq!(classify(&rotated).unwrap(), expected);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(HandCategory::ThreeOfAKind.to_string(), "Three of a Kind");
        assert_eq!(hand("5c 4d 3h 2s Ac").to_string(), "Straight (5♣ 4♦ 3♥ 2♠ A♣)");
    }
}
