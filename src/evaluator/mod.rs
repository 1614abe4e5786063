pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Hand category from weakest to strongest. The discriminant is the
/// strength, 0 (HighCard) through 9 (RoyalFlush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Primary sort key for hands.
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying five cards: a category plus the tie-break sequence
/// that orders hands within the category.
///
/// Ordering compares strength first, then tie-break values element by
/// element in stored order over the overlapping positions only. Two hands
/// with the same rank composition compare equal regardless of suits.
#[derive(Debug, Clone)]
pub struct Evaluation {
    category: Category,
    tie_breaks: Vec<Rank>,
}

impl Evaluation {
    pub(crate) fn new(category: Category, tie_breaks: Vec<Rank>) -> Self {
        Self { category, tie_breaks }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Strength 0..=9, the primary sort key.
    pub fn strength(&self) -> u8 {
        self.category.strength()
    }

    /// Tie-break ranks in stored order: lowest-impact group first, decisive
    /// group last (HighCard: the five ranks descending).
    pub fn tie_break_values(&self) -> &[Rank] {
        &self.tie_breaks
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.strength().cmp(&other.strength()).then_with(|| {
            // Zip stops at the shorter sequence, so positions one side does
            // not define are skipped rather than compared against nothing.
            self.tie_breaks
                .iter()
                .zip(other.tie_breaks.iter())
                .map(|(a, b)| a.cmp(b))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}

/// Classify exactly five cards. Input order does not matter.
///
/// Categories are tried strongest-first and the first match wins, so a hand
/// that satisfies several rules still reports the single strongest category.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{evaluate_five, Category};
///
/// let cards = parse_cards("Kh Kd Ks 5h 5c").unwrap();
/// let five: [_; 5] = cards.try_into().unwrap();
/// let eval = evaluate_five(&five);
/// assert_eq!(eval.category(), Category::FullHouse);
/// assert_eq!(eval.strength(), 6);
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> Evaluation {
    classify(&hand_analysis::HandAnalysis::new(cards))
}

/// Run the ordered detector table over a prepared analysis.
pub(crate) fn classify(analysis: &hand_analysis::HandAnalysis) -> Evaluation {
    for detector in detector::DETECTORS.iter() {
        if detector.detect(analysis) {
            return detector.build_evaluation(analysis);
        }
    }

    // Unreachable: HighCard always matches as fallback
    unreachable!("HighCard detector should always match")
}
