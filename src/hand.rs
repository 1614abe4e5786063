use crate::cards::{parse_cards, Card, Rank};
use crate::evaluator::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, Evaluation};
use core::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    InvalidSize(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Five cards plus their classification, computed once at construction and
/// never mutated. Freely shareable across threads.
///
/// `Ord` implements the hand comparator: strength first, then the tie-break
/// sequences element by element in stored order. Equality follows the same
/// comparison, so two hands with identical rank compositions but different
/// suits are equal in ranking.
///
/// ```
/// use poker_hands::evaluator::Category;
/// use poker_hands::hand::Hand;
///
/// let hand: Hand = "Kh Kd Ks 5h 5c".parse().unwrap();
/// assert_eq!(hand.category(), Category::FullHouse);
/// assert_eq!(hand.strength(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; 5],
    evaluation: Evaluation,
}

impl Hand {
    /// Build a hand from exactly five cards. Duplicate cards are accepted;
    /// a full-deck caller never produces them.
    pub fn try_new(cards: &[Card]) -> Result<Self, HandError> {
        let five: [Card; 5] =
            cards.try_into().map_err(|_| HandError::InvalidSize(cards.len()))?;

        let analysis = HandAnalysis::new(&five);
        let evaluation = crate::evaluator::classify(&analysis);

        Ok(Self { cards: analysis.sorted_cards, evaluation })
    }

    /// The five cards, sorted by rank descending.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn category(&self) -> Category {
        self.evaluation.category()
    }

    /// Strength 0 (HighCard) .. 9 (RoyalFlush).
    pub fn strength(&self) -> u8 {
        self.evaluation.strength()
    }

    /// Tie-break ranks in stored order, lowest-impact group first.
    pub fn tie_break_values(&self) -> &[Rank] {
        self.evaluation.tie_break_values()
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.evaluation.cmp(&other.evaluation)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl FromStr for Hand {
    type Err = HandError;

    /// Parse five card identifiers separated by whitespace or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
