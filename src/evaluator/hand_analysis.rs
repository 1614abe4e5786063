use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors; never mutated after.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub sorted_cards: [Card; 5],
    /// Ranks of the sorted cards, descending.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card; 5]) -> Self {
        // Sort descending by rank; the suit tiebreak only keeps it stable.
        let mut sorted_cards = *cards;
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(a.suit().cmp(&b.suit())));

        let ranks = [
            sorted_cards[0].rank(),
            sorted_cards[1].rank(),
            sorted_cards[2].rank(),
            sorted_cards[3].rank(),
            sorted_cards[4].rank(),
        ];

        let mut rank_counts = [0u8; 13];
        for &rank in ranks.iter() {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { sorted_cards, ranks, rank_groups, suit_info, straight_info }
    }

    /// Evaluation whose tie-break sequence is one rank per group in stored
    /// group order (lowest-impact first, decisive last). Used by every
    /// category except HighCard.
    pub fn grouped_evaluation(&self, category: Category) -> Evaluation {
        Evaluation::new(category, self.rank_groups.group_ranks())
    }

    /// Evaluation whose tie-break sequence is the full five ranks descending.
    /// The HighCard rule.
    pub fn high_card_evaluation(&self) -> Evaluation {
        Evaluation::new(Category::HighCard, self.ranks.to_vec())
    }
}
