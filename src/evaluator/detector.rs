use super::hand_analysis::HandAnalysis;
use crate::cards::Rank;
use crate::evaluator::{Category, Evaluation};

/// Each category knows how to detect itself and build its evaluation.
/// Detectors are checked strongest-first; the first match wins, which is what
/// keeps the ten categories mutually exclusive.
pub trait CategoryDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool;
    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation;
}

/// Royal Flush: a straight flush whose decisive group is the Ace.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
            && analysis.straight_info.is_straight
            && analysis.rank_groups.top_rank() == Rank::Ace
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::RoyalFlush)
    }
}

/// Straight Flush: flush and straight at once.
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush && analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::StraightFlush)
    }
}

/// Four of a Kind: some rank group has size 4.
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.quad().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::FourOfAKind)
    }
}

/// Full House: a size-3 group and a size-2 group together.
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.has_full_house()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::FullHouse)
    }
}

/// Flush: all five cards share one suit.
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.suit_info.is_flush
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::Flush)
    }
}

/// Straight: five distinct ranks spanning exactly four steps.
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::Straight)
    }
}

/// Three of a Kind: some rank group has size 3.
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.trips().is_some()
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::ThreeOfAKind)
    }
}

/// Two Pair: exactly two rank groups of size 2.
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pair_count() == 2
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::TwoPair)
    }
}

/// One Pair: some rank group has size 2.
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.pair_count() >= 1
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.grouped_evaluation(Category::OnePair)
    }
}

/// High Card: always matches as the fallback.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }

    fn build_evaluation(&self, analysis: &HandAnalysis) -> Evaluation {
        analysis.high_card_evaluation()
    }
}

/// Detectors in priority order, strongest category first.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Suit};

    fn analysis(cards: [Card; 5]) -> HandAnalysis {
        HandAnalysis::new(&cards)
    }

    #[test]
    fn royal_flush_requires_ace_top_group() {
        let royal = analysis([
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
        ]);
        assert!(RoyalFlushDetector.detect(&royal));

        let king_high = analysis([
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Queen, Suit::Hearts),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Nine, Suit::Hearts),
        ]);
        assert!(!RoyalFlushDetector.detect(&king_high));
        assert!(StraightFlushDetector.detect(&king_high));
    }

    #[test]
    fn straight_flush_is_both_flush_and_straight() {
        let sf = analysis([
            Card::new(Rank::Eight, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
        ]);
        assert!(StraightFlushDetector.detect(&sf));
        assert!(FlushDetector.detect(&sf));
        assert!(StraightDetector.detect(&sf));
        // priority order, not the detectors themselves, resolves the overlap
        let eval = StraightFlushDetector.build_evaluation(&sf);
        assert_eq!(eval.category(), Category::StraightFlush);
    }

    #[test]
    fn quad_detector() {
        let quads = analysis([
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Three, Suit::Hearts),
        ]);
        assert!(FourOfAKindDetector.detect(&quads));
        let eval = FourOfAKindDetector.build_evaluation(&quads);
        // kicker group first, quad group last
        assert_eq!(eval.tie_break_values(), &[Rank::Three, Rank::Five]);
    }

    #[test]
    fn full_house_also_trips_and_pair() {
        let fh = analysis([
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ]);
        assert!(FullHouseDetector.detect(&fh));
        // weaker detectors match too; the ordered table keeps them out
        assert!(ThreeOfAKindDetector.detect(&fh));
        assert!(OnePairDetector.detect(&fh));
    }

    #[test]
    fn two_pair_needs_exactly_two_pairs() {
        let tp = analysis([
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
            Card::new(Rank::Jack, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Diamonds),
        ]);
        assert!(TwoPairDetector.detect(&tp));

        let op = analysis([
            Card::new(Rank::Ace, Suit::Clubs),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Six, Suit::Hearts),
            Card::new(Rank::Four, Suit::Diamonds),
        ]);
        assert!(!TwoPairDetector.detect(&op));
        assert!(OnePairDetector.detect(&op));
    }

    #[test]
    fn high_card_always_matches() {
        let hc = analysis([
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Six, Suit::Clubs),
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Spades),
        ]);
        assert!(HighCardDetector.detect(&hc));
        let eval = HighCardDetector.build_evaluation(&hc);
        assert_eq!(
            eval.tie_break_values(),
            &[Rank::Ace, Rank::Seven, Rank::Six, Rank::Three, Rank::Two]
        );
    }
}
