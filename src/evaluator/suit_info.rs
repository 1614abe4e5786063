use crate::cards::{Card, Suit};

/// Flush information derived from fixed suit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    /// The shared suit when flush (kept for debugging and tests)
    #[allow(dead_code)]
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Count suits into a fixed `[u8; 4]` indexed by `Suit::index()`; a flush
    /// is a slot holding all five cards.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            counts[card.suit().index()] += 1;
        }

        for suit in Suit::ALL {
            if counts[suit.index()] == 5 {
                return SuitInfo { is_flush: true, flush_suit: Some(suit) };
            }
        }
        SuitInfo { is_flush: false, flush_suit: None }
    }
}
