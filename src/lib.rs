//! poker-hands: five-card hand classification and comparison
//!
//! Goals:
//! - Deterministic classification of an unordered set of five cards into one
//!   of ten categories, with a strength and tie-break sequence for ordering
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! The core is purely computational: constructors are side-effect free, every
//! derived field is computed once, and evaluated hands are read-only after
//! construction. Deck building and narration live outside the core.
//!
//! ## Quick start: classify and compare hands
//! ```
//! use poker_hands::evaluator::Category;
//! use poker_hands::hand::Hand;
//!
//! let royal: Hand = "Ah Kh Qh Jh Th".parse().unwrap();
//! assert_eq!(royal.category(), Category::RoyalFlush);
//! assert_eq!(royal.strength(), 9);
//!
//! let quads: Hand = "5d 5s 5h 5c 3h".parse().unwrap();
//! assert!(royal > quads);
//! ```
//!
//! A known quirk: the ace only plays high, so the wheel (A-2-3-4-5)
//! classifies as HighCard, not Straight.

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
