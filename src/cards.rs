use std::fmt;
use std::str::FromStr;

/// Card ranks from Two (low) to Ace (high), numbered 0..=12.
///
/// The numeric value is the index of the rank character in the sequence
/// `2,3,4,5,6,7,8,9,T,J,Q,K,A`, so `Ace` is 12 and the ace never plays low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
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

    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Spelled-out rank name, used for narration ("Ace of Hearts").
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    InvalidFormat(String),
    #[error("invalid rank character: '{0}'")]
    InvalidRank(char),
    #[error("invalid suit character: '{0}'")]
    InvalidSuit(char),
}

impl TryFrom<char> for Rank {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(CardParseError::InvalidRank(c)),
        }
    }
}

/// Four suits; no hand-strength meaning, but the order is fixed so card
/// sorting stays deterministic: the tiebreak between equal ranks is arbitrary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Spades = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_char(self) -> char {
        match self {
            Suit::Hearts => 'h',
            Suit::Spades => 's',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    /// Spelled-out suit name, used for narration.
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Suit {
    type Error = CardParseError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(CardParseError::InvalidSuit(c)),
        }
    }
}

/// A playing card: rank + suit. Immutable once constructed.
///
/// ```
/// use poker_hands::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spades);
/// assert_eq!(card.to_string(), "As");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn rank(self) -> Rank {
        self.rank
    }
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Human-readable name, e.g. "Ace of Hearts".
    pub fn describe(self) -> String {
        format!("{} of {}", self.rank.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parse a two-character identifier: rank char in `23456789TJQKA`,
    /// suit char in `hsdc`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(su), None) => {
                let rank = Rank::try_from(r)?;
                let suit = Suit::try_from(su)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(CardParseError::InvalidFormat(s.to_string())),
        }
    }
}

/// Parse multiple cards separated by whitespace or commas.
///
/// ```
/// use poker_hands::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("As, Kd Tc").unwrap();
/// assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
/// assert_eq!(cards[1], Card::new(Rank::King, Suit::Diamonds));
/// assert_eq!(cards[2], Card::new(Rank::Ten, Suit::Clubs));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_values_are_indices_into_rank_sequence() {
        assert_eq!(Rank::Two.value(), 0);
        assert_eq!(Rank::Ten.value(), 8);
        assert_eq!(Rank::Ace.value(), 12);
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Three > Rank::Two);
    }

    #[test]
    fn rank_from_char_is_case_insensitive() {
        assert_eq!(Rank::try_from('t').unwrap(), Rank::Ten);
        assert_eq!(Rank::try_from('A').unwrap(), Rank::Ace);
        assert!(matches!(Rank::try_from('X'), Err(CardParseError::InvalidRank('X'))));
        assert!(matches!(Rank::try_from('1'), Err(CardParseError::InvalidRank('1'))));
    }

    #[test]
    fn suit_from_char_is_case_insensitive() {
        assert_eq!(Suit::try_from('H').unwrap(), Suit::Hearts);
        assert_eq!(Suit::try_from('c').unwrap(), Suit::Clubs);
        assert!(matches!(Suit::try_from('z'), Err(CardParseError::InvalidSuit('z'))));
    }

    #[test]
    fn card_display_and_from_str_round_trip() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(a.to_string(), "As");
        assert_eq!(Card::from_str("As").unwrap(), a);
        // canonical-case output from mixed-case input
        let parsed = Card::from_str("aH").unwrap();
        assert_eq!(parsed, Card::new(Rank::Ace, Suit::Hearts));
        assert_eq!(parsed.to_string(), "Ah");
    }

    #[test]
    fn card_rejects_bad_shapes() {
        assert!(matches!(Card::from_str(""), Err(CardParseError::InvalidFormat(_))));
        assert!(matches!(Card::from_str("A"), Err(CardParseError::InvalidFormat(_))));
        assert!(matches!(Card::from_str("10c"), Err(CardParseError::InvalidFormat(_))));
        assert!(matches!(Card::from_str("Xh"), Err(CardParseError::InvalidRank('X'))));
        assert!(matches!(Card::from_str("4z"), Err(CardParseError::InvalidSuit('z'))));
    }

    #[test]
    fn card_describes_itself() {
        let c = Card::new(Rank::Queen, Suit::Diamonds);
        assert_eq!(c.describe(), "Queen of Diamonds");
    }

    #[test]
    fn parse_many_cards() {
        let xs = parse_cards("As, Kd Tc").unwrap();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[2], Card::new(Rank::Ten, Suit::Clubs));
        assert!(parse_cards("As Kz").is_err());
    }
}
