use std::fmt;

use super::PokerError;

/// Value given to aces by the standard labels.
pub const STANDARD_ACE: u32 = 14;

/// Take a standard value char and convert it to a value.
/// Values run from 2 up to the ace at 14.
pub fn value_from_char(c: char) -> Option<u32> {
    match c {
        'A' => Some(14),
        'K' => Some(13),
        'Q' => Some(12),
        'J' => Some(11),
        'T' => Some(10),
        '2'..='9' => c.to_digit(10),
        _ => None,
    }
}

/// Standard suit chars, numbered in the order spade, club, heart, diamond.
pub fn suit_from_char(s: char) -> Option<u32> {
    match s {
        's' => Some(1),
        'c' => Some(2),
        'h' => Some(3),
        'd' => Some(4),
        _ => None,
    }
}

/// A card from a deck of any shape.
///
/// Values and suits are plain numbers so decks aren't limited
/// to thirteen values and four suits. Cards order by value first,
/// the suit ordering only exists to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: u32,
    /// The suit of this card.
    pub suit: u32,
}

impl Card {
    pub const fn new(value: u32, suit: u32) -> Self {
        Self { value, suit }
    }

    /// Parse a whole hand written with the standard labels.
    ///
    /// ```
    /// use combinatorial_poker::core::Card;
    ///
    /// let cards = Card::parse_hand("AsKd").unwrap();
    /// assert_eq!(vec![Card::new(14, 1), Card::new(13, 4)], cards);
    /// ```
    pub fn parse_hand(hand_string: &str) -> Result<Vec<Self>, PokerError> {
        let mut chars = hand_string.chars().filter(|c| !c.is_whitespace());
        let mut cards: Vec<Card> = Vec::new();

        while let Some(vc) = chars.next() {
            let value = value_from_char(vc).ok_or(PokerError::UnexpectedValueChar)?;
            let suit = chars
                .next()
                .ok_or(PokerError::TooFewChars)
                .and_then(|sc| suit_from_char(sc).ok_or(PokerError::UnexpectedSuitChar))?;

            let c = Card { value, suit };
            if cards.contains(&c) {
                return Err(PokerError::DuplicateCardInHand(c));
            }
            cards.push(c);
        }
        Ok(cards)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.value, self.suit)
    }
}

impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let v = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| value_from_char(c).ok_or(PokerError::UnexpectedValueChar))?;
        let s = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .and_then(|c| suit_from_char(c).ok_or(PokerError::UnexpectedSuitChar))?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Card { value: v, suit: s })
    }
}

impl From<(u32, u32)> for Card {
    fn from((value, suit): (u32, u32)) -> Self {
        Self { value, suit }
    }
}
