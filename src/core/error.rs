use thiserror::Error;

use super::Card;
use crate::ranking::Category;

/// This is the core error type for the library.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Deck shape needs at least one value, one suit and one card per hand (got {values}x{suits}, hand of {hand_size})")]
    InvalidDeckShape {
        values: u32,
        suits: u32,
        hand_size: usize,
    },
    #[error("Hands of {hand_size} cards can't be dealt from a deck of {deck_size}")]
    HandLargerThanDeck { hand_size: usize, deck_size: u64 },
    #[error("A deck of {deck_size} cards is too large to hold, the limit is {max}")]
    DeckTooLarge { deck_size: u64, max: u64 },
    #[error("Hands need at least one card")]
    EmptyHand,
    #[error("Expected a hand of {expected} cards, found {found}")]
    WrongHandSize { expected: usize, found: usize },
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Card {card} has a value outside {min}..={max}")]
    CardValueOutOfRange { card: Card, min: u32, max: u32 },
    #[error("Card {card} has a suit outside 1..={suits}")]
    CardSuitOutOfRange { card: Card, suits: u32 },
    #[error("Ace value {0} is too low for this deck")]
    InvalidAceValue(u32),
    #[error("Alternative ace value {alt_ace_value} must be below the ace value {ace_value}")]
    InvalidAltAceValue { ace_value: u32, alt_ace_value: u32 },
    #[error("Royal flushes are straight flushes and only all distinct hands can be straights or flushes")]
    InvalidCategory,
    #[error("Category {0} has no rank in this table")]
    UnrankedCategory(Category),
    #[error("Score doesn't fit in 128 bits")]
    ScoreOverflow,
    #[error("Hand count doesn't fit in 128 bits")]
    CountOverflow,
    #[error("Score must be positive to take its logarithm")]
    NonPositiveScore,
}
