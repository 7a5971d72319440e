//! This is the core module. It exports cards, decks and
//! the error type shared by the rest of the crate.

/// card.rs has the card and the standard label parsing.
mod card;
/// Re-export Card and the label helpers.
pub use self::card::{Card, STANDARD_ACE, suit_from_char, value_from_char};

/// We want to be able to iterate over every hand of a deck.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck shapes and the cards they hold.
mod deck;
/// Export `DeckShape` and `Deck`
pub use self::deck::{Deck, DeckShape};

/// Errors for every fallible operation in the crate.
mod error;
/// Export the error type.
pub use self::error::PokerError;
