use std::ops::RangeInclusive;

use rand::Rng;

use super::{Card, CardIter, PokerError};
use crate::combinatorics::choose;

/// The shape of a deck: how many distinct values, how many suits,
/// and how many cards make a hand.
///
/// A shape can only be built through [`DeckShape::new`], so every
/// shape in circulation has at least one of each and can deal at
/// least one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDeckShape"))]
pub struct DeckShape {
    values: u32,
    suits: u32,
    hand_size: usize,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDeckShape {
    values: u32,
    suits: u32,
    hand_size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDeckShape> for DeckShape {
    type Error = PokerError;

    fn try_from(raw: RawDeckShape) -> Result<Self, Self::Error> {
        DeckShape::new(raw.values, raw.suits, raw.hand_size)
    }
}

impl DeckShape {
    /// Create a new deck shape.
    ///
    /// ```
    /// use combinatorial_poker::core::DeckShape;
    ///
    /// let shape = DeckShape::new(13, 4, 5).unwrap();
    /// assert_eq!(52, shape.deck_size());
    /// assert_eq!(2_598_960, shape.total_hands().unwrap());
    ///
    /// assert!(DeckShape::new(13, 0, 5).is_err());
    /// assert!(DeckShape::new(2, 2, 5).is_err());
    /// ```
    pub fn new(values: u32, suits: u32, hand_size: usize) -> Result<Self, PokerError> {
        if values == 0 || suits == 0 || hand_size == 0 {
            return Err(PokerError::InvalidDeckShape {
                values,
                suits,
                hand_size,
            });
        }
        let deck_size = u64::from(values) * u64::from(suits);
        if hand_size as u64 > deck_size {
            return Err(PokerError::HandLargerThanDeck {
                hand_size,
                deck_size,
            });
        }
        Ok(Self {
            values,
            suits,
            hand_size,
        })
    }

    /// The standard 52 card deck with five card hands.
    pub fn standard() -> Self {
        Self {
            values: 13,
            suits: 4,
            hand_size: 5,
        }
    }

    pub fn values(&self) -> u32 {
        self.values
    }

    pub fn suits(&self) -> u32 {
        self.suits
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn deck_size(&self) -> u64 {
        u64::from(self.values) * u64::from(self.suits)
    }

    /// Number of distinct hands that can be dealt from this deck.
    pub fn total_hands(&self) -> Result<u128, PokerError> {
        choose(self.deck_size(), self.hand_size as u64)
    }

    /// The values of this deck, as the contiguous run of labels ending at the ace.
    pub fn value_range(&self, ace_value: u32) -> Result<RangeInclusive<u32>, PokerError> {
        if ace_value < self.values {
            return Err(PokerError::InvalidAceValue(ace_value));
        }
        Ok((ace_value - self.values + 1)..=ace_value)
    }
}

impl Default for DeckShape {
    fn default() -> Self {
        Self::standard()
    }
}

/// Every card of a deck shape, with values labelled up to the ace.
///
/// Unlike [`DeckShape`], which only does arithmetic, a `Deck` holds every
/// card in memory, so it is limited to [`Deck::MAX_CARDS`] cards.
#[derive(Debug, Clone)]
pub struct Deck {
    shape: DeckShape,
    /// Card storage, sorted by value then suit.
    cards: Vec<Card>,
}

impl Deck {
    pub const MAX_CARDS: u64 = 1 << 24;

    /// Create the full deck for `shape`.
    ///
    /// ```
    /// use combinatorial_poker::core::{Deck, DeckShape};
    ///
    /// let deck = Deck::new(DeckShape::standard(), 14).unwrap();
    /// assert_eq!(52, deck.len());
    /// ```
    pub fn new(shape: DeckShape, ace_value: u32) -> Result<Self, PokerError> {
        let deck_size = shape.deck_size();
        if deck_size > Self::MAX_CARDS {
            return Err(PokerError::DeckTooLarge {
                deck_size,
                max: Self::MAX_CARDS,
            });
        }
        let range = shape.value_range(ace_value)?;
        let mut cards = Vec::with_capacity(deck_size as usize);
        for value in range {
            for suit in 1..=shape.suits() {
                cards.push(Card { value, suit });
            }
        }
        Ok(Self { shape, cards })
    }

    pub fn shape(&self) -> &DeckShape {
        &self.shape
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.binary_search(c).is_ok()
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// A deck built from a valid shape is never empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draw `n` distinct cards at random.
    /// Asking for more cards than the deck holds returns the whole deck, shuffled.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        rand::seq::index::sample(rng, self.cards.len(), n)
            .into_iter()
            .map(|i| self.cards[i])
            .collect()
    }

    /// Draw one random hand of the shape's hand size.
    pub fn sample_hand<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        self.sample(rng, self.shape.hand_size())
    }

    /// Iterate over every possible hand of this deck.
    pub fn hands(&self) -> CardIter {
        CardIter::new(self.cards.clone(), self.shape.hand_size())
    }
}
