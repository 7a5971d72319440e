use std::fmt;

use crate::core::{DeckShape, PokerError};

/// How many times each distinct value shows up in a hand,
/// sorted in descending order.
///
/// `(3, 2)` is three cards of one value and two of another,
/// a full house in the standard game.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Signature(Vec<usize>);

impl Signature {
    /// Build a signature from value frequencies in any order.
    /// An empty list or a zero frequency describes no hand at all.
    pub fn new(mut parts: Vec<usize>) -> Result<Self, PokerError> {
        if parts.is_empty() || parts.contains(&0) {
            return Err(PokerError::InvalidCategory);
        }
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self(parts))
    }

    /// Signature of a hand where every value is different.
    pub fn all_ones(hand_size: usize) -> Self {
        Self(vec![1; hand_size])
    }

    pub fn parts(&self) -> &[usize] {
        &self.0
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cards in a hand with this signature.
    pub fn hand_size(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn is_all_ones(&self) -> bool {
        self.0.iter().all(|&f| f == 1)
    }

    /// Can this signature be dealt from `shape`?
    /// It needs no more distinct values than the deck has,
    /// and no value repeated more often than there are suits.
    pub fn fits(&self, shape: &DeckShape) -> bool {
        self.hand_size() == shape.hand_size()
            && self.0.len() <= shape.values() as usize
            && self.0.first().is_some_and(|&f| f <= shape.suits() as usize)
    }
}

impl From<Signature> for Vec<usize> {
    fn from(val: Signature) -> Self {
        val.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, ")")
    }
}

/// Everything that decides how rare a hand is.
///
/// Straights and flushes only exist when every value is different,
/// so they don't carry a signature. A royal flush is always a
/// straight flush. Those rules are part of the type, there is no
/// way to build a flush with a pair in it.
///
/// The derived ordering is only used to break ties between
/// categories that are exactly as common as each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Hands told apart only by how values repeat.
    /// The all ones signature here is the plain high card hand.
    RepeatedValue(Signature),
    /// Consecutive values, mixed suits.
    Straight,
    /// One suit, values not consecutive.
    Flush,
    /// Consecutive values of one suit, not topped by the ace
    /// when royal flushes are ranked on their own.
    StraightFlush,
    /// Straight flush with the ace on top.
    RoyalFlush,
}

impl Category {
    /// Build a category out of the flat classification tuple.
    ///
    /// ```
    /// use combinatorial_poker::ranking::{Category, Signature};
    ///
    /// let ones = Signature::all_ones(5);
    /// assert_eq!(
    ///     Category::Flush,
    ///     Category::from_parts(ones.clone(), false, true, false).unwrap()
    /// );
    /// // A royal flush that isn't a straight can't exist.
    /// assert!(Category::from_parts(ones, false, true, true).is_err());
    /// ```
    pub fn from_parts(
        signature: Signature,
        is_straight: bool,
        is_flush: bool,
        is_royal_flush: bool,
    ) -> Result<Self, PokerError> {
        if (is_straight || is_flush) && !signature.is_all_ones() {
            return Err(PokerError::InvalidCategory);
        }
        match (is_straight, is_flush, is_royal_flush) {
            (false, false, false) => Ok(Category::RepeatedValue(signature)),
            (true, false, false) => Ok(Category::Straight),
            (false, true, false) => Ok(Category::Flush),
            (true, true, false) => Ok(Category::StraightFlush),
            (true, true, true) => Ok(Category::RoyalFlush),
            _ => Err(PokerError::InvalidCategory),
        }
    }

    /// `(is_straight, is_flush, is_royal_flush)`
    pub fn flags(&self) -> (bool, bool, bool) {
        match self {
            Category::RepeatedValue(_) => (false, false, false),
            Category::Straight => (true, false, false),
            Category::Flush => (false, true, false),
            Category::StraightFlush => (true, true, false),
            Category::RoyalFlush => (true, true, true),
        }
    }

    /// The frequency signature of any hand in this category.
    pub fn signature(&self, hand_size: usize) -> Signature {
        match self {
            Category::RepeatedValue(sig) => sig.clone(),
            _ => Signature::all_ones(hand_size),
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, Category::RepeatedValue(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::RepeatedValue(sig) => write!(f, "RepeatedValue{sig}"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::StraightFlush => write!(f, "StraightFlush"),
            Category::RoyalFlush => write!(f, "RoyalFlush"),
        }
    }
}
