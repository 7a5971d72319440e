use std::collections::{BTreeMap, HashSet};

use tracing::event;

use super::EvaluatorConfig;
use crate::core::{Card, DeckShape, PokerError};
use crate::ranking::{Category, Signature};

/// The result of classifying a hand.
///
/// `cards` holds the hand in the order scoring expects: grouped by how
/// often each value repeats, then by value, highest first. In a wheel
/// the ace sits at the low end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    cards: Vec<Card>,
    signature: Signature,
    is_straight: bool,
    is_flush: bool,
    is_royal_flush: bool,
}

impl Evaluation {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card values in scoring order.
    pub fn values(&self) -> Vec<u32> {
        self.cards.iter().map(|c| c.value).collect()
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn is_straight(&self) -> bool {
        self.is_straight
    }

    pub fn is_flush(&self) -> bool {
        self.is_flush
    }

    pub fn is_royal_flush(&self) -> bool {
        self.is_royal_flush
    }

    /// The category to look up in a ranking table.
    pub fn category(&self) -> Category {
        match (self.is_straight, self.is_flush, self.is_royal_flush) {
            (_, _, true) => Category::RoyalFlush,
            (true, true, false) => Category::StraightFlush,
            (true, false, false) => Category::Straight,
            (false, true, false) => Category::Flush,
            (false, false, false) => Category::RepeatedValue(self.signature.clone()),
        }
    }

    /// Break the evaluation back into the flat classification tuple.
    pub fn into_parts(self) -> (Vec<Card>, Signature, bool, bool, bool) {
        (
            self.cards,
            self.signature,
            self.is_straight,
            self.is_flush,
            self.is_royal_flush,
        )
    }
}

/// Classify a hand.
///
/// The input is left alone, the canonical ordering comes back in the
/// [`Evaluation`]. Empty hands, duplicate cards and values outside
/// `1..=ace_value` are rejected before anything is classified.
///
/// ```
/// use combinatorial_poker::core::Card;
/// use combinatorial_poker::evaluator::{EvaluatorConfig, evaluate};
/// use combinatorial_poker::ranking::Category;
///
/// let hand = Card::parse_hand("5d5s9c9h9d").unwrap();
/// let eval = evaluate(&hand, &EvaluatorConfig::default()).unwrap();
/// assert_eq!(vec![9, 9, 9, 5, 5], eval.values());
/// assert_eq!(&[3, 2], eval.signature().parts());
/// assert!(!eval.category().is_special());
/// ```
pub fn evaluate(cards: &[Card], config: &EvaluatorConfig) -> Result<Evaluation, PokerError> {
    config.validate()?;
    if cards.is_empty() {
        return Err(PokerError::EmptyHand);
    }

    let mut seen = HashSet::with_capacity(cards.len());
    for c in cards {
        if c.value == 0 || c.value > config.ace_value {
            return Err(PokerError::CardValueOutOfRange {
                card: *c,
                min: 1,
                max: config.ace_value,
            });
        }
        if !seen.insert(*c) {
            return Err(PokerError::DuplicateCardInHand(*c));
        }
    }

    classify(cards.to_vec(), config)
}

/// Classify a hand dealt from `shape`.
///
/// On top of the checks of [`evaluate`] the hand must have exactly the
/// shape's hand size, and every card has to come from the shape's deck.
pub fn evaluate_in(
    shape: &DeckShape,
    cards: &[Card],
    config: &EvaluatorConfig,
) -> Result<Evaluation, PokerError> {
    config.validate()?;
    if cards.len() != shape.hand_size() {
        return Err(PokerError::WrongHandSize {
            expected: shape.hand_size(),
            found: cards.len(),
        });
    }
    let values = shape.value_range(config.ace_value)?;
    for c in cards {
        if !values.contains(&c.value) {
            return Err(PokerError::CardValueOutOfRange {
                card: *c,
                min: *values.start(),
                max: *values.end(),
            });
        }
        if c.suit == 0 || c.suit > shape.suits() {
            return Err(PokerError::CardSuitOutOfRange {
                card: *c,
                suits: shape.suits(),
            });
        }
    }
    evaluate(cards, config)
}

fn classify(mut cards: Vec<Card>, config: &EvaluatorConfig) -> Result<Evaluation, PokerError> {
    // Stable, so equal values keep the order they were dealt in.
    cards.sort_by(|a, b| b.value.cmp(&a.value));

    let mut frequencies: BTreeMap<u32, usize> = BTreeMap::new();
    for c in &cards {
        *frequencies.entry(c.value).or_insert(0) += 1;
    }
    let signature = Signature::new(frequencies.values().copied().collect())?;

    let mut is_straight = false;
    let mut is_flush = false;
    let mut is_royal_flush = false;

    if signature.is_all_ones() {
        let n = cards.len();
        let top = cards[0].value;
        let bottom = cards[n - 1].value;

        is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
        is_straight = (top - bottom) as usize == n - 1;

        if !is_straight && config.allow_dual_ace {
            let is_wheel = n >= 2
                && top == config.ace_value
                && (cards[1].value - bottom) as usize == n - 2
                && bottom == config.alt_ace_value + 1;
            if is_wheel {
                is_straight = true;
                let mut ace = cards.remove(0);
                if config.replace_ace_value {
                    ace.value = config.alt_ace_value;
                }
                cards.push(ace);
                event!(tracing::Level::TRACE, ?ace, "Ace plays low in a wheel");
            }
        } else if is_straight && top == config.ace_value {
            is_royal_flush = is_flush && config.accept_royal_flush;
        }
    } else {
        cards.sort_by(|a, b| {
            frequencies[&b.value]
                .cmp(&frequencies[&a.value])
                .then_with(|| b.value.cmp(&a.value))
        });
    }

    Ok(Evaluation {
        cards,
        signature,
        is_straight,
        is_flush,
        is_royal_flush,
    })
}
