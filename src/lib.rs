//! Hand ranking for decks of any shape.
//!
//! The standard game fixes thirteen values, four suits and five card
//! hands. This library takes those three numbers as input, counts exactly
//! how many hands of each kind can be dealt, and ranks the kinds by how
//! rare they are. Single hands can then be classified and scored so that
//! comparing scores agrees with that ranking.
//!
//! A ranking is built once per deck shape and is read only afterwards:
//!
//! ```
//! use combinatorial_poker::HandRanker;
//! use combinatorial_poker::core::{Card, DeckShape};
//! use combinatorial_poker::evaluator::EvaluatorConfig;
//!
//! // Nine values, three suits, six card hands. Values run 2 through 10.
//! let shape = DeckShape::new(9, 3, 6).unwrap();
//! let ranker = HandRanker::new(shape, EvaluatorConfig::with_ace(10)).unwrap();
//!
//! let hand = [(10, 1), (10, 2), (10, 3), (4, 1), (4, 2), (2, 3)].map(Card::from);
//! let scored = ranker.score_hand(&hand).unwrap();
//! assert_eq!(&[3, 2, 1], scored.evaluation.signature().parts());
//! ```

/// Cards, deck shapes and the error type.
pub mod core;

/// Binomial coefficients, subsets and integer partitions.
pub mod combinatorics;

/// Counting and ranking hand categories.
pub mod ranking;

/// Classifying single hands.
pub mod evaluator;

/// Turning a ranked hand into a number.
pub mod score;

/// Glue between ranking, evaluation and scoring.
mod ranker;
pub use self::ranker::{HandRanker, ScoredHand};
