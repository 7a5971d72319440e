//! Hand classification.
//!
//! Works out the frequency signature of a hand, whether it's a
//! straight, a flush or a royal flush, and the card order that
//! scoring relies on.

/// Options for reading a hand.
mod config;
pub use self::config::EvaluatorConfig;

/// The classifier itself.
mod evaluation;
pub use self::evaluation::{Evaluation, evaluate, evaluate_in};
