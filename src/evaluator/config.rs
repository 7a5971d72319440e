use crate::core::{PokerError, STANDARD_ACE};
use crate::ranking::RankingConfig;

/// How hands are read by [`super::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// Value of the aces, the highest card of the deck.
    pub ace_value: u32,
    /// Value an ace takes when it plays low in a wheel.
    pub alt_ace_value: u32,
    /// Tell royal flushes apart from other straight flushes.
    pub accept_royal_flush: bool,
    /// Let the ace play low to make a wheel straight.
    pub allow_dual_ace: bool,
    /// Rewrite the ace of a wheel to `alt_ace_value` when moving it to the low end.
    pub replace_ace_value: bool,
}

impl EvaluatorConfig {
    /// Default flags with a different ace value.
    pub fn with_ace(ace_value: u32) -> Self {
        Self {
            ace_value,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), PokerError> {
        if self.ace_value == 0 {
            return Err(PokerError::InvalidAceValue(self.ace_value));
        }
        if self.alt_ace_value >= self.ace_value {
            return Err(PokerError::InvalidAltAceValue {
                ace_value: self.ace_value,
                alt_ace_value: self.alt_ace_value,
            });
        }
        Ok(())
    }

    /// The ranking that agrees with how this config classifies hands.
    pub fn ranking_config(&self) -> RankingConfig {
        RankingConfig {
            royal_flush: self.accept_royal_flush,
            dual_ace: self.allow_dual_ace,
        }
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            ace_value: STANDARD_ACE,
            alt_ace_value: 1,
            accept_royal_flush: true,
            allow_dual_ace: true,
            replace_ace_value: true,
        }
    }
}
