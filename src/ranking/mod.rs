//! Combinatorial ranking of hand categories.
//!
//! Counts every kind of hand that can be dealt from a deck shape and
//! ranks the kinds from the most common to the rarest.

/// Frequency signatures and hand categories.
mod category;
pub use self::category::{Category, Signature};

/// Closed form counts for each category.
mod counts;
pub use self::counts::{
    flush_hands, repeated_value_hands, royal_flushes, straight_flushes, straight_hands,
    straight_runs,
};

/// Count and ranking tables.
mod table;
pub use self::table::{CountTable, RankingTable};

/// Building the tables.
mod generator;
pub use self::generator::{generate_counts, generate_ranking};

/// Which special hands the ranking tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankingConfig {
    /// Rank royal flushes on their own instead of as straight flushes.
    pub royal_flush: bool,
    /// Let the ace play low to make a wheel straight.
    pub dual_ace: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            royal_flush: true,
            dual_ace: true,
        }
    }
}
