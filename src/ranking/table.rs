use std::collections::BTreeMap;

use super::{Category, RankingConfig};
use crate::core::{DeckShape, PokerError};

/// Exact number of hands in each category of a deck shape.
///
/// Categories that can't be dealt are kept with a count of zero.
/// Built once by [`super::generate_ranking`] and read only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTable {
    shape: DeckShape,
    config: RankingConfig,
    counts: BTreeMap<Category, u128>,
}

impl CountTable {
    pub(crate) fn new(
        shape: DeckShape,
        config: RankingConfig,
        counts: BTreeMap<Category, u128>,
    ) -> Self {
        Self {
            shape,
            config,
            counts,
        }
    }

    pub fn shape(&self) -> &DeckShape {
        &self.shape
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// How many hands fall into `category`.
    /// `None` when the category isn't tracked at all, e.g. royal
    /// flushes when they aren't ranked on their own.
    pub fn get(&self, category: &Category) -> Option<u128> {
        self.counts.get(category).copied()
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.counts.contains_key(category)
    }

    /// Sum over every category. Always the number of distinct hands of the shape.
    ///
    /// Every single count can fit in a `u128` while their sum doesn't,
    /// that sum is reported as `CountOverflow`.
    pub fn total(&self) -> Result<u128, PokerError> {
        self.counts
            .values()
            .try_fold(0u128, |acc, &c| acc.checked_add(c))
            .ok_or(PokerError::CountOverflow)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Probability of being dealt a hand in `category`.
    pub fn probability(&self, category: &Category) -> Option<f64> {
        let total: f64 = self.counts.values().map(|&c| c as f64).sum();
        self.get(category).map(|c| c as f64 / total)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, u128)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }
}

/// Dense ranking of categories by rarity.
///
/// Rank 0 is the most common category, the highest rank the rarest.
/// Only categories with at least one hand get a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingTable {
    ranks: BTreeMap<Category, usize>,
    by_rank: Vec<Category>,
}

impl RankingTable {
    /// Rank the categories in the order given, most common first.
    pub(crate) fn new(by_rank: Vec<Category>) -> Self {
        let ranks = by_rank
            .iter()
            .enumerate()
            .map(|(rank, category)| (category.clone(), rank))
            .collect();
        Self { ranks, by_rank }
    }

    /// Look up the rank of a category.
    ///
    /// Asking for a category the table doesn't rank is an error, never rank 0.
    pub fn rank(&self, category: &Category) -> Result<usize, PokerError> {
        self.ranks
            .get(category)
            .copied()
            .ok_or_else(|| PokerError::UnrankedCategory(category.clone()))
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.ranks.contains_key(category)
    }

    pub fn category_at(&self, rank: usize) -> Option<&Category> {
        self.by_rank.get(rank)
    }

    /// The rank of the rarest category.
    pub fn max_rank(&self) -> Option<usize> {
        self.by_rank.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.by_rank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_rank.is_empty()
    }

    /// Categories with their ranks, most common first.
    pub fn iter(&self) -> impl Iterator<Item = (&Category, usize)> {
        self.by_rank.iter().enumerate().map(|(rank, c)| (c, rank))
    }
}
