use std::collections::BTreeMap;

use tracing::{event, trace_span};

use super::{
    Category, CountTable, RankingConfig, RankingTable, Signature, flush_hands,
    repeated_value_hands, royal_flushes, straight_flushes, straight_hands,
};
use crate::combinatorics::integer_partitions;
use crate::core::{DeckShape, PokerError};

/// Count every category of hand for `shape` and rank them by rarity.
///
/// Ties between categories with the same count are broken by the
/// ordering of [`Category`], the smaller category taking the smaller rank.
///
/// ```
/// use combinatorial_poker::core::DeckShape;
/// use combinatorial_poker::ranking::{Category, RankingConfig, generate_ranking};
///
/// let (ranking, counts) = generate_ranking(DeckShape::standard(), RankingConfig::default()).unwrap();
/// assert_eq!(Ok(2_598_960), counts.total());
/// assert_eq!(Some(9), ranking.max_rank());
/// assert_eq!(9, ranking.rank(&Category::RoyalFlush).unwrap());
/// ```
pub fn generate_ranking(
    shape: DeckShape,
    config: RankingConfig,
) -> Result<(RankingTable, CountTable), PokerError> {
    let span = trace_span!(
        "generate_ranking",
        values = shape.values(),
        suits = shape.suits(),
        hand_size = shape.hand_size()
    );
    let _enter = span.enter();

    let counts = count_categories(&shape, &config)?;

    let mut ranked: Vec<(&Category, u128)> = counts.iter().filter(|(_, n)| *n > 0).collect();
    ranked.sort_by(|(a_cat, a_n), (b_cat, b_n)| b_n.cmp(a_n).then_with(|| a_cat.cmp(b_cat)));
    let by_rank: Vec<Category> = ranked.into_iter().map(|(c, _)| c.clone()).collect();

    event!(
        tracing::Level::DEBUG,
        categories = counts.len(),
        ranked = by_rank.len(),
        total = ?counts.total(),
        "Generated ranking"
    );

    Ok((RankingTable::new(by_rank), counts))
}

/// Count the hands of every category of `shape`, without ranking them.
pub fn generate_counts(shape: DeckShape, config: RankingConfig) -> Result<CountTable, PokerError> {
    count_categories(&shape, &config)
}

fn count_categories(shape: &DeckShape, config: &RankingConfig) -> Result<CountTable, PokerError> {
    let mut counts: BTreeMap<Category, u128> = BTreeMap::new();

    for parts in integer_partitions(shape.hand_size()) {
        let signature = Signature::new(parts)?;
        if !signature.fits(shape) {
            continue;
        }
        let count = repeated_value_hands(shape, &signature)?;
        event!(tracing::Level::TRACE, %signature, %count, "Repeated value count");
        counts.insert(Category::RepeatedValue(signature), count);
    }

    let rf = royal_flushes(shape, config);
    let sf = straight_flushes(shape, config)?;
    let fh = flush_hands(shape, config)?;
    let sh = straight_hands(shape, config)?;

    // Every straight and flush also has the all ones signature.
    // Take them out of the plain high card count.
    let high_card = Category::RepeatedValue(Signature::all_ones(shape.hand_size()));
    if let Some(n) = counts.get_mut(&high_card) {
        let special = [rf, sf, fh, sh]
            .into_iter()
            .try_fold(0u128, |acc, c| acc.checked_add(c))
            .ok_or(PokerError::CountOverflow)?;
        *n = n.checked_sub(special).ok_or(PokerError::CountOverflow)?;
    }

    counts.insert(Category::StraightFlush, sf);
    counts.insert(Category::Flush, fh);
    counts.insert(Category::Straight, sh);
    if config.royal_flush {
        counts.insert(Category::RoyalFlush, rf);
    }

    let table = CountTable::new(*shape, *config, counts);
    debug_assert_eq!(table.total(), shape.total_hands());
    Ok(table)
}
