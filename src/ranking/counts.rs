//! Closed form hand counts for each category of a deck shape.

use std::collections::BTreeMap;

use super::{RankingConfig, Signature};
use crate::combinatorics::{choose, multinomial};
use crate::core::{DeckShape, PokerError};

fn mul(a: u128, b: u128) -> Result<u128, PokerError> {
    a.checked_mul(b).ok_or(PokerError::CountOverflow)
}

fn sub(a: u128, b: u128) -> Result<u128, PokerError> {
    a.checked_sub(b).ok_or(PokerError::CountOverflow)
}

/// Number of distinct sets of values that form a straight.
///
/// A run can top out at any value from the `hand_size`th up to the ace.
/// The wheel, with the ace playing low, is one more run as long as
/// it isn't the same set of values as an ordinary run. That takes
/// more values than cards in a hand, and at least two cards.
pub fn straight_runs(shape: &DeckShape, config: &RankingConfig) -> u128 {
    let values = u128::from(shape.values());
    let size = shape.hand_size() as u128;
    if values < size {
        return 0;
    }
    let wheel = config.dual_ace && size >= 2 && values > size;
    values - size + 1 + u128::from(wheel)
}

/// Number of royal flushes, one per suit.
/// Zero when royal flushes are folded into straight flushes.
pub fn royal_flushes(shape: &DeckShape, config: &RankingConfig) -> u128 {
    if !config.royal_flush || (shape.values() as usize) < shape.hand_size() {
        0
    } else {
        u128::from(shape.suits())
    }
}

/// Number of straight flushes, not counting royal flushes when those
/// are ranked on their own.
pub fn straight_flushes(shape: &DeckShape, config: &RankingConfig) -> Result<u128, PokerError> {
    let all = mul(u128::from(shape.suits()), straight_runs(shape, config))?;
    sub(all, royal_flushes(shape, config))
}

/// Number of flushes that are not also straights.
pub fn flush_hands(shape: &DeckShape, config: &RankingConfig) -> Result<u128, PokerError> {
    if (shape.values() as usize) < shape.hand_size() {
        return Ok(0);
    }
    let suits = u128::from(shape.suits());
    let same_suit = mul(
        suits,
        choose(u64::from(shape.values()), shape.hand_size() as u64)?,
    )?;
    sub(same_suit, mul(suits, straight_runs(shape, config))?)
}

/// Number of straights that are not also flushes.
pub fn straight_hands(shape: &DeckShape, config: &RankingConfig) -> Result<u128, PokerError> {
    let runs = straight_runs(shape, config);
    if runs == 0 {
        return Ok(0);
    }
    let suits = u128::from(shape.suits());
    let exponent = u32::try_from(shape.hand_size()).map_err(|_| PokerError::CountOverflow)?;
    let any_suit = suits.checked_pow(exponent).ok_or(PokerError::CountOverflow)?;
    sub(mul(any_suit, runs)?, mul(suits, runs)?)
}

/// Number of hands with the given frequency signature, ignoring
/// whether they also happen to be straights or flushes.
///
/// Each part of the signature picks its suits, then the distinct values
/// are handed out to the parts. Parts of equal size are interchangeable,
/// so the value assignment only counts once per arrangement of them.
pub fn repeated_value_hands(shape: &DeckShape, signature: &Signature) -> Result<u128, PokerError> {
    if !signature.fits(shape) {
        return Ok(0);
    }

    let mut suit_choices: u128 = 1;
    let mut multiplicities: BTreeMap<usize, u64> = BTreeMap::new();
    for &f in signature.parts() {
        suit_choices = mul(suit_choices, choose(u64::from(shape.suits()), f as u64)?)?;
        *multiplicities.entry(f).or_insert(0) += 1;
    }

    let distinct = signature.len() as u64;
    let which_values = choose(u64::from(shape.values()), distinct)?;
    let mults: Vec<u64> = multiplicities.into_values().collect();
    let assignments = mul(which_values, multinomial(&mults)?)?;
    mul(suit_choices, assignments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> (DeckShape, RankingConfig) {
        (DeckShape::standard(), RankingConfig::default())
    }

    fn sig(parts: &[usize]) -> Signature {
        Signature::new(parts.to_vec()).unwrap()
    }

    #[test]
    fn test_royal_flushes_basic() {
        let config = RankingConfig::default();
        assert_eq!(3, royal_flushes(&DeckShape::new(5, 3, 5).unwrap(), &config));
        assert_eq!(4, royal_flushes(&DeckShape::standard(), &config));
        assert_eq!(0, royal_flushes(&DeckShape::new(3, 4, 5).unwrap(), &config));
    }

    #[test]
    fn test_royal_flushes_disabled() {
        let config = RankingConfig {
            royal_flush: false,
            ..Default::default()
        };
        assert_eq!(0, royal_flushes(&DeckShape::new(10, 4, 5).unwrap(), &config));
    }

    #[test]
    fn test_standard_special_counts() {
        let (shape, config) = standard();
        assert_eq!(10, straight_runs(&shape, &config));
        assert_eq!(36, straight_flushes(&shape, &config).unwrap());
        assert_eq!(5_108, flush_hands(&shape, &config).unwrap());
        assert_eq!(10_200, straight_hands(&shape, &config).unwrap());
    }

    #[test]
    fn test_no_wheel() {
        let shape = DeckShape::standard();
        let config = RankingConfig {
            dual_ace: false,
            ..Default::default()
        };
        assert_eq!(9, straight_runs(&shape, &config));
        assert_eq!(32, straight_flushes(&shape, &config).unwrap());
        assert_eq!(9_180, straight_hands(&shape, &config).unwrap());
    }

    #[test]
    fn test_straight_flushes_border() {
        // Every value in a single run, the wheel is that same run.
        let shape = DeckShape::new(5, 2, 5).unwrap();
        let no_royal = RankingConfig {
            royal_flush: false,
            ..Default::default()
        };
        assert_eq!(1, straight_runs(&shape, &no_royal));
        assert_eq!(2, straight_flushes(&shape, &no_royal).unwrap());
        assert_eq!(0, straight_flushes(&shape, &RankingConfig::default()).unwrap());
        assert_eq!(0, flush_hands(&shape, &no_royal).unwrap());
        assert_eq!(30, straight_hands(&shape, &no_royal).unwrap());
    }

    #[test]
    fn test_not_enough_values() {
        let (_, config) = standard();
        let shape = DeckShape::new(3, 4, 5).unwrap();
        assert_eq!(0, straight_runs(&shape, &config));
        assert_eq!(0, straight_flushes(&shape, &config).unwrap());
        assert_eq!(0, flush_hands(&shape, &config).unwrap());
        assert_eq!(0, straight_hands(&shape, &config).unwrap());
    }

    #[test]
    fn test_repeated_value_hands_standard() {
        let shape = DeckShape::standard();
        assert_eq!(1_317_888, repeated_value_hands(&shape, &sig(&[1, 1, 1, 1, 1])).unwrap());
        assert_eq!(1_098_240, repeated_value_hands(&shape, &sig(&[2, 1, 1, 1])).unwrap());
        assert_eq!(123_552, repeated_value_hands(&shape, &sig(&[2, 2, 1])).unwrap());
        assert_eq!(54_912, repeated_value_hands(&shape, &sig(&[3, 1, 1])).unwrap());
        assert_eq!(3_744, repeated_value_hands(&shape, &sig(&[3, 2])).unwrap());
        assert_eq!(624, repeated_value_hands(&shape, &sig(&[4, 1])).unwrap());
    }

    #[test]
    fn test_repeated_value_hands_impossible() {
        let shape = DeckShape::standard();
        // Five of a kind needs five suits.
        assert_eq!(0, repeated_value_hands(&shape, &sig(&[5])).unwrap());
        // Six distinct values from a deck of two.
        let narrow = DeckShape::new(2, 6, 6).unwrap();
        assert_eq!(0, repeated_value_hands(&narrow, &sig(&[2, 2, 1, 1])).unwrap());
    }
}
