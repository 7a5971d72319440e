//! Base `ace_value + 1` scores.
//!
//! Card values are the digits of a number written in base
//! `ace_value + 1`, most significant card first. The rank of the hand's
//! category shifts the whole number up by `rank` digits, so a hand of a
//! rarer category beats every hand of a more common one whatever its cards,
//! and hands of the same category compare card by card.

use crate::core::PokerError;

fn base_of(ace_value: u32) -> Result<u128, PokerError> {
    if ace_value == 0 {
        return Err(PokerError::InvalidAceValue(ace_value));
    }
    Ok(u128::from(ace_value) + 1)
}

/// Score of a hand.
///
/// `card_values` must be in the order the evaluator puts them in.
/// The result is exact; a score that doesn't fit in a `u128` is an error.
///
/// ```
/// use combinatorial_poker::score::score;
///
/// assert_eq!(29_043_958_007_812_500, score(&[14, 13, 12, 11, 10], 9, 14).unwrap());
/// assert_eq!(267_344, score(&[5, 4, 3, 2, 14], 0, 14).unwrap());
/// ```
pub fn score(card_values: &[u32], hand_rank: usize, ace_value: u32) -> Result<u128, PokerError> {
    let base = base_of(ace_value)?;
    let exponent = card_values.len() + hand_rank;

    let mut total: u128 = 0;
    for (k, &value) in card_values.iter().enumerate() {
        let power = u32::try_from(exponent - 1 - k)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .ok_or(PokerError::ScoreOverflow)?;
        total = u128::from(value)
            .checked_mul(power)
            .and_then(|digit| total.checked_add(digit))
            .ok_or(PokerError::ScoreOverflow)?;
    }
    Ok(total)
}

/// Logarithm of [`score`] in base `ace_value + 1`.
///
/// This grows by about one per rank, which makes it handy for plotting
/// and statistics. It is worked out digit by digit rather than from the
/// integer score, so it stays finite for hands whose score overflows.
///
/// An empty or all zero hand has no positive score to take the log of,
/// and that is an error rather than a `NaN` or an infinity.
pub fn log_score(card_values: &[u32], hand_rank: usize, ace_value: u32) -> Result<f64, PokerError> {
    let base = base_of(ace_value)? as f64;

    // score = base^(n + rank - 1) * sum(value[k] * base^-k)
    let mut mantissa = 0.0;
    let mut scale = 1.0;
    for &value in card_values {
        mantissa += f64::from(value) * scale;
        scale /= base;
    }
    if mantissa <= 0.0 {
        return Err(PokerError::NonPositiveScore);
    }

    let exponent = (card_values.len() + hand_rank - 1) as f64;
    Ok(exponent + mantissa.ln() / base.ln())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_score_royal_flush() {
        // Highest score in standard poker.
        assert_eq!(
            29_043_958_007_812_500,
            score(&[14, 13, 12, 11, 10], 9, 14).unwrap()
        );
    }

    #[test]
    fn test_score_high_card() {
        // Lowest score in standard poker.
        assert_eq!(267_344, score(&[5, 4, 3, 2, 14], 0, 14).unwrap());
    }

    #[test]
    fn test_score_single_digit() {
        assert_eq!(7, score(&[7], 0, 14).unwrap());
        assert_eq!(7 * 15 * 15, score(&[7], 2, 14).unwrap());
    }

    #[test]
    fn test_score_within_rank() {
        // Pair of aces beats pair of kings.
        let aces = score(&[14, 14, 4, 3, 2], 1, 14).unwrap();
        let kings = score(&[13, 13, 14, 12, 11], 1, 14).unwrap();
        assert!(aces > kings);
        // Kicker decides.
        let better_kicker = score(&[14, 14, 5, 3, 2], 1, 14).unwrap();
        assert!(better_kicker > aces);
    }

    #[test]
    fn test_score_rank_dominates() {
        for n in 1..8 {
            for rank in 0..20 {
                let best = score(&vec![14; n], rank, 14).unwrap();
                let worst_above = score(&vec![1; n], rank + 1, 14).unwrap();
                assert!(worst_above > best);
            }
        }
    }

    #[test]
    fn test_score_overflow() {
        assert_eq!(Err(PokerError::ScoreOverflow), score(&[14; 10], 40, 14));
    }

    #[test]
    fn test_log_score_matches_score() {
        for (values, rank) in [
            (vec![14, 13, 12, 11, 10], 9),
            (vec![5, 4, 3, 2, 14], 0),
            (vec![9, 9, 9, 5, 5], 6),
            (vec![3], 0),
        ] {
            let exact = score(&values, rank, 14).unwrap() as f64;
            let log = log_score(&values, rank, 14).unwrap();
            assert_relative_eq!(exact.ln() / 15f64.ln(), log, max_relative = 1e-12);
            assert!(log > 0.0);
        }
    }

    #[test]
    fn test_log_score_without_overflow() {
        let log = log_score(&[14; 10], 40, 14).unwrap();
        assert!(log.is_finite());
        assert!(log > 49.0 && log < 50.0);
    }

    #[test]
    fn test_log_score_monotonic() {
        let low = log_score(&[14, 14, 14, 14, 14], 3, 14).unwrap();
        let high = log_score(&[1, 1, 1, 1, 1], 4, 14).unwrap();
        assert!(high > low);
    }

    #[test]
    fn test_log_score_errors() {
        assert_eq!(Err(PokerError::NonPositiveScore), log_score(&[], 0, 14));
        assert_eq!(Err(PokerError::NonPositiveScore), log_score(&[0, 0], 3, 14));
        assert_eq!(
            Err(PokerError::InvalidAceValue(0)),
            log_score(&[1, 1], 3, 0)
        );
        assert_eq!(Err(PokerError::InvalidAceValue(0)), score(&[1], 0, 0));
    }
}
