//! Exact counting helpers used to size every hand category.
//!
//! Everything here is pure and deterministic. Sets are returned as
//! `BTreeSet`s so iteration order is the same on every call.

use std::collections::{BTreeSet, HashMap};

use crate::core::PokerError;

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of ways of choosing `k` elements from a set of `n`.
///
/// Choosing nothing, everything, or more than everything counts as
/// a single way. The arithmetic is exact and checked, an answer
/// that doesn't fit in a `u128` is an error rather than a wrapped value.
///
/// ```
/// use combinatorial_poker::combinatorics::choose;
///
/// assert_eq!(2_598_960, choose(52, 5).unwrap());
/// assert_eq!(choose(52, 47).unwrap(), choose(52, 5).unwrap());
/// ```
pub fn choose(n: u64, k: u64) -> Result<u128, PokerError> {
    if k == 0 || k >= n {
        return Ok(1);
    }
    let d = u128::from(k.min(n - k));
    let n = u128::from(n);
    let mut r: u128 = 1;
    for i in 0..d {
        // r is C(n, i) here, so r * (n - i) is divisible by i + 1.
        // Dividing out the common factor first keeps the product small.
        let g = gcd(r, i + 1);
        let factor = (n - i) / ((i + 1) / g);
        r = (r / g)
            .checked_mul(factor)
            .ok_or(PokerError::CountOverflow)?;
    }
    Ok(r)
}

/// Multinomial coefficient `(sum parts)! / prod(part!)`.
pub fn multinomial(parts: &[u64]) -> Result<u128, PokerError> {
    let mut remaining: u64 = parts.iter().sum();
    let mut r: u128 = 1;
    for &p in parts {
        r = r
            .checked_mul(choose(remaining, p)?)
            .ok_or(PokerError::CountOverflow)?;
        remaining -= p;
    }
    Ok(r)
}

type SubsetMemo = HashMap<(usize, usize), BTreeSet<Vec<usize>>>;

/// Subsets of size `k` of `{0, 1, ..., n - 1}`.
///
/// Each subset is a sorted `Vec`. Shared sub problems of the recursion
/// are memoized by `(n, k)`.
pub fn k_subsets(n: usize, k: usize) -> BTreeSet<Vec<usize>> {
    let mut memo = SubsetMemo::new();
    k_subsets_memo(n, k, &mut memo)
}

fn k_subsets_memo(n: usize, k: usize, memo: &mut SubsetMemo) -> BTreeSet<Vec<usize>> {
    if k > n {
        return BTreeSet::new();
    }
    if k == 0 {
        return BTreeSet::from([Vec::new()]);
    }
    if k == n {
        return BTreeSet::from([(0..n).collect()]);
    }
    if let Some(found) = memo.get(&(n, k)) {
        return found.clone();
    }

    // Either the subset leaves out the last element or it holds it.
    let mut subsets = k_subsets_memo(n - 1, k, memo);
    subsets.extend(k_subsets_memo(n - 1, k - 1, memo).into_iter().map(|mut s| {
        s.push(n - 1);
        s
    }));
    memo.insert((n, k), subsets.clone());
    subsets
}

/// Ways of writing `n` as a sum of exactly `k` positive integers.
///
/// Order doesn't matter, every partition is sorted in descending order.
/// The `n` units sit in a row with `n - 1` gaps between them. Picking
/// `k - 1` of those gaps as separators cuts the row into `k` non empty
/// bins, and sorting the bin sizes folds the arrangements that only
/// differ in order into one partition.
///
/// ```
/// use combinatorial_poker::combinatorics::k_integer_partitions;
///
/// let parts: Vec<Vec<usize>> = k_integer_partitions(5, 2).into_iter().collect();
/// assert_eq!(vec![vec![3, 2], vec![4, 1]], parts);
/// ```
pub fn k_integer_partitions(n: usize, k: usize) -> BTreeSet<Vec<usize>> {
    if k == 0 || k > n {
        return BTreeSet::new();
    }
    if k == n {
        return BTreeSet::from([vec![1; n]]);
    }
    if k == 1 {
        return BTreeSet::from([vec![n]]);
    }

    let mut partitions = BTreeSet::new();
    for separators in k_subsets(n - 1, k - 1) {
        let mut parts = Vec::with_capacity(k);
        let mut prev = 0;
        for gap in separators {
            parts.push(gap + 1 - prev);
            prev = gap + 1;
        }
        parts.push(n - prev);
        parts.sort_unstable_by(|a, b| b.cmp(a));
        partitions.insert(parts);
    }
    partitions
}

/// Every way of writing `n` as a sum of positive integers,
/// whatever the number of parts.
pub fn integer_partitions(n: usize) -> BTreeSet<Vec<usize>> {
    (1..=n).flat_map(|k| k_integer_partitions(n, k)).collect()
}
