//! Kemeny score evaluation.
//!
//! The score of a ranking counts, for every pair where `a` is placed above
//! `b`, the weight of `b` over `a`: the evidence the ranking contradicts.
//! Swapping two adjacent competitors only flips the relative order of that
//! one pair, so its score can be updated in constant time.

use crate::tournament::WeightMatrix;

/// A total order of competitor indices. Position 0 is the top rank.
pub type Ranking = Vec<usize>;

/// Computes the Kemeny score of `ranking` from scratch.
///
/// O(n²). Seeds a search; never called per move.
///
/// # Examples
///
/// ```
/// use kemeny_anneal::kemeny::full_score;
/// use kemeny_anneal::tournament::WeightMatrix;
///
/// let w = WeightMatrix::from_rows(vec![vec![0, 3], vec![0, 0]]).unwrap();
/// assert_eq!(full_score(&[0, 1], &w), 0);
/// assert_eq!(full_score(&[1, 0], &w), 3);
/// ```
pub fn full_score(ranking: &[usize], weights: &WeightMatrix) -> u64 {
    let mut score = 0;
    for (i, &above) in ranking.iter().enumerate() {
        for &below in &ranking[i + 1..] {
            score += weights.weight(below, above);
        }
    }
    score
}

/// Score after swapping positions `position` and `position + 1`, without
/// touching the ranking.
///
/// `current_score` must be the true score of `ranking` and `position` must
/// be at most `ranking.len() - 2`; neither is checked in release builds.
#[inline]
pub fn adjacent_swap_score(
    ranking: &[usize],
    current_score: u64,
    position: usize,
    weights: &WeightMatrix,
) -> u64 {
    debug_assert!(position + 1 < ranking.len(), "swap position out of range");
    let upper = ranking[position];
    let lower = ranking[position + 1];
    // Before the swap `lower` beating `upper` was the violation; after it,
    // `upper` beating `lower` is.
    current_score - weights.weight(lower, upper) + weights.weight(upper, lower)
}

/// Returns a copy of `ranking` with positions `position` and `position + 1`
/// swapped, together with its score.
///
/// Same preconditions as [`adjacent_swap_score`].
pub fn adjacent_swap(
    ranking: &[usize],
    current_score: u64,
    position: usize,
    weights: &WeightMatrix,
) -> (Ranking, u64) {
    let score = adjacent_swap_score(ranking, current_score, position, weights);
    let mut swapped = ranking.to_vec();
    swapped.swap(position, position + 1);
    (swapped, score)
}

/// Returns `true` if `ranking` contains each of `0..n` exactly once.
pub fn is_permutation(ranking: &[usize], n: usize) -> bool {
    if ranking.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &c in ranking {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}
