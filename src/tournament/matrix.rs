//! Pairwise weight matrix.

use crate::error::{KemenyError, Result};

/// Square matrix of pairwise comparison weights.
///
/// `weight(i, j)` is the strength of evidence that competitor `i` should be
/// ranked above competitor `j`. The diagonal is always zero.
///
/// Stored row-major in a single allocation. Immutable after construction, so
/// a matrix can be shared by reference across independent runs.
///
/// The sum of all weights must fit in a `u64`. Every ranking's score is at
/// most that sum, so score arithmetic on a constructed matrix cannot overflow.
///
/// # Examples
///
/// ```
/// use kemeny_anneal::tournament::WeightMatrix;
///
/// let w = WeightMatrix::from_rows(vec![vec![0, 3], vec![0, 0]]).unwrap();
/// assert_eq!(w.len(), 2);
/// assert_eq!(w.weight(0, 1), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightMatrix {
    n: usize,
    data: Vec<u64>,
    total: u64,
}

impl WeightMatrix {
    /// Creates an all-zero matrix for `n` competitors.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0; n * n],
            total: 0,
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// Fails if the rows are not square, the diagonal is non-zero, or the
    /// weights sum past `u64::MAX`.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        let mut total = 0u64;
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(KemenyError::InvalidMatrix(format!(
                    "row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if row[i] != 0 {
                return Err(KemenyError::InvalidMatrix(format!(
                    "diagonal entry ({i}, {i}) is {}, expected 0",
                    row[i]
                )));
            }
            for &w in &row {
                total = checked_total(total, w)?;
            }
            data.extend(row);
        }
        Ok(Self { n, data, total })
    }

    /// Builds a matrix from `(winner, loser, weight)` triples with 0-based
    /// indices. A later triple for the same ordered pair overwrites an
    /// earlier one.
    pub fn from_triples<I>(n: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, u64)>,
    {
        let mut matrix = Self::zeros(n);
        for (winner, loser, weight) in triples {
            matrix.set(winner, loser, weight)?;
        }
        Ok(matrix)
    }

    /// Number of competitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of evidence that `i` should outrank `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> u64 {
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice: the weights of `i` over every competitor.
    pub fn row(&self, i: usize) -> &[u64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum of all off-diagonal weights. An upper bound on any ranking's score.
    #[inline]
    pub fn total_weight(&self) -> u64 {
        self.total
    }

    pub(crate) fn set(&mut self, winner: usize, loser: usize, weight: u64) -> Result<()> {
        if winner >= self.n || loser >= self.n {
            return Err(KemenyError::InvalidMatrix(format!(
                "pair ({winner}, {loser}) out of range for {} competitors",
                self.n
            )));
        }
        if winner == loser {
            return Err(KemenyError::InvalidMatrix(format!(
                "competitor {winner} cannot have a weight against itself"
            )));
        }
        let cell = &mut self.data[winner * self.n + loser];
        // The old weight is part of the total, so removing it cannot underflow.
        self.total = checked_total(self.total - *cell, weight)?;
        *cell = weight;
        Ok(())
    }
}

fn checked_total(total: u64, weight: u64) -> Result<u64> {
    total.checked_add(weight).ok_or_else(|| {
        KemenyError::InvalidMatrix(format!(
            "total weight exceeds {} after adding {weight}",
            u64::MAX
        ))
    })
}
