//! The fixed transition matrix of the mod-7 dice chain.
//!
//! From residue `i`, a roll of `k` moves to `(i + k) mod 7`. Since `k` is
//! never a multiple of 7, the chain never stays put: the diagonal is 0 and
//! every other entry is 1/6. Used for display only.

use crate::constants::{DIE_FACES, MODULUS, NUM_STATES};

/// Zero-sized handle for the fixed 7x7 matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionMatrix;

impl TransitionMatrix {
    /// Probability of moving from `from` to `to` in one roll.
    pub fn probability(&self, from: u8, to: u8) -> f64 {
        debug_assert!(from < MODULUS && to < MODULUS);
        let reachable = (1..=DIE_FACES).filter(|k| (from + k) % MODULUS == to).count();
        reachable as f64 / DIE_FACES as f64
    }

    /// Table label for an entry.
    pub fn label(&self, from: u8, to: u8) -> &'static str {
        if self.probability(from, to) > 0.0 {
            "1/6"
        } else {
            "0"
        }
    }

    /// Row `from` of the matrix.
    pub fn row(&self, from: u8) -> [f64; NUM_STATES] {
        let mut row = [0.0; NUM_STATES];
        for (to, p) in row.iter_mut().enumerate() {
            *p = self.probability(from, to as u8);
        }
        row
    }

    pub fn rows(&self) -> impl Iterator<Item = [f64; NUM_STATES]> + '_ {
        (0..MODULUS).map(move |from| self.row(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_is_zero() {
        let m = TransitionMatrix;
        for i in 0..7 {
            assert_eq!(m.probability(i, i), 0.0);
            assert_eq!(m.label(i, i), "0");
        }
    }

    #[test]
    fn test_off_diagonal_is_one_sixth() {
        let m = TransitionMatrix;
        for i in 0..7 {
            for j in 0..7 {
                if i != j {
                    assert!((m.probability(i, j) - 1.0 / 6.0).abs() < 1e-12);
                    assert_eq!(m.label(i, j), "1/6");
                }
            }
        }
    }

    #[test]
    fn test_rows_and_columns_sum_to_one() {
        let m = TransitionMatrix;
        let rows: Vec<_> = m.rows().collect();
        assert_eq!(rows.len(), 7);
        for row in &rows {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
        for col in 0..7 {
            let sum: f64 = rows.iter().map(|r| r[col]).sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }
}
