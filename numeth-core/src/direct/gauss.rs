#![allow(clippy::needless_range_loop)]
//! Gaussian elimination for square linear systems.

use numeth_linalg::{DenseMatrix, LinalgError, Result};

use super::back_substitute;
use crate::{check_square_system, PIVOT_TOL};

/// Solve `A * x = b` by Gaussian elimination without pivoting.
///
/// Takes both arguments by value: forward elimination overwrites the
/// coefficient matrix and the right-hand side, so callers that still need
/// the originals must clone before calling.
///
/// No row exchanges are performed. A zero (or near-zero) pivot fails with
/// [`LinalgError::SingularMatrix`] before any division, even when the
/// system would be solvable under a different row order.
pub fn solve_gaussian(mut a: DenseMatrix, mut b: Vec<f64>) -> Result<Vec<f64>> {
    let n = check_square_system(&a, &b)?;

    for i in 0..n.saturating_sub(1) {
        let pivot = a.get(i, i);
        if pivot.abs() < PIVOT_TOL {
            return Err(LinalgError::SingularMatrix { pivot: i });
        }
        for j in (i + 1)..n {
            let l = a.get(j, i) / pivot;
            b[j] -= l * b[i];
            a.set(j, i, 0.0);
            for k in (i + 1)..n {
                a.set(j, k, a.get(j, k) - l * a.get(i, k));
            }
        }
    }

    back_substitute(&a, &b)
}
