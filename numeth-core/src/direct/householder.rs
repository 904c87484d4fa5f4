#![allow(clippy::needless_range_loop)]
//! Householder-reflection solver for square linear systems.
//!
//! Eliminates column by column with reflections `I - 2*w*w'`, which yields
//! the QR factorization of the coefficient matrix as a byproduct of the
//! solve: the reduced matrix is R and the accumulated reflections form Q.

use numeth_linalg::{vector, DenseMatrix, Result};

use super::back_substitute;
use crate::check_square_system;

/// Solution of a square system via Householder reflections.
#[derive(Debug, Clone)]
pub struct HouseholderSolution {
    /// Solution vector.
    pub x: Vec<f64>,
    /// Upper-triangular factor.
    pub r: DenseMatrix,
    /// Orthogonal factor; `q * r` reproduces the original matrix.
    pub q: DenseMatrix,
}

/// Solve `A * x = b` by Householder reflections, returning the solution
/// together with the factors `R` and `Q` of `A = Q * R`.
///
/// Takes both arguments by value: the reflections overwrite the
/// coefficient matrix (which becomes `R`) and the right-hand side.
///
/// Fails with [`numeth_linalg::LinalgError::SingularMatrix`] when the
/// reduced triangular system carries a zero pivot.
pub fn solve_householder(mut a: DenseMatrix, mut b: Vec<f64>) -> Result<HouseholderSolution> {
    let n = check_square_system(&a, &b)?;
    let mut q = DenseMatrix::identity(n);

    for i in 0..n.saturating_sub(1) {
        let m = n - i;

        // Sub-column of A from the diagonal down.
        let mut w: Vec<f64> = (0..m).map(|k| a.get(i + k, i)).collect();
        let norm = vector::euclidean_norm(&w);

        // Reflect onto (alpha, 0, ..., 0). Taking alpha with the sign
        // opposite the leading entry keeps w = a - alpha*e1 away from
        // cancellation when the column is already near its norm.
        let alpha = if w[0] > 0.0 { -norm } else { norm };
        w[0] -= alpha;
        let wnorm = vector::euclidean_norm(&w);
        if wnorm > 0.0 {
            for entry in w.iter_mut() {
                *entry /= wnorm;
            }
        }
        // A zero sub-column leaves w = 0: the reflection is a no-op and
        // the zero pivot surfaces in back-substitution.

        a.set(i, i, alpha);
        for k in 1..m {
            a.set(i + k, i, 0.0);
        }

        // Trailing columns: col <- col - 2*w*(w . col).
        for j in (i + 1)..n {
            let mut pr = 0.0;
            for k in 0..m {
                pr += w[k] * a.get(i + k, j);
            }
            for k in 0..m {
                a.set(i + k, j, a.get(i + k, j) - 2.0 * w[k] * pr);
            }
        }

        // Right-hand side under the same reflection.
        let mut pr = 0.0;
        for k in 0..m {
            pr += w[k] * b[i + k];
        }
        for k in 0..m {
            b[i + k] -= 2.0 * w[k] * pr;
        }

        // Accumulate the orthogonal factor: Q <- Q * H_i, which only
        // touches the trailing columns of Q.
        for row in 0..n {
            let mut pr = 0.0;
            for k in 0..m {
                pr += q.get(row, i + k) * w[k];
            }
            for k in 0..m {
                q.set(row, i + k, q.get(row, i + k) - 2.0 * pr * w[k]);
            }
        }
    }

    let x = back_substitute(&a, &b)?;
    Ok(HouseholderSolution { x, r: a, q })
}
