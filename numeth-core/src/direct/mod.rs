//! Direct solvers: Gaussian elimination and Householder reflections.
//!
//! Both reduce the system to upper-triangular form and share the
//! back-substitution below. They take the coefficient matrix and
//! right-hand side by value: elimination overwrites both.

pub mod gauss;
pub mod householder;

pub use gauss::solve_gaussian;
pub use householder::{solve_householder, HouseholderSolution};

use numeth_linalg::{DenseMatrix, LinalgError, Result};

use crate::PIVOT_TOL;

/// Back-substitution on an upper-triangular system `R * x = b`.
///
/// Only the diagonal and the entries above it are read.
pub(crate) fn back_substitute(r: &DenseMatrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = b.len();
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= r.get(i, j) * x[j];
        }
        let pivot = r.get(i, i);
        if pivot.abs() < PIVOT_TOL {
            return Err(LinalgError::SingularMatrix { pivot: i });
        }
        x[i] = sum / pivot;
    }
    Ok(x)
}
