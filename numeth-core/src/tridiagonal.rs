//! Thomas-algorithm solver for near-tridiagonal systems.
//!
//! The matrix arrives in dense form with only the three bands populated
//! (boundary rows may carry just two entries, as the spline builder
//! produces them); the sweep reads the bands and ignores everything else.
//! The input is not modified.

use numeth_linalg::{DenseMatrix, LinalgError, Result};

use crate::{check_square_system, PIVOT_TOL};

/// Solve a near-tridiagonal system `A * x = b` by forward elimination of
/// the sub-diagonal and back-substitution.
///
/// Fails with [`LinalgError::SingularMatrix`] when a sweep denominator is
/// zero or near zero.
pub fn solve_tridiagonal(a: &DenseMatrix, b: &[f64]) -> Result<Vec<f64>> {
    let n = check_square_system(a, b)?;
    if n == 0 {
        return Ok(Vec::new());
    }

    // Forward sweep: normalize each row and eliminate the sub-diagonal.
    let mut upper = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    let mut denom = a.get(0, 0);
    if denom.abs() < PIVOT_TOL {
        return Err(LinalgError::SingularMatrix { pivot: 0 });
    }
    if n > 1 {
        upper[0] = a.get(0, 1) / denom;
    }
    rhs[0] = b[0] / denom;

    for i in 1..n {
        let lower = a.get(i, i - 1);
        denom = a.get(i, i) - lower * upper[i - 1];
        if denom.abs() < PIVOT_TOL {
            return Err(LinalgError::SingularMatrix { pivot: i });
        }
        if i + 1 < n {
            upper[i] = a.get(i, i + 1) / denom;
        }
        rhs[i] = (b[i] - lower * rhs[i - 1]) / denom;
    }

    // Back-substitution over the normalized bidiagonal system.
    let mut x = vec![0.0; n];
    x[n - 1] = rhs[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = rhs[i] - upper[i] * x[i + 1];
    }
    Ok(x)
}
