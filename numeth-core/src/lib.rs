//! numeth-core: solvers for dense real linear systems and eigenproblems
//!
//! Direct elimination (Gaussian, Householder/QR), stationary iterative
//! methods (point Jacobi, relaxation/SOR), eigensolvers (power iteration,
//! cyclic Jacobi rotations), and a Thomas-algorithm tridiagonal solve.
//! All algorithms build on the primitives in `numeth-linalg`.

pub mod direct;
pub mod eigen;
pub mod iterative;
pub mod tridiagonal;

pub use direct::{solve_gaussian, solve_householder, HouseholderSolution};
pub use eigen::{JacobiEigenResult, JacobiEigenSolver, PowerResult, PowerSolver};
pub use iterative::{IterativeResult, IterativeSolver};
pub use tridiagonal::solve_tridiagonal;

use numeth_linalg::{DenseMatrix, LinalgError, Result};

/// Absolute threshold below which a pivot or denominator counts as zero.
pub(crate) const PIVOT_TOL: f64 = 1e-14;

/// Square-matrix precondition; returns the dimension.
pub(crate) fn check_square(a: &DenseMatrix) -> Result<usize> {
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

/// Linear-system precondition: square matrix, matching right-hand side.
pub(crate) fn check_square_system(a: &DenseMatrix, b: &[f64]) -> Result<usize> {
    let n = check_square(a)?;
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(n)
}
