#![allow(clippy::needless_range_loop)]
//! Stationary iterative solvers: point Jacobi and relaxation (SOR).
//!
//! Both methods sweep until the max-abs difference between successive
//! iterates drops below `tol`, or until `max_iter` sweeps have run.
//! Exhausting the cap is not an error: the result carries the last
//! iterate with `converged: false`, and callers decide what to do.
//!
//! Convergence is guaranteed for diagonally dominant systems
//! ([`DenseMatrix::is_diagonally_dominant`]); outside that class the
//! sweeps may diverge.

use tracing::{debug, warn};

use numeth_linalg::{vector, DenseMatrix, LinalgError, Result};

use crate::{check_square_system, PIVOT_TOL};

/// Configuration for the stationary iterative solvers.
///
/// Defaults to `tol = 1e-10` and `max_iter = 1_000_000`.
#[derive(Debug, Clone)]
pub struct IterativeSolver {
    /// Convergence tolerance on successive iterates.
    pub tol: f64,
    /// Maximum number of sweeps.
    pub max_iter: usize,
}

impl Default for IterativeSolver {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 1_000_000,
        }
    }
}

/// Result of an iterative solve.
#[derive(Debug, Clone)]
pub struct IterativeResult {
    /// Last iterate.
    pub x: Vec<f64>,
    /// Completed sweeps, counted from 1; equals `max_iter` when the
    /// tolerance was not met.
    pub iterations: usize,
    /// Max-abs difference between the last two iterates.
    pub delta: f64,
    /// Whether the tolerance was met within `max_iter` sweeps.
    pub converged: bool,
}

impl IterativeSolver {
    pub fn new(tol: f64, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    /// Point-Jacobi iteration: every entry of the new iterate is computed
    /// from the previous iterate.
    ///
    /// Starts from `x = b`. Fails up front with
    /// [`LinalgError::SingularMatrix`] on a zero diagonal entry.
    pub fn jacobi(&self, a: &DenseMatrix, b: &[f64]) -> Result<IterativeResult> {
        let n = check_square_system(a, b)?;
        check_diagonal(a, n)?;

        let mut x1 = b.to_vec();
        let mut x2 = b.to_vec();
        let mut delta = f64::INFINITY;

        for k in 1..=self.max_iter {
            for i in 0..n {
                let mut sum = 0.0;
                for j in 0..n {
                    if j != i {
                        sum += a.get(i, j) * x1[j];
                    }
                }
                x2[i] = (b[i] - sum) / a.get(i, i);
            }

            delta = vector::max_abs_diff(&x2, &x1)?;
            if delta < self.tol {
                debug!("Jacobi iteration converged after {} sweeps", k);
                return Ok(IterativeResult {
                    x: x2,
                    iterations: k,
                    delta,
                    converged: true,
                });
            }
            x1.copy_from_slice(&x2);
        }

        warn!(
            "Jacobi iteration did not converge after {} sweeps (delta: {:.2e})",
            self.max_iter, delta
        );
        Ok(IterativeResult {
            x: x2,
            iterations: self.max_iter,
            delta,
            converged: false,
        })
    }

    /// Relaxation (SOR) iteration: a Gauss-Seidel sweep blended with the
    /// previous value by the factor `w`.
    ///
    /// Starts from `x = b` and updates in place within each sweep. `w`
    /// outside `(0, 2)` fails with
    /// [`LinalgError::InvalidRelaxationFactor`] before any iteration.
    pub fn relaxation(&self, a: &DenseMatrix, b: &[f64], w: f64) -> Result<IterativeResult> {
        if !(0.0 < w && w < 2.0) {
            return Err(LinalgError::InvalidRelaxationFactor { w });
        }
        let n = check_square_system(a, b)?;
        check_diagonal(a, n)?;

        let mut x1 = b.to_vec();
        let mut x2 = b.to_vec();
        let mut delta = f64::INFINITY;

        for k in 1..=self.max_iter {
            for i in 0..n {
                let mut sum = 0.0;
                for j in 0..n {
                    if j != i {
                        sum += a.get(i, j) * x2[j];
                    }
                }
                x2[i] = (1.0 - w) * x2[i] + (w / a.get(i, i)) * (b[i] - sum);
            }

            delta = vector::max_abs_diff(&x2, &x1)?;
            if delta < self.tol {
                debug!("relaxation (w = {}) converged after {} sweeps", w, k);
                return Ok(IterativeResult {
                    x: x2,
                    iterations: k,
                    delta,
                    converged: true,
                });
            }
            x1.copy_from_slice(&x2);
        }

        warn!(
            "relaxation (w = {}) did not converge after {} sweeps (delta: {:.2e})",
            w, self.max_iter, delta
        );
        Ok(IterativeResult {
            x: x2,
            iterations: self.max_iter,
            delta,
            converged: false,
        })
    }

    /// Gauss-Seidel iteration: relaxation with `w = 1`.
    pub fn gauss_seidel(&self, a: &DenseMatrix, b: &[f64]) -> Result<IterativeResult> {
        self.relaxation(a, b, 1.0)
    }
}

fn check_diagonal(a: &DenseMatrix, n: usize) -> Result<()> {
    for i in 0..n {
        if a.get(i, i).abs() < PIVOT_TOL {
            return Err(LinalgError::SingularMatrix { pivot: i });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dominant_system() -> (DenseMatrix, Vec<f64>) {
        let a = DenseMatrix::from_row_major(
            3,
            3,
            &[4.0, 1.0, 1.0, 1.0, 5.0, 2.0, 0.0, 1.0, 3.0],
        );
        let b = vec![6.0, 8.0, 4.0];
        (a, b)
    }

    #[test]
    fn test_jacobi_converges() {
        let (a, b) = dominant_system();
        assert!(a.is_diagonally_dominant());
        let result = IterativeSolver::default().jacobi(&a, &b).unwrap();
        assert!(result.converged);
        assert!(result.iterations < IterativeSolver::default().max_iter);
        let ax = a.mat_vec(&result.x);
        for i in 0..3 {
            assert!(
                (ax[i] - b[i]).abs() < 1e-8,
                "ax[{}]={} != b[{}]={}",
                i,
                ax[i],
                i,
                b[i]
            );
        }
    }

    #[test]
    fn test_relaxation_converges() {
        let (a, b) = dominant_system();
        let solver = IterativeSolver::default();
        for w in [0.8, 1.0, 1.2] {
            let result = solver.relaxation(&a, &b, w).unwrap();
            assert!(result.converged, "w = {} did not converge", w);
            let ax = a.mat_vec(&result.x);
            for i in 0..3 {
                assert!((ax[i] - b[i]).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn test_agrees_with_direct_solver() {
        let (a, b) = dominant_system();
        let solver = IterativeSolver::new(1e-12, 1_000_000);
        let xj = solver.jacobi(&a, &b).unwrap().x;
        let xr = solver.gauss_seidel(&a, &b).unwrap().x;
        let xd = crate::solve_gaussian(a, b).unwrap();
        for i in 0..3 {
            assert!((xj[i] - xd[i]).abs() < 1e-9);
            assert!((xr[i] - xd[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_relaxation_factor() {
        let (a, b) = dominant_system();
        let solver = IterativeSolver::default();
        for w in [0.0, 2.0, 2.5, -0.5] {
            assert_eq!(
                solver.relaxation(&a, &b, w).unwrap_err(),
                LinalgError::InvalidRelaxationFactor { w }
            );
        }
    }

    #[test]
    fn test_cap_exhaustion_is_reported() {
        let (a, b) = dominant_system();
        let solver = IterativeSolver::new(1e-16, 2);
        let result = solver.jacobi(&a, &b).unwrap();
        assert!(!result.converged);
        assert_eq!(result.iterations, 2);
        assert!(result.delta > 0.0);
    }

    #[test]
    fn test_zero_diagonal_rejected() {
        let a = DenseMatrix::from_row_major(2, 2, &[0.0, 1.0, 1.0, 2.0]);
        let solver = IterativeSolver::default();
        assert_eq!(
            solver.jacobi(&a, &[1.0, 1.0]).unwrap_err(),
            LinalgError::SingularMatrix { pivot: 0 }
        );
        assert_eq!(
            solver.relaxation(&a, &[1.0, 1.0], 1.0).unwrap_err(),
            LinalgError::SingularMatrix { pivot: 0 }
        );
    }
}
