//! Power iteration for the dominant eigenpair.

use tracing::{debug, warn};

use numeth_linalg::{vector, DenseMatrix, Result};

use crate::check_square;

/// Configuration for power iteration.
///
/// Defaults to `tol = 1e-10` and `max_iter = 10_000`.
#[derive(Debug, Clone)]
pub struct PowerSolver {
    /// Residual tolerance on `||A*u - h*u||`.
    pub tol: f64,
    /// Maximum number of multiply-and-normalize steps.
    pub max_iter: usize,
}

impl Default for PowerSolver {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 10_000,
        }
    }
}

/// Dominant eigenpair estimate.
#[derive(Debug, Clone)]
pub struct PowerResult {
    /// Unit-norm eigenvector estimate.
    pub eigenvector: Vec<f64>,
    /// Rayleigh-quotient eigenvalue estimate.
    pub eigenvalue: f64,
    /// Residual `||A*u - h*u||` of the returned pair.
    pub residual: f64,
    /// Number of completed iterations.
    pub iterations: usize,
    /// Whether the residual met `tol` within `max_iter` iterations.
    pub converged: bool,
}

impl PowerSolver {
    pub fn new(tol: f64, max_iter: usize) -> Self {
        Self { tol, max_iter }
    }

    /// Estimate the dominant eigenpair of a square matrix.
    ///
    /// Seeds with the first standard basis vector, then repeats
    /// `y = A*u`, `u = y/||y||`, `h = u'*A*u` until the residual
    /// `||A*u - h*u||` meets `tol`.
    ///
    /// Spectra without a single dominant eigenvalue (for instance a
    /// `+lambda`/`-lambda` pair of equal magnitude) never settle; the
    /// `max_iter` cap then returns the last estimate with
    /// `converged: false` instead of looping forever.
    pub fn solve(&self, a: &DenseMatrix) -> Result<PowerResult> {
        let n = check_square(a)?;
        let mut u = vec![0.0; n];
        if n > 0 {
            u[0] = 1.0;
        }

        let mut au = a.mat_vec(&u);
        let mut h = vector::dot(&u, &au)?;
        let mut residual = residual_norm(&au, &u, h)?;
        let mut iterations = 0;

        while residual > self.tol {
            if iterations >= self.max_iter {
                warn!(
                    "power iteration did not converge after {} iterations (residual: {:.2e})",
                    self.max_iter, residual
                );
                return Ok(PowerResult {
                    eigenvector: u,
                    eigenvalue: h,
                    residual,
                    iterations,
                    converged: false,
                });
            }

            let y = a.mat_vec(&u);
            let norm = vector::euclidean_norm(&y);
            if norm == 0.0 {
                // u fell into the null space; (u, 0) is an exact pair.
                h = 0.0;
                residual = 0.0;
                break;
            }
            for (ui, yi) in u.iter_mut().zip(y.iter()) {
                *ui = yi / norm;
            }
            au = a.mat_vec(&u);
            h = vector::dot(&u, &au)?;
            residual = residual_norm(&au, &u, h)?;
            iterations += 1;
        }

        debug!("power iteration converged after {} iterations", iterations);
        Ok(PowerResult {
            eigenvector: u,
            eigenvalue: h,
            residual,
            iterations,
            converged: true,
        })
    }
}

/// `||au - h*u||`.
fn residual_norm(au: &[f64], u: &[f64], h: f64) -> Result<f64> {
    let hu: Vec<f64> = u.iter().map(|x| h * x).collect();
    Ok(vector::euclidean_norm(&vector::subtract(au, &hu)?))
}
