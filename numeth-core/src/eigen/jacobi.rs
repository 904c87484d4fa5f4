#![allow(clippy::needless_range_loop)]
//! Cyclic Jacobi rotations for the full symmetric eigenproblem.
//!
//! The classical largest-off-diagonal-pivot variant: each step zeroes the
//! largest-magnitude off-diagonal pair with a plane rotation and
//! accumulates the rotation into the eigenvector matrix, driving the
//! off-diagonal energy of the working copy toward zero.

use tracing::{debug, warn};

use numeth_linalg::{vector, DenseMatrix, Result};

use crate::check_square;

/// Configuration for the cyclic Jacobi eigensolver.
///
/// Defaults to `tol = 1e-10` and `max_rotations = 10_000`.
#[derive(Debug, Clone)]
pub struct JacobiEigenSolver {
    /// Off-diagonal-energy tolerance.
    pub tol: f64,
    /// Maximum number of rotations.
    pub max_rotations: usize,
}

impl Default for JacobiEigenSolver {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_rotations: 10_000,
        }
    }
}

/// Full eigenpair bundle of a symmetric matrix.
#[derive(Debug, Clone)]
pub struct JacobiEigenResult {
    /// Unit-norm eigenvectors, one per column, matching `eigenvalues`
    /// by index.
    pub eigenvectors: DenseMatrix,
    /// Eigenvalues in diagonal-slot order, not sorted by magnitude.
    pub eigenvalues: Vec<f64>,
    /// Residual `||A*x_i - lambda_i*x_i||` per eigenpair, measured
    /// against the input matrix.
    pub residuals: Vec<f64>,
    /// Number of rotations applied.
    pub rotations: usize,
    /// Whether the off-diagonal energy met `tol` within `max_rotations`.
    pub converged: bool,
}

impl JacobiEigenSolver {
    pub fn new(tol: f64, max_rotations: usize) -> Self {
        Self { tol, max_rotations }
    }

    /// Compute all eigenpairs of a symmetric matrix.
    ///
    /// Works on an internal copy; the caller's matrix is left untouched.
    /// Symmetry is assumed, not checked — on a non-symmetric input the
    /// rotations are meaningless.
    pub fn solve(&self, a: &DenseMatrix) -> Result<JacobiEigenResult> {
        let n = check_square(a)?;
        let mut at = a.clone();
        let mut q = DenseMatrix::identity(n);
        let mut rotations = 0;
        let mut converged = true;

        while at.off_diagonal_energy() > self.tol {
            if rotations >= self.max_rotations {
                warn!(
                    "Jacobi rotations did not converge after {} rotations (off-diagonal energy: {:.2e})",
                    rotations,
                    at.off_diagonal_energy()
                );
                converged = false;
                break;
            }
            let Some((m, e)) = at.max_off_diagonal() else {
                break;
            };
            rotate(&mut at, &mut q, m, e, n);
            rotations += 1;
        }
        if converged {
            debug!("Jacobi rotations converged after {} rotations", rotations);
        }

        let eigenvalues = at.diag();
        let mut residuals = Vec::with_capacity(n);
        for i in 0..n {
            let x = q.col(i);
            let ax = a.mat_vec(&x);
            let lx: Vec<f64> = x.iter().map(|v| eigenvalues[i] * v).collect();
            residuals.push(vector::euclidean_norm(&vector::subtract(&ax, &lx)?));
        }

        Ok(JacobiEigenResult {
            eigenvectors: q,
            eigenvalues,
            residuals,
            rotations,
            converged,
        })
    }
}

/// Zero the `(m, e)` pair of `at` with a plane rotation and accumulate
/// the rotation into columns `m`, `e` of `q`.
fn rotate(at: &mut DenseMatrix, q: &mut DenseMatrix, m: usize, e: usize, n: usize) {
    let amm = at.get(m, m);
    let aee = at.get(e, e);
    let ame = at.get(m, e);

    let z = (aee - amm) / (2.0 * ame);
    let t = if z == 0.0 {
        1.0
    } else {
        z.signum() / (z.abs() + (z * z + 1.0).sqrt())
    };
    let c = 1.0 / (1.0 + t * t).sqrt();
    let s = t * c;
    let tau = s / (1.0 + c);

    at.set(m, m, amm - t * ame);
    at.set(e, e, aee + t * ame);
    at.set(m, e, 0.0);
    at.set(e, m, 0.0);

    for i in 0..n {
        if i != m && i != e {
            let aim = at.get(i, m);
            let aie = at.get(i, e);
            let new_im = aim - s * (aie + tau * aim);
            let new_ie = aie + s * (aim - tau * aie);
            at.set(i, m, new_im);
            at.set(m, i, new_im);
            at.set(i, e, new_ie);
            at.set(e, i, new_ie);
        }
    }

    for i in 0..n {
        let qim = q.get(i, m);
        let qie = q.get(i, e);
        q.set(i, m, c * qim - s * qie);
        q.set(i, e, s * qim + c * qie);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numeth_linalg::LinalgError;

    fn sorted(mut v: Vec<f64>) -> Vec<f64> {
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        v
    }

    #[test]
    fn test_2x2_known_eigenvalues() {
        let a = DenseMatrix::from_row_major(2, 2, &[3.0, 1.0, 1.0, 3.0]);
        let result = JacobiEigenSolver::default().solve(&a).unwrap();
        assert!(result.converged);
        let evals = sorted(result.eigenvalues.clone());
        assert!((evals[0] - 2.0).abs() < 1e-8);
        assert!((evals[1] - 4.0).abs() < 1e-8);
        for r in &result.residuals {
            assert!(*r < 1e-5, "residual {} too large", r);
        }
    }

    #[test]
    fn test_3x3_known_eigenvalues() {
        // Eigenvalues 2 - sqrt(2), 2, 2 + sqrt(2).
        let a = DenseMatrix::from_row_major(
            3,
            3,
            &[2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0],
        );
        let result = JacobiEigenSolver::default().solve(&a).unwrap();
        assert!(result.converged);
        let evals = sorted(result.eigenvalues.clone());
        let expected = [2.0 - 2.0_f64.sqrt(), 2.0, 2.0 + 2.0_f64.sqrt()];
        for (got, want) in evals.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-8, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_eigenvectors_orthonormal() {
        let a = DenseMatrix::from_row_major(
            3,
            3,
            &[4.0, 1.0, -2.0, 1.0, 2.0, 0.0, -2.0, 0.0, 3.0],
        );
        let result = JacobiEigenSolver::default().solve(&a).unwrap();
        let q = &result.eigenvectors;
        let qtq = q.transpose().mat_mul(q).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (qtq.get(i, j) - expected).abs() < 1e-8,
                    "Q'Q[{},{}] = {}",
                    i,
                    j,
                    qtq.get(i, j)
                );
            }
        }
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let a = DenseMatrix::from_row_major(
            3,
            3,
            &[4.0, 1.0, -2.0, 1.0, 2.0, 0.0, -2.0, 0.0, 3.0],
        );
        let result = JacobiEigenSolver::default().solve(&a).unwrap();
        let q = &result.eigenvectors;
        let lambda = DenseMatrix::from_diag(&result.eigenvalues);
        let back = q
            .mat_mul(&lambda)
            .unwrap()
            .mat_mul(&q.transpose())
            .unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (back.get(i, j) - a.get(i, j)).abs() < 1e-7,
                    "reconstructed[{},{}] = {}, A = {}",
                    i,
                    j,
                    back.get(i, j),
                    a.get(i, j)
                );
            }
        }
    }

    #[test]
    fn test_input_left_untouched() {
        let a = DenseMatrix::from_row_major(2, 2, &[3.0, 1.0, 1.0, 3.0]);
        let before = (a.get(0, 0), a.get(0, 1), a.get(1, 0), a.get(1, 1));
        let _ = JacobiEigenSolver::default().solve(&a).unwrap();
        assert_eq!(
            before,
            (a.get(0, 0), a.get(0, 1), a.get(1, 0), a.get(1, 1))
        );
    }

    #[test]
    fn test_diagonal_input_needs_no_rotations() {
        let a = DenseMatrix::from_diag(&[5.0, -1.0, 2.0]);
        let result = JacobiEigenSolver::default().solve(&a).unwrap();
        assert!(result.converged);
        assert_eq!(result.rotations, 0);
        assert_eq!(result.eigenvalues, vec![5.0, -1.0, 2.0]);
    }

    #[test]
    fn test_rotation_cap_is_reported() {
        let a = DenseMatrix::from_row_major(2, 2, &[3.0, 1.0, 1.0, 3.0]);
        let result = JacobiEigenSolver::new(1e-10, 0).solve(&a).unwrap();
        assert!(!result.converged);
        assert_eq!(result.rotations, 0);
    }

    #[test]
    fn test_not_square() {
        let a = DenseMatrix::zeros(3, 2);
        assert_eq!(
            JacobiEigenSolver::default().solve(&a).unwrap_err(),
            LinalgError::NotSquare { nrows: 3, ncols: 2 }
        );
    }
}
