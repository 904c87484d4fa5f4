//! numeth-linalg: dense matrix and vector primitives
//!
//! The shared foundation of the numeth solver crates: a faer-backed dense
//! matrix type with the diagnostics the solvers rely on (row-sum norm,
//! diagonal-dominance test, off-diagonal measures), slice-based vector
//! primitives, and the common error type.

pub mod dense;
pub mod error;
pub mod vector;

pub use dense::DenseMatrix;
pub use error::{LinalgError, Result};
