//! Error types shared by the numeth crates.

use thiserror::Error;

/// All errors reported by the primitive layer and the solvers built on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("matrix must be square, got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("singular matrix: zero or near-zero pivot at row {pivot}")]
    SingularMatrix { pivot: usize },

    #[error("relaxation factor must lie in (0, 2), got {w}")]
    InvalidRelaxationFactor { w: f64 },

    #[error("operation is undefined on an empty vector")]
    EmptyVector,
}

/// Convenience alias used throughout the numeth crates.
pub type Result<T> = std::result::Result<T, LinalgError>;
