use thiserror::Error;

/// Unified error type for `olsrs` operations.
#[derive(Debug, Error)]
pub enum OlsError {
    /// Raised when provided arrays or matrices have incompatible dimensions.
    #[error("dimension mismatch in {context}: expected {expected} but found {found}")]
    DimensionMismatch {
        /// Human-readable context describing the operation.
        context: &'static str,
        /// The required dimension, usually implied by another input.
        expected: usize,
        /// The dimension that was actually supplied.
        found: usize,
    },

    /// Raised when `X'X` (or another normal matrix) cannot be inverted.
    #[error("matrix in {context} is singular")]
    SingularMatrix { context: &'static str },

    /// Raised when a degrees-of-freedom correction needs more rows than regressors.
    #[error("at least {needed} observations are required, found {found}")]
    InsufficientObservations { needed: usize, found: usize },

    /// Raised when inputs or intermediate results are NaN or infinite.
    #[error("encountered a non-finite value during {context}")]
    NumericalError { context: &'static str },

    /// Raised when a binary outcome is neither 0 nor 1.
    #[error("binary response at index {index} must be 0 or 1, found {value}")]
    InvalidResponse { index: usize, value: f64 },

    /// Raised when the numerical optimizer aborts.
    #[error("optimization failed: {message}")]
    OptimizationFailed { message: String },
}

impl OlsError {
    /// Helper to format a [`DimensionMismatch`](OlsError::DimensionMismatch) error.
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }

    /// Helper to raise when a matrix factorization fails due to singularity.
    pub fn singular(context: &'static str) -> Self {
        Self::SingularMatrix { context }
    }

    /// Helper for wrapping solver errors from the optimization backend.
    pub fn optimization<E: std::fmt::Display>(err: E) -> Self {
        Self::OptimizationFailed {
            message: err.to_string(),
        }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, OlsError>;
