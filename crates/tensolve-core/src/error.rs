//! Error types shared by every tensolve crate
//!
//! Reductions, row primitives and solvers all report failures through
//! [`TensorError`], so a caller can tell a malformed input apart from a
//! system without a unique solution or a broken external solver.
//!
//! # Examples
//!
//! ```
//! use tensolve_core::{Tensor, TensorError};
//!
//! let mut m = Tensor::zeros(&[2, 3]);
//! let err = m.set_row(0, &[1.0, 2.0]).unwrap_err();
//! assert!(matches!(err, TensorError::ShapeMismatch { .. }));
//! ```

use thiserror::Error;

/// Result type for tensolve operations
pub type TensorResult<T> = Result<T, TensorError>;

/// Top-level error type for tensor, reduction and solver operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TensorError {
    /// Row/column dimension mismatch between operands
    #[error("{operation}: shape mismatch - expected {expected:?}, got {actual:?}. {context}")]
    ShapeMismatch {
        /// Operation that rejected its operands
        operation: String,
        /// Expected dimensions
        expected: Vec<usize>,
        /// Dimensions actually supplied
        actual: Vec<usize>,
        /// Extra detail about the mismatch
        context: String,
    },

    /// A zero pivot was met, the system has no unique solution
    #[error("{operation}: singular matrix, zero pivot in column {column} (no unique solution)")]
    SingularMatrix {
        /// Elimination step that found the zero pivot
        operation: String,
        /// Column whose pivot vanished
        column: usize,
    },

    /// The external solver failed or produced unusable output
    #[error("external solver failed: {message}{}", stderr_suffix(.stderr))]
    ExternalFailure {
        /// What went wrong at the call boundary
        message: String,
        /// Captured standard error of the external process
        stderr: String,
    },

    /// Index outside the addressed dimension
    #[error("{operation}: index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// Operation that received the index
        operation: String,
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument or configuration value
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" --- stderr: {}", trimmed)
    }
}

impl TensorError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
        context: impl Into<String>,
    ) -> Self {
        TensorError::ShapeMismatch {
            operation: operation.into(),
            expected: expected.to_vec(),
            actual: actual.to_vec(),
            context: context.into(),
        }
    }

    /// Create a singular matrix error for the pivot in `column`
    pub fn singular(operation: impl Into<String>, column: usize) -> Self {
        TensorError::SingularMatrix {
            operation: operation.into(),
            column,
        }
    }

    /// Create an external failure error
    pub fn external(message: impl Into<String>, stderr: impl Into<String>) -> Self {
        TensorError::ExternalFailure {
            message: message.into(),
            stderr: stderr.into(),
        }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(operation: impl Into<String>, index: usize, size: usize) -> Self {
        TensorError::IndexOutOfBounds {
            operation: operation.into(),
            index,
            size,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        TensorError::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// True when the failure means "no unique solution"
    pub fn is_singular(&self) -> bool {
        matches!(self, TensorError::SingularMatrix { .. })
    }
}
