//! Core type definitions for tensolve tensors.
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`])
//! - Re-export of the dense [`Tensor`] type

use smallvec::SmallVec;

pub use crate::dense::Tensor;

/// Type alias for tensor axis index.
///
/// Zero-indexed (0 is the leading axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
///
/// # Examples
///
/// ```
/// use tensolve_core::{Rank, Tensor};
///
/// let matrix = Tensor::zeros(&[2, 3]);
/// let rank: Rank = matrix.rank();
/// assert_eq!(rank, 2);
/// ```
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Batches of matrices are rank 3, so six inline slots cover every shape the
/// solvers produce.
///
/// # Examples
///
/// ```
/// use tensolve_core::{Shape, Tensor};
///
/// let tensor = Tensor::zeros(&[2, 3, 4]);
/// let shape: Shape = tensor.shape().iter().copied().collect();
/// assert_eq!(&shape[..], &[2, 3, 4]);
/// ```
pub type Shape = SmallVec<[usize; 6]>;
