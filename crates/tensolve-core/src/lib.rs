//! # tensolve-core
//!
//! Core tensor type, error taxonomy and row primitives for tensolve.
//!
//! - **Dense tensor** ([`Tensor`]): flat row-major `f64` buffer plus a shape
//! - **Errors** ([`TensorError`]): shape mismatch, singular matrix, external
//!   solver failure, plus index/argument misuse
//! - **Row primitives**: `get_row`, `set_row`, `swap_rows` on matrices, the
//!   building blocks of the elimination engine in `tensolve-kernels`
//!
//! ## Quick Start
//!
//! ```
//! use tensolve_core::Tensor;
//!
//! let mut m = Tensor::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
//! m.swap_rows(0, 1).unwrap();
//! assert_eq!(m.get_row(0).unwrap(), vec![3.0, 4.0]);
//!
//! // Vectors promote to single-column matrices
//! let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
//! assert_eq!(b.with_singleton().unwrap().shape(), &[2, 1]);
//! ```
//!
//! ## Memory Layout
//!
//! Tensors are always C-contiguous (row-major). Element `(i, j)` of an
//! `[r, c]` matrix sits at `as_slice()[i * c + j]`.
//!
//! ## Error Handling
//!
//! Fallible operations return [`TensorResult`]. Constructors that take a shape
//! literal (`zeros`, `from_elem`, `identity`) panic on zero dimensions, the
//! same way `vec!` would on an impossible allocation.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Tensor`]

pub mod dense;
pub mod error;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use error::{TensorError, TensorResult};
pub use types::{Axis, Rank, Shape, Tensor};
