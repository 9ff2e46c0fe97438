//! # tensolve-kernels
//!
//! Sequential numeric kernels for tensolve.
//!
//! ## Overview
//!
//! - **Elimination engine** - augmentation, partial pivoting, forward
//!   elimination, back-substitution and reduction to RREF on row-major
//!   augmented matrices
//! - **Reduction operations** - the [`ReduceOp`] contract plus sum, mean and
//!   the variance deviation pass, and the chunk partitioning they run over
//!
//! Concurrency lives one level up in `tensolve-exec`: the reduction engine
//! fans [`ReduceOp`]s out over chunks and the batch runner fans solves out
//! over systems. Nothing in this crate spawns work.
//!
//! ## Quick Start
//!
//! ```rust
//! use tensolve_core::Tensor;
//! use tensolve_kernels::{augment, forward_elimination, rref, solution_column};
//!
//! let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
//! let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
//!
//! let mut ab = augment(&a, &b).unwrap();
//! forward_elimination(&mut ab).unwrap();
//! rref(&mut ab).unwrap();
//! let x = solution_column(&ab).unwrap();
//! assert!((x[&[0, 0]] - 0.8).abs() < 1e-12);
//! ```

pub mod elimination;
pub mod reductions;
pub mod utils;


// Re-exports
pub use elimination::*;
pub use reductions::*;
pub use utils::*;
