//! # tensolve - dense tensor statistics and direct linear solvers
//!
//! This is the **meta crate** that re-exports all tensolve components for convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use tensolve::prelude::*;
//!
//! let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]])?;
//! let b = Tensor::from_vec(vec![3.0, 5.0], &[2])?;
//!
//! let x = solve(&SolverKind::Gaussian, &a, &b)?;
//! assert!((x[&[0, 0]] - 0.8).abs() < 1e-12);
//! assert!((x[&[1, 0]] - 1.4).abs() < 1e-12);
//! # Ok::<(), tensolve::core::TensorError>(())
//! ```
//!
//! ## Components
//!
//! ### Tensor data model ([`core`])
//!
//! Flat row-major `f64` tensors, row primitives and the typed error taxonomy.
//!
//! ```
//! use tensolve::core::Tensor;
//!
//! let mut m = Tensor::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
//! m.swap_rows(0, 1).unwrap();
//! assert_eq!(m.get_row(0).unwrap(), vec![3.0, 4.0]);
//! ```
//!
//! ### Kernels ([`kernels`])
//!
//! Augmentation, partial pivoting, forward elimination, back-substitution,
//! RREF, and the reduction operations.
//!
//! ```
//! use tensolve::core::Tensor;
//! use tensolve::kernels::{augment, forward_elimination, back_substitution};
//!
//! let a = Tensor::from_rows(&[&[0.0, 1.0], &[1.0, 0.0]]).unwrap();
//! let b = Tensor::from_vec(vec![2.0, 3.0], &[2]).unwrap();
//! let mut ab = augment(&a, &b).unwrap();
//! forward_elimination(&mut ab).unwrap();
//! assert_eq!(back_substitution(&ab).unwrap().as_slice(), &[3.0, 2.0]);
//! ```
//!
//! ### Execution ([`exec`])
//!
//! The fork/join reduction engine, solver strategies, the batch runner and
//! the external approximator boundary.
//!
//! ```
//! use tensolve::core::Tensor;
//! use tensolve::exec::{ExecConfig, ReductionEngine};
//!
//! let engine = ReductionEngine::new(ExecConfig::default()).unwrap();
//! let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0], &[5]).unwrap();
//! assert_eq!(engine.mean(&t), 3.0);
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): run reduction chunks and batch entries on the rayon pool
//! - `serde`: `Serialize`/`Deserialize` for `Tensor`
//! - `tracing`: install a `tracing-subscriber` via `exec::tracing_support::init_tracing`
//! - `full`: Enable all features
//!
//! ## Examples
//!
//! See the `examples/` directory of this crate for runnable demonstrations.

// Re-export all components
pub use tensolve_core as core;
pub use tensolve_exec as exec;
pub use tensolve_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tensolve::prelude::*;
    //!
    //! let t = Tensor::zeros(&[3, 3]);
    //! assert_eq!(t.shape(), &[3, 3]);
    //! ```

    // Core types
    pub use crate::core::{Shape, Tensor, TensorError, TensorResult};

    // Kernels
    pub use crate::kernels::{ChunkWeighting, ReduceOp};

    // Execution
    pub use crate::exec::{
        solve, BatchRunner, ExecConfig, ExternalApproximator, GaussJordanElimination,
        GaussianElimination, ReductionEngine, Solver, SolverKind,
    };
}
