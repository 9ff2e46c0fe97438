//! # tensolve-exec
//!
//! Execution layer for tensolve.
//!
//! This crate provides:
//! - [`ReductionEngine`] - chunked fork/join reductions and the statistics
//!   built on them (sum, mean, variance, standard deviation)
//! - [`Solver`] strategies - [`GaussianElimination`], [`GaussJordanElimination`]
//!   and the [`ExternalApproximator`] process boundary, selectable through the
//!   flat [`SolverKind`] enumeration
//! - [`BatchRunner`] - one solver applied across many independent systems,
//!   concurrently and in input order
//! - [`ExecConfig`] - chunk count, chunk weighting and batch parallelism,
//!   optionally read from `TENSOLVE_*` environment variables
//!
//! The `parallel` feature (default) runs chunks and batch entries on the
//! scirs2-core rayon pool. The `tracing` feature enables
//! [`tracing_support::init_tracing`].
//!
//! # Example
//!
//! ```
//! use tensolve_core::Tensor;
//! use tensolve_exec::{solve, BatchRunner, ExecConfig, ReductionEngine, SolverKind};
//!
//! let config = ExecConfig::default();
//!
//! let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
//! let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
//! let x = solve(&SolverKind::Gaussian, &a, &b).unwrap();
//! assert!((x[&[1, 0]] - 1.4).abs() < 1e-12);
//!
//! let runner = BatchRunner::new(config.clone());
//! let xs = runner.run(&SolverKind::GaussJordan, &[(a.clone(), b.clone())]).unwrap();
//! assert_eq!(xs.len(), 1);
//!
//! let engine = ReductionEngine::new(config).unwrap();
//! assert!((engine.mean(&x) - 1.1).abs() < 1e-12);
//! ```

pub mod approximator;
pub mod batch;
pub mod config;
pub mod executor;
pub mod solver;
pub mod tracing_support;

// Re-exports
pub use approximator::ExternalApproximator;
pub use batch::BatchRunner;
pub use config::ExecConfig;
pub use executor::*;
pub use solver::{solve, GaussJordanElimination, GaussianElimination, Solver, SolverKind};
pub use tensolve_kernels::ChunkWeighting;
