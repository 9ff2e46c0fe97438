//! Solver strategies for square linear systems
//!
//! Every strategy implements [`Solver`]: it takes a square `A` and a
//! right-hand side `b` (length-`n` vector or `[n, 1]` column) and returns the
//! `[n, 1]` solution. Caller tensors are never mutated; each solve works on a
//! private augmented copy.
//!
//! [`SolverKind`] is the flat enumeration of the available strategies and is
//! what configuration code should hold.

use crate::approximator::ExternalApproximator;
use std::fmt;
use std::str::FromStr;
use tensolve_core::{Tensor, TensorError, TensorResult};
use tensolve_kernels::{augment, back_substitution, forward_elimination, rref, solution_column};

/// A strategy solving `A·x = b`
pub trait Solver: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Solve the system, returning `x` as an `[n, 1]` tensor
    ///
    /// # Errors
    ///
    /// - [`TensorError::ShapeMismatch`] if `A` is not square or `b` does not match
    /// - [`TensorError::SingularMatrix`] if the system has no unique solution
    /// - [`TensorError::ExternalFailure`] for strategies backed by an external process
    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor>;
}

impl<S: Solver + ?Sized> Solver for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
        (**self).execute(a, b)
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
        (**self).execute(a, b)
    }
}

/// Forward elimination with partial pivoting, then back-substitution
///
/// # Examples
///
/// ```
/// use tensolve_core::Tensor;
/// use tensolve_exec::{GaussianElimination, Solver};
///
/// let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
/// let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
///
/// let x = GaussianElimination.execute(&a, &b).unwrap();
/// assert_eq!(x.shape(), &[2, 1]);
/// assert!((x[&[0, 0]] - 0.8).abs() < 1e-12);
/// assert!((x[&[1, 0]] - 1.4).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GaussianElimination;

impl Solver for GaussianElimination {
    fn name(&self) -> &str {
        "gaussian"
    }

    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
        let mut ab = augment(a, b)?;
        forward_elimination(&mut ab)?;
        back_substitution(&ab)
    }
}

/// Forward elimination, then reduction to RREF
///
/// The solution is read straight from the augmented column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GaussJordanElimination;

impl Solver for GaussJordanElimination {
    fn name(&self) -> &str {
        "gauss-jordan"
    }

    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
        let mut ab = augment(a, b)?;
        forward_elimination(&mut ab)?;
        rref(&mut ab)?;
        solution_column(&ab)
    }
}

/// The available solver strategies
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SolverKind {
    /// [`GaussianElimination`]
    #[default]
    Gaussian,
    /// [`GaussJordanElimination`]
    GaussJordan,
    /// An [`ExternalApproximator`] process
    External(ExternalApproximator),
}

impl Solver for SolverKind {
    fn name(&self) -> &str {
        match self {
            SolverKind::Gaussian => GaussianElimination.name(),
            SolverKind::GaussJordan => GaussJordanElimination.name(),
            SolverKind::External(approx) => approx.name(),
        }
    }

    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
        match self {
            SolverKind::Gaussian => GaussianElimination.execute(a, b),
            SolverKind::GaussJordan => GaussJordanElimination.execute(a, b),
            SolverKind::External(approx) => approx.execute(a, b),
        }
    }
}

impl From<ExternalApproximator> for SolverKind {
    fn from(approx: ExternalApproximator) -> Self {
        SolverKind::External(approx)
    }
}

impl FromStr for SolverKind {
    type Err = TensorError;

    /// Parse an elimination strategy by name
    ///
    /// External approximators carry a program and model, so they are built
    /// with [`ExternalApproximator`] instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gaussian" | "gauss" | "ge" => Ok(SolverKind::Gaussian),
            "gauss-jordan" | "gauss_jordan" | "gaussjordan" | "gje" => {
                Ok(SolverKind::GaussJordan)
            }
            other => Err(TensorError::invalid_argument(
                "solver",
                format!(
                    "unknown solver '{}' (expected 'gaussian' or 'gauss-jordan')",
                    other
                ),
            )),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Solve `A·x = b` with the given strategy
///
/// # Examples
///
/// ```
/// use tensolve_core::Tensor;
/// use tensolve_exec::{solve, SolverKind};
///
/// let a = Tensor::from_rows(&[&[4.0, -2.0], &[1.0, 1.0]]).unwrap();
/// let b = Tensor::from_vec(vec![2.0, 3.0], &[2]).unwrap();
///
/// let kind: SolverKind = "gauss-jordan".parse().unwrap();
/// let x = solve(&kind, &a, &b).unwrap();
/// assert!((x[&[0, 0]] - 4.0 / 3.0).abs() < 1e-12);
/// assert!((x[&[1, 0]] - 5.0 / 3.0).abs() < 1e-12);
/// ```
pub fn solve(kind: &SolverKind, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
    tracing::debug!(solver = kind.name(), shape = ?a.shape(), "solving linear system");
    let result = kind.execute(a, b);
    if let Err(err) = &result {
        tracing::warn!(solver = kind.name(), error = %err, "solve failed");
    }
    result
}
