//! Batch runner applying one solver across many independent systems
//!
//! Each `(A, b)` pair is solved on its own private copy, so pairs can run
//! concurrently. Results always come back in input order.
//!
//! - [`BatchRunner::run`] fails the whole batch if any pair fails; the
//!   reported error is the one from the lowest failing index
//! - [`BatchRunner::run_each`] reports success or failure per pair
//! - [`BatchRunner::run_stacked`] solves `[B, n, n]` / `[B, n]` stacked systems
//!   and returns a stacked `[B, n, 1]` result

use crate::config::ExecConfig;
use crate::solver::Solver;
use tensolve_core::{Tensor, TensorError, TensorResult};

#[cfg(feature = "parallel")]
use scirs2_core::parallel_ops::*;

/// Runs a [`Solver`] over a batch of systems
#[derive(Clone, Debug, Default)]
pub struct BatchRunner {
    config: ExecConfig,
}

impl BatchRunner {
    /// Create a runner
    pub fn new(config: ExecConfig) -> Self {
        Self { config }
    }

    /// Whether pairs are dispatched concurrently
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.parallel_batches
    }

    /// Solve every pair, reporting each outcome separately
    ///
    /// Entry `i` of the result belongs to `pairs[i]`.
    pub fn run_each<S>(&self, solver: &S, pairs: &[(Tensor, Tensor)]) -> Vec<TensorResult<Tensor>>
    where
        S: Solver + ?Sized,
    {
        tracing::debug!(
            solver = solver.name(),
            pairs = pairs.len(),
            parallel = self.is_parallel(),
            "running batch"
        );

        let solve_one = |index: usize, (a, b): &(Tensor, Tensor)| {
            let result = solver.execute(a, b);
            if let Err(err) = &result {
                tracing::warn!(index, error = %err, "batch entry failed");
            }
            result
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel_batches {
                return pairs
                    .par_iter()
                    .enumerate()
                    .map(|(i, pair)| solve_one(i, pair))
                    .collect();
            }
        }

        pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| solve_one(i, pair))
            .collect()
    }

    /// Solve every pair, failing the batch on the first error by index
    ///
    /// # Errors
    ///
    /// Returns the error of the lowest-indexed failing pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    /// use tensolve_exec::{BatchRunner, ExecConfig, GaussianElimination};
    ///
    /// let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
    /// let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
    /// let pairs = vec![(a.clone(), b.clone()); 3];
    ///
    /// let runner = BatchRunner::new(ExecConfig::default());
    /// let xs = runner.run(&GaussianElimination, &pairs).unwrap();
    /// assert_eq!(xs.len(), 3);
    /// assert!(xs.iter().all(|x| x == &xs[0]));
    /// ```
    pub fn run<S>(&self, solver: &S, pairs: &[(Tensor, Tensor)]) -> TensorResult<Vec<Tensor>>
    where
        S: Solver + ?Sized,
    {
        self.run_each(solver, pairs).into_iter().collect()
    }

    /// Solve systems stacked along a leading batch axis
    ///
    /// `a` has shape `[B, n, n]` and `b` has shape `[B, n]` or `[B, n, 1]`.
    /// The result has shape `[B, n, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] for inconsistent shapes, or the
    /// error of the lowest-indexed failing system.
    pub fn run_stacked<S>(&self, solver: &S, a: &Tensor, b: &Tensor) -> TensorResult<Tensor>
    where
        S: Solver + ?Sized,
    {
        let (batch, n) = match *a.shape() {
            [batch, rows, cols] if rows == cols => (batch, rows),
            [batch, rows, _] => {
                return Err(TensorError::shape_mismatch(
                    "run_stacked",
                    &[batch, rows, rows],
                    a.shape(),
                    "Stacked coefficient matrices must be square",
                ))
            }
            _ => {
                return Err(TensorError::invalid_argument(
                    "a",
                    format!("expected a rank-3 [B, n, n] tensor, got shape {:?}", a.shape()),
                ))
            }
        };

        let rhs_ok = match *b.shape() {
            [bb, bn] | [bb, bn, 1] => bb == batch && bn == n,
            _ => false,
        };
        if !rhs_ok {
            return Err(TensorError::shape_mismatch(
                "run_stacked",
                &[batch, n],
                b.shape(),
                "Stacked right-hand sides must have shape [B, n] or [B, n, 1]",
            ));
        }

        let pairs = (0..batch)
            .map(|i| Ok((a.outer_slice(i)?, b.outer_slice(i)?)))
            .collect::<TensorResult<Vec<_>>>()?;

        let solutions = self.run(solver, &pairs)?;
        Tensor::stack(&solutions)
    }
}
