//! External approximator boundary
//!
//! An [`ExternalApproximator`] hands a system to an external program (for
//! example a script wrapping a trained regression model) and reads the
//! solution back from its standard output.
//!
//! # Protocol
//!
//! The program is invoked as
//!
//! ```text
//! <program> <args..> <a_data> <a_shape> <b_data> <b_shape> <model_id>
//! ```
//!
//! where the data and shape arguments are JSON arrays (`[2.0,1.0,1.0,3.0]`,
//! `[2,2]`). It must exit with status 0 and print exactly `n`
//! whitespace-separated floating-point values. Anything else is reported as
//! [`TensorError::ExternalFailure`] carrying the captured stderr. Calls are
//! never retried. Producing or caching the model itself is the program's
//! business.

use crate::solver::Solver;
use std::process::Command;
use tensolve_core::{Tensor, TensorError, TensorResult};
use tensolve_kernels::{rhs_column, square_dim};

/// Solver backed by an external process
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalApproximator {
    program: String,
    args: Vec<String>,
    model_id: String,
}

impl ExternalApproximator {
    /// Approximator running `program args..` with an explicit model identifier
    pub fn new<P, I, A, M>(program: P, args: I, model_id: M) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
        M: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            model_id: model_id.into(),
        }
    }

    /// Approximator for `n`-unknown systems, using the model `LinSys_Approximator{n}.pt`
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_exec::ExternalApproximator;
    ///
    /// let approx = ExternalApproximator::for_dimension("python3", ["approximate.py"], 3);
    /// assert_eq!(approx.model_id(), "LinSys_Approximator3.pt");
    /// ```
    pub fn for_dimension<P, I, A>(program: P, args: I, n: usize) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self::new(program, args, Self::model_id_for(n))
    }

    /// Model identifier used for `n`-unknown systems
    pub fn model_id_for(n: usize) -> String {
        format!("LinSys_Approximator{}.pt", n)
    }

    /// Program being invoked
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Fixed leading arguments
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Model identifier passed as the final argument
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    fn encode_error(err: serde_json::Error) -> TensorError {
        TensorError::external(format!("failed to encode input: {}", err), "")
    }

    fn parse_output(stdout: &str, n: usize, stderr: &str) -> TensorResult<Vec<f64>> {
        let values = stdout
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>().map_err(|_| {
                    TensorError::external(format!("malformed value '{}' in output", tok), stderr)
                })
            })
            .collect::<TensorResult<Vec<f64>>>()?;

        if values.len() != n {
            return Err(TensorError::external(
                format!("expected {} values, got {}", n, values.len()),
                stderr,
            ));
        }
        Ok(values)
    }
}

impl Solver for ExternalApproximator {
    fn name(&self) -> &str {
        "external"
    }

    fn execute(&self, a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
        let n = square_dim(a)?;
        rhs_column(b, n)?;

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(serde_json::to_string(a.as_slice()).map_err(Self::encode_error)?)
            .arg(serde_json::to_string(a.shape()).map_err(Self::encode_error)?)
            .arg(serde_json::to_string(b.as_slice()).map_err(Self::encode_error)?)
            .arg(serde_json::to_string(b.shape()).map_err(Self::encode_error)?)
            .arg(&self.model_id);

        tracing::debug!(program = %self.program, model = %self.model_id, n, "invoking external approximator");

        let output = cmd.output().map_err(|e| {
            tracing::warn!(program = %self.program, error = %e, "failed to spawn approximator");
            TensorError::external(format!("failed to run '{}': {}", self.program, e), "")
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            tracing::warn!(program = %self.program, status = %output.status, "approximator failed");
            return Err(TensorError::external(
                format!("'{}' exited with {}", self.program, output.status),
                stderr.to_string(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let values = Self::parse_output(&stdout, n, &stderr)?;
        Tensor::from_vec(values, &[n, 1])
    }
}
