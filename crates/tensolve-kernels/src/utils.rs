//! Input validation helpers shared by the kernels

use tensolve_core::{Tensor, TensorError, TensorResult};

/// Size `n` of a square coefficient matrix
///
/// # Errors
///
/// Returns [`TensorError::ShapeMismatch`] unless `a` is 2-D with equal
/// row and column counts.
///
/// # Examples
///
/// ```
/// use tensolve_core::Tensor;
/// use tensolve_kernels::square_dim;
///
/// assert_eq!(square_dim(&Tensor::zeros(&[3, 3])).unwrap(), 3);
/// assert!(square_dim(&Tensor::zeros(&[3, 2])).is_err());
/// ```
pub fn square_dim(a: &Tensor) -> TensorResult<usize> {
    let (rows, cols) = a.matrix_dims()?;
    if rows != cols {
        return Err(TensorError::shape_mismatch(
            "square_dim",
            &[rows, rows],
            &[rows, cols],
            "Coefficient matrix must be square",
        ));
    }
    Ok(rows)
}

/// Right-hand side as an `[n, 1]` column
///
/// Accepts a bare length-`n` vector or an `[n, 1]` matrix.
///
/// # Errors
///
/// Returns [`TensorError::ShapeMismatch`] for any other shape.
pub fn rhs_column(b: &Tensor, n: usize) -> TensorResult<Tensor> {
    let column = b.with_singleton()?;
    if column.shape() != [n, 1].as_slice() {
        return Err(TensorError::shape_mismatch(
            "rhs_column",
            &[n, 1],
            b.shape(),
            "Right-hand side must be a length-n vector or an n x 1 column",
        ));
    }
    Ok(column)
}

/// Euclidean norm of `A·x - b`
///
/// # Errors
///
/// Returns an error when the shapes are incompatible.
pub fn residual_norm(a: &Tensor, x: &Tensor, b: &Tensor) -> TensorResult<f64> {
    let n = square_dim(a)?;
    let ax = a.matvec(x)?;
    let b = rhs_column(b, n)?;
    Ok(ax
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(l, r)| (l - r) * (l - r))
        .sum::<f64>()
        .sqrt())
}
