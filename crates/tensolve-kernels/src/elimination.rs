//! Elimination engine for dense linear systems
//!
//! All routines work on an augmented matrix `[A | b]` of shape `[n, n + 1]`
//! stored row-major in a [`Tensor`]. The buffer is mutated in place.
//!
//! # Operations
//!
//! - [`augment`] - build `[A | b]` from a square `A` and a right-hand side
//! - [`find_pivot`] - partial pivoting, row with the largest `|Ab[i, k]|`
//! - [`forward_elimination`] - reduce the first `n` columns to upper-triangular
//! - [`back_substitution`] - solve the triangular system bottom-up
//! - [`rref`] - continue to reduced row echelon form
//! - [`solution_column`] - read the solution out of an RREF matrix
//!
//! Every pivot step depends on the fully updated matrix of the previous one,
//! so a single elimination always runs sequentially.
//!
//! # Examples
//!
//! ```
//! use tensolve_core::Tensor;
//! use tensolve_kernels::{augment, back_substitution, forward_elimination};
//!
//! let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
//! let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
//!
//! let mut ab = augment(&a, &b).unwrap();
//! forward_elimination(&mut ab).unwrap();
//! let x = back_substitution(&ab).unwrap();
//!
//! assert!((x[&[0, 0]] - 0.8).abs() < 1e-12);
//! assert!((x[&[1, 0]] - 1.4).abs() < 1e-12);
//! ```

use crate::utils::{rhs_column, square_dim};
use tensolve_core::{Tensor, TensorError, TensorResult};

/// Dimensions `(n, n + 1)` of an augmented matrix
fn augmented_dims(ab: &Tensor, operation: &str) -> TensorResult<(usize, usize)> {
    let (rows, cols) = ab.matrix_dims()?;
    if cols != rows + 1 {
        return Err(TensorError::shape_mismatch(
            operation,
            &[rows, rows + 1],
            &[rows, cols],
            "Augmented matrix must have exactly one more column than rows",
        ));
    }
    Ok((rows, cols))
}

/// Build the augmented matrix `[A | b]`
///
/// `b` may be a length-`n` vector, which is promoted to an `[n, 1]` column
/// first. The result is a fresh `[n, n + 1]` tensor; neither input is touched.
///
/// # Errors
///
/// Returns [`TensorError::ShapeMismatch`] if `A` is not square or `b` does not
/// have `n` rows and a single column.
pub fn augment(a: &Tensor, b: &Tensor) -> TensorResult<Tensor> {
    let n = square_dim(a)?;
    let b = rhs_column(b, n)?;

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut data = Vec::with_capacity(n * (n + 1));
    for i in 0..n {
        data.extend_from_slice(&a_data[i * n..(i + 1) * n]);
        data.push(b_data[i]);
    }
    Tensor::from_vec(data, &[n, n + 1])
}

/// Index of the pivot row for column `k`
///
/// Scans rows `k..n` and returns the row with the strictly largest absolute
/// value in column `k`. Ties keep the lowest index. If every candidate is zero
/// the result is `k`.
///
/// # Panics
///
/// Panics if `k` is not a valid row index or `ab` is not 2-D.
pub fn find_pivot(ab: &Tensor, k: usize) -> usize {
    let shape = ab.shape();
    assert!(
        shape.len() == 2 && k < shape[0],
        "find_pivot: column {} out of range for shape {:?}",
        k,
        shape
    );
    let (rows, cols) = (shape[0], shape[1]);
    let data = ab.as_slice();

    let mut i_max = k;
    let mut max_val = 0.0;
    for i in k..rows {
        let candidate = data[i * cols + k].abs();
        if candidate > max_val {
            i_max = i;
            max_val = candidate;
        }
    }
    i_max
}

/// Forward elimination with partial pivoting, in place
///
/// For each column `k` the pivot row is swapped into position `k` and all
/// entries below the diagonal are eliminated, including the augmented
/// column. On success the first `n` columns are upper-triangular with a
/// non-zero diagonal.
///
/// # Errors
///
/// - [`TensorError::ShapeMismatch`] if `ab` is not `[n, n + 1]`
/// - [`TensorError::SingularMatrix`] if a pivot column has no non-zero entry
///   on or below the diagonal, or the last diagonal entry ends up zero
///
/// On error the matrix is left partially reduced.
pub fn forward_elimination(ab: &mut Tensor) -> TensorResult<()> {
    let (n, cols) = augmented_dims(ab, "forward_elimination")?;

    for k in 0..n.saturating_sub(1) {
        let i_max = find_pivot(ab, k);
        if ab.as_slice()[i_max * cols + k] == 0.0 {
            tracing::debug!(column = k, "zero pivot during forward elimination");
            return Err(TensorError::singular("forward_elimination", k));
        }
        ab.swap_rows(k, i_max)?;

        let data = ab.as_mut_slice();
        let (upper, lower) = data.split_at_mut((k + 1) * cols);
        let pivot_row = &upper[k * cols..];
        let pivot = pivot_row[k];
        for row in lower.chunks_exact_mut(cols) {
            let f = row[k] / pivot;
            for j in k..cols {
                row[j] -= pivot_row[j] * f;
            }
        }
    }

    // The loop never pivots on the last column; a zero left there means the
    // system is singular even though every earlier pivot was fine.
    let last = n - 1;
    if ab.as_slice()[last * cols + last] == 0.0 {
        tracing::debug!(column = last, "zero final diagonal after forward elimination");
        return Err(TensorError::singular("forward_elimination", last));
    }
    Ok(())
}

/// Solve an upper-triangular augmented system from the last row up
///
/// Expects the output of a successful [`forward_elimination`]. Returns an
/// `[n, 1]` tensor.
///
/// # Errors
///
/// Returns [`TensorError::ShapeMismatch`] if `ab` is not `[n, n + 1]`.
pub fn back_substitution(ab: &Tensor) -> TensorResult<Tensor> {
    let (n, cols) = augmented_dims(ab, "back_substitution")?;
    let data = ab.as_slice();

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let row = &data[i * cols..(i + 1) * cols];
        let sum: f64 = (i + 1..n).map(|j| row[j] * x[j]).sum();
        x[i] = (row[n] - sum) / row[i];
    }
    Tensor::from_vec(x, &[n, 1])
}

/// Reduce an upper-triangular augmented matrix to reduced row echelon form
///
/// Walks the diagonal from the bottom up: each row is scaled so its pivot is
/// 1 and the pivot column is cleared in every row above. Afterwards column
/// `n` holds the solution.
///
/// # Errors
///
/// - [`TensorError::ShapeMismatch`] if `ab` is not `[n, n + 1]`
/// - [`TensorError::SingularMatrix`] if a diagonal entry is zero
pub fn rref(ab: &mut Tensor) -> TensorResult<()> {
    let (n, cols) = augmented_dims(ab, "rref")?;
    let data = ab.as_mut_slice();

    for k in (0..n).rev() {
        let (upper, rest) = data.split_at_mut(k * cols);
        let pivot_row = &mut rest[..cols];

        let f = pivot_row[k];
        if f == 0.0 {
            tracing::debug!(column = k, "zero diagonal during RREF");
            return Err(TensorError::singular("rref", k));
        }
        for value in &mut pivot_row[k..] {
            *value /= f;
        }

        for row in upper.chunks_exact_mut(cols) {
            let factor = row[k];
            for j in k..cols {
                row[j] -= pivot_row[j] * factor;
            }
        }
    }
    Ok(())
}

/// Extract the augmented column of an RREF matrix as the `[n, 1]` solution
///
/// # Errors
///
/// Returns [`TensorError::ShapeMismatch`] if `ab` is not `[n, n + 1]`.
pub fn solution_column(ab: &Tensor) -> TensorResult<Tensor> {
    let (n, _) = augmented_dims(ab, "solution_column")?;
    ab.column(n)
}
