//! Row primitives on row-major matrices
//!
//! These are the only mutations the elimination engine performs besides
//! in-place arithmetic: copy a row out, overwrite a row, exchange two rows.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};

impl Tensor {
    fn check_row(&self, operation: &str, row: usize) -> TensorResult<(usize, usize)> {
        let (rows, cols) = self.matrix_dims()?;
        if row >= rows {
            return Err(TensorError::index_out_of_bounds(operation, row, rows));
        }
        Ok((rows, cols))
    }

    /// Copy row `row` of a matrix into a new buffer
    ///
    /// # Errors
    ///
    /// - [`TensorError::ShapeMismatch`] if the tensor is not 2-D
    /// - [`TensorError::IndexOutOfBounds`] if `row` is not a valid row
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let m = Tensor::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get_row(1).unwrap(), vec![3.0, 4.0]);
    /// ```
    pub fn get_row(&self, row: usize) -> TensorResult<Vec<f64>> {
        let (_, cols) = self.check_row("get_row", row)?;
        Ok(self.data[row * cols..(row + 1) * cols].to_vec())
    }

    /// Overwrite row `row` element-wise with `values`
    ///
    /// # Errors
    ///
    /// - [`TensorError::ShapeMismatch`] if the tensor is not 2-D or
    ///   `values.len()` differs from the column count
    /// - [`TensorError::IndexOutOfBounds`] if `row` is not a valid row
    pub fn set_row(&mut self, row: usize, values: &[f64]) -> TensorResult<()> {
        let (_, cols) = self.check_row("set_row", row)?;
        if values.len() != cols {
            return Err(TensorError::shape_mismatch(
                "set_row",
                &[cols],
                &[values.len()],
                "Row length must equal the column count",
            ));
        }
        self.data[row * cols..(row + 1) * cols].copy_from_slice(values);
        Ok(())
    }

    /// Exchange rows `i` and `j`
    ///
    /// Values move bit-for-bit, so swapping the same pair twice restores the
    /// original matrix exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let mut m = Tensor::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]]).unwrap();
    /// m.swap_rows(0, 1).unwrap();
    /// assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn swap_rows(&mut self, i: usize, j: usize) -> TensorResult<()> {
        let (_, cols) = self.check_row("swap_rows", i)?;
        self.check_row("swap_rows", j)?;
        if i == j {
            return Ok(());
        }

        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
        Ok(())
    }
}
