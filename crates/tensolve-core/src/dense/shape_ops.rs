//! Shape helpers used by the solvers
//!
//! Only the handful of reshapes the solver path needs: promoting a vector to
//! a column, extracting a column, slicing and stacking along the leading axis.

use super::types::{validate_shape, Tensor};
use crate::error::{TensorError, TensorResult};

impl Tensor {
    /// Promote a 1-D vector `[n]` to a column matrix `[n, 1]`
    ///
    /// A tensor that is already 2-D is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] for rank 3 or higher.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
    /// assert_eq!(b.with_singleton().unwrap().shape(), &[2, 1]);
    /// ```
    pub fn with_singleton(&self) -> TensorResult<Tensor> {
        match self.rank() {
            1 => Tensor::from_vec(self.data.clone(), &[self.shape[0], 1]),
            2 => Ok(self.clone()),
            _ => Err(TensorError::shape_mismatch(
                "with_singleton",
                &[1],
                self.shape(),
                "Only vectors and matrices can be promoted to a column",
            )),
        }
    }

    /// Extract column `col` of a matrix as an `[rows, 1]` tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let m = Tensor::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]).unwrap();
    /// let last = m.column(2).unwrap();
    /// assert_eq!(last.shape(), &[2, 1]);
    /// assert_eq!(last.as_slice(), &[3.0, 6.0]);
    /// ```
    pub fn column(&self, col: usize) -> TensorResult<Tensor> {
        let (rows, cols) = self.matrix_dims()?;
        if col >= cols {
            return Err(TensorError::index_out_of_bounds("column", col, cols));
        }
        let values = (0..rows).map(|i| self.data[i * cols + col]).collect();
        Tensor::from_vec(values, &[rows, 1])
    }

    /// Copy the `index`-th block along the leading axis
    ///
    /// For a `[B, n, n]` batch this yields the `[n, n]` matrix of item `index`.
    ///
    /// # Errors
    ///
    /// - [`TensorError::ShapeMismatch`] if the tensor has rank below 2
    /// - [`TensorError::IndexOutOfBounds`] if `index >= shape[0]`
    pub fn outer_slice(&self, index: usize) -> TensorResult<Tensor> {
        if self.rank() < 2 {
            return Err(TensorError::shape_mismatch(
                "outer_slice",
                &[2],
                &[self.rank()],
                "Slicing along the leading axis needs rank >= 2",
            ));
        }
        let outer = self.shape[0];
        if index >= outer {
            return Err(TensorError::index_out_of_bounds("outer_slice", index, outer));
        }
        let inner: usize = self.shape[1..].iter().product();
        Tensor::from_vec(
            self.data[index * inner..(index + 1) * inner].to_vec(),
            &self.shape[1..],
        )
    }

    /// Stack equally shaped tensors along a new leading axis
    ///
    /// # Errors
    ///
    /// Returns an error if `items` is empty or the shapes differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let x = Tensor::from_vec(vec![1.0, 2.0], &[2, 1]).unwrap();
    /// let y = Tensor::from_vec(vec![3.0, 4.0], &[2, 1]).unwrap();
    /// let stacked = Tensor::stack(&[x, y]).unwrap();
    /// assert_eq!(stacked.shape(), &[2, 2, 1]);
    /// assert_eq!(stacked.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn stack(items: &[Tensor]) -> TensorResult<Tensor> {
        let first = items
            .first()
            .ok_or_else(|| TensorError::invalid_argument("items", "cannot stack zero tensors"))?;

        let mut shape = Vec::with_capacity(first.rank() + 1);
        shape.push(items.len());
        shape.extend_from_slice(first.shape());
        validate_shape("stack", &shape)?;

        let mut data = Vec::with_capacity(items.len() * first.len());
        for item in items {
            if item.shape() != first.shape() {
                return Err(TensorError::shape_mismatch(
                    "stack",
                    first.shape(),
                    item.shape(),
                    "All stacked tensors must share one shape",
                ));
            }
            data.extend_from_slice(&item.data);
        }
        Tensor::from_vec(data, &shape)
    }

    /// Matrix-vector product `A·x`
    ///
    /// `x` may be `[n]` or `[n, 1]`; the result is `[rows, 1]`. Used to check
    /// residuals of computed solutions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
    /// let x = Tensor::from_vec(vec![1.0, 1.0], &[2]).unwrap();
    /// assert_eq!(a.matvec(&x).unwrap().as_slice(), &[3.0, 4.0]);
    /// ```
    pub fn matvec(&self, x: &Tensor) -> TensorResult<Tensor> {
        let (rows, cols) = self.matrix_dims()?;
        let column = x.with_singleton()?;
        if column.shape() != [cols, 1].as_slice() {
            return Err(TensorError::shape_mismatch(
                "matvec",
                &[cols, 1],
                column.shape(),
                "Vector length must equal the matrix column count",
            ));
        }
        let values = (0..rows)
            .map(|i| {
                self.data[i * cols..(i + 1) * cols]
                    .iter()
                    .zip(column.data.iter())
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect();
        Tensor::from_vec(values, &[rows, 1])
    }
}
