//! Dense tensor type definition and basic operations
//!
//! This module defines the core [`Tensor`] type and provides creation and
//! accessor methods. Row primitives and shape helpers live in sibling modules.

use crate::error::{TensorError, TensorResult};
use crate::types::Shape;
use scirs2_core::ndarray_ext::{Array, Dimension, IxDyn};

/// Dense N-dimensional tensor of `f64` values stored as one flat buffer
///
/// The buffer is row-major: a 2-D tensor of shape `[r, c]` keeps element
/// `(i, j)` at `data[i * c + j]`. Every dimension is positive and the buffer
/// length always equals the product of the shape.
///
/// # Examples
///
/// ```
/// use tensolve_core::Tensor;
///
/// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3]);
/// assert_eq!(tensor[&[1, 2]], 6.0);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTensor"))]
pub struct Tensor {
    /// Row-major element buffer
    pub(crate) data: Vec<f64>,
    /// Dimension sizes, all positive
    pub(crate) shape: Shape,
}

/// Unchecked wire form of a [`Tensor`], validated through [`Tensor::from_vec`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTensor {
    data: Vec<f64>,
    shape: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTensor> for Tensor {
    type Error = TensorError;

    fn try_from(raw: RawTensor) -> TensorResult<Self> {
        Tensor::from_vec(raw.data, &raw.shape)
    }
}

pub(crate) fn validate_shape(operation: &str, shape: &[usize]) -> TensorResult<()> {
    if shape.is_empty() {
        return Err(TensorError::invalid_argument(
            "shape",
            format!("{}: shape must have at least one dimension", operation),
        ));
    }
    if shape.contains(&0) {
        return Err(TensorError::invalid_argument(
            "shape",
            format!("{}: dimensions must be positive, got {:?}", operation, shape),
        ));
    }
    Ok(())
}

impl Tensor {
    /// Create a tensor from a flat row-major buffer and a shape
    ///
    /// # Errors
    ///
    /// - [`TensorError::InvalidArgument`] if the shape is empty or has a zero dimension
    /// - [`TensorError::ShapeMismatch`] if `data.len()` differs from the product of `shape`
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// assert!(Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).is_ok());
    /// assert!(Tensor::from_vec(vec![1.0, 2.0, 3.0], &[2, 2]).is_err());
    /// ```
    pub fn from_vec(data: Vec<f64>, shape: &[usize]) -> TensorResult<Self> {
        validate_shape("from_vec", shape)?;
        let total: usize = shape.iter().product();
        if data.len() != total {
            return Err(TensorError::shape_mismatch(
                "from_vec",
                &[total],
                &[data.len()],
                format!("Shape {:?} requires {} elements", shape, total),
            ));
        }
        Ok(Self {
            data,
            shape: shape.iter().copied().collect(),
        })
    }

    /// Create a tensor filled with `value`
    ///
    /// # Panics
    ///
    /// Panics if the shape is empty or contains a zero dimension.
    pub fn from_elem(shape: &[usize], value: f64) -> Self {
        if let Err(e) = validate_shape("from_elem", shape) {
            panic!("{}", e);
        }
        let total: usize = shape.iter().product();
        Self {
            data: vec![value; total],
            shape: shape.iter().copied().collect(),
        }
    }

    /// Create a tensor of zeros
    ///
    /// # Panics
    ///
    /// Panics if the shape is empty or contains a zero dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let zeros = Tensor::zeros(&[2, 3]);
    /// assert_eq!(zeros.len(), 6);
    /// assert!(zeros.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, 0.0)
    }

    /// Create an `n x n` identity matrix
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zeros(&[n, n]);
        for i in 0..n {
            eye.data[i * n + i] = 1.0;
        }
        eye
    }

    /// Build a matrix from equally long rows
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty, a row is empty, or the rows
    /// differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
    /// assert_eq!(a.shape(), &[2, 2]);
    /// assert_eq!(a[&[1, 0]], 1.0);
    /// ```
    pub fn from_rows(rows: &[&[f64]]) -> TensorResult<Self> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        validate_shape("from_rows", &[rows.len(), cols])?;

        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(TensorError::shape_mismatch(
                    "from_rows",
                    &[cols],
                    &[row.len()],
                    "All rows must have the same length",
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, &[rows.len(), cols])
    }

    /// Create a tensor from a scirs2-core dynamic array
    ///
    /// Elements are copied in logical (row-major) order, so any memory
    /// layout of the source array is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error for 0-dimensional or empty arrays.
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{Array, IxDyn};
    /// use tensolve_core::Tensor;
    ///
    /// let arr = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let tensor = Tensor::from_array(&arr).unwrap();
    /// assert_eq!(tensor.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn from_array(array: &Array<f64, IxDyn>) -> TensorResult<Self> {
        Self::from_vec(array.iter().copied().collect(), array.shape())
    }

    /// Copy this tensor into a scirs2-core dynamic array
    pub fn to_array(&self) -> Array<f64, IxDyn> {
        Array::from_shape_fn(IxDyn(&self.shape), |idx| {
            let mut offset = 0;
            for (axis, &i) in idx.slice().iter().enumerate() {
                offset = offset * self.shape[axis] + i;
            }
            self.data[offset]
        })
    }

    /// Get the rank (number of dimensions)
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Get the shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a validly constructed tensor
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the flat row-major buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutably borrow the flat row-major buffer
    ///
    /// The shape cannot change through this borrow.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the tensor and return its buffer
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Row and column counts of a 2-D tensor
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::ShapeMismatch`] when the tensor is not 2-D.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// assert_eq!(Tensor::zeros(&[3, 4]).matrix_dims().unwrap(), (3, 4));
    /// assert!(Tensor::zeros(&[3]).matrix_dims().is_err());
    /// ```
    pub fn matrix_dims(&self) -> TensorResult<(usize, usize)> {
        match self.shape.as_slice() {
            &[rows, cols] => Ok((rows, cols)),
            other => Err(TensorError::shape_mismatch(
                "matrix_dims",
                &[2],
                &[other.len()],
                format!("Expected a 2-D tensor, got shape {:?}", other),
            )),
        }
    }
}
