//! Element access on tensors
//!
//! Checked access returns `None` for invalid indices; the `Index` impls in
//! `tensor_traits` panic like slice indexing does.

use super::types::Tensor;

impl Tensor {
    /// Flat buffer offset of a multi-dimensional index
    ///
    /// Returns `None` if the index has the wrong rank or any coordinate is
    /// outside its dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let tensor = Tensor::zeros(&[2, 3]);
    /// assert_eq!(tensor.offset_of(&[1, 2]), Some(5));
    /// assert_eq!(tensor.offset_of(&[2, 0]), None);
    /// ```
    pub fn offset_of(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.rank() {
            return None;
        }
        let mut offset = 0;
        for (&idx, &dim) in index.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
            offset = offset * dim + idx;
        }
        Some(offset)
    }

    /// Get an element by index without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(tensor.get(&[0, 1]), Some(&2.0));
    /// assert_eq!(tensor.get(&[5, 5]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&f64> {
        self.offset_of(index).map(|off| &self.data[off])
    }

    /// Get a mutable reference to an element by index without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use tensolve_core::Tensor;
    ///
    /// let mut tensor = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// if let Some(elem) = tensor.get_mut(&[0, 1]) {
    ///     *elem = 10.0;
    /// }
    /// assert_eq!(tensor[&[0, 1]], 10.0);
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut f64> {
        match self.offset_of(index) {
            Some(off) => Some(&mut self.data[off]),
            None => None,
        }
    }
}
