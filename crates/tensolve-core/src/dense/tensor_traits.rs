//! # Tensor - Trait Implementations
//!
//! - `Index` / `IndexMut` with multi-dimensional indices
//! - `Debug`
//! - `Display` (matrices print one row per line)

use super::types::Tensor;
use std::fmt;

impl std::ops::Index<&[usize]> for Tensor {
    type Output = f64;
    fn index(&self, index: &[usize]) -> &Self::Output {
        match self.offset_of(index) {
            Some(off) => &self.data[off],
            None => panic!(
                "index {:?} out of bounds for tensor of shape {:?}",
                index,
                self.shape()
            ),
        }
    }
}

impl std::ops::IndexMut<&[usize]> for Tensor {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        match self.offset_of(index) {
            Some(off) => &mut self.data[off],
            None => panic!(
                "index {:?} out of bounds for tensor of shape {:?}",
                index,
                self.shape()
            ),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("rank", &self.rank())
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matrix_dims() {
            Ok((_, cols)) => {
                for (i, row) in self.data.chunks(cols).enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:?}", row)?;
                }
                Ok(())
            }
            Err(_) => write!(f, "{:?} {:?}", self.shape(), self.data),
        }
    }
}
