//! Fork/join execution over tensor buffers

pub mod reduction;

pub use reduction::*;
