//! Dense tensor implementation and operations
//!
//! The tensor is a flat row-major `f64` buffer plus its shape. Operations are
//! grouped by concern into the sub-modules below.

// Core type definition
pub mod types;

// Operation modules
mod indexing;
mod rows;
mod shape_ops;

// Supporting modules
pub mod tensor_traits;

pub use types::Tensor;
