//! Whole-tensor reduction operations
//!
//! A reduction is split into per-chunk work ([`ReduceOp::apply`]) and a
//! single combine step ([`ReduceOp::combine`]). The operations here are
//! sequential and stateless; the fan-out over chunks lives in
//! `tensolve-exec`'s `ReductionEngine`.
//!
//! # Operations
//!
//! - [`SumOp`] - sum of all elements
//! - [`MeanOp`] - arithmetic mean
//! - [`SquaredDeviationOp`] - second pass of the two-pass variance
//!
//! # Chunk weighting
//!
//! Mean and variance combine per-chunk partials. With
//! [`ChunkWeighting::PerChunk`] the combine step averages the partials over
//! the number of chunks, which is only the true statistic when every chunk
//! has the same length. [`ChunkWeighting::PerElement`] weights by element
//! count and always yields the exact mean and population variance.
//!
//! # Examples
//!
//! ```
//! use tensolve_core::{Tensor, TensorError};
//! use tensolve_kernels::{chunk_bounds, ReduceOp, SumOp};
//!
//! let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0], &[5]).unwrap();
//! let partials: Vec<f64> = chunk_bounds(t.len(), 4)
//!     .into_iter()
//!     .map(|r| SumOp.apply(&t, r.start, r.end))
//!     .collect();
//! assert_eq!(partials, vec![1.0, 2.0, 3.0, 9.0]);
//! assert_eq!(SumOp.combine(&partials), 15.0);
//! ```

use std::ops::Range;
use tensolve_core::{Tensor, TensorError};

/// An operation reduced over contiguous chunks of a tensor's buffer
///
/// `apply` must accept empty ranges (`start == end`) and return the
/// operation's neutral partial for them.
pub trait ReduceOp: Send + Sync {
    /// Reduce elements `start..end` of the tensor's flat buffer
    fn apply(&self, tensor: &Tensor, start: usize, end: usize) -> f64;

    /// Combine the per-chunk partials, given in chunk order
    fn combine(&self, partials: &[f64]) -> f64;
}

/// How mean-like reductions weight their chunk partials
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChunkWeighting {
    /// Average chunk partials over the number of chunks
    ///
    /// Reproduces the historical formula. Biased whenever the element count
    /// is not a multiple of the chunk count.
    PerChunk,
    /// Weight by element count (exact mean and population variance)
    #[default]
    PerElement,
}

impl std::str::FromStr for ChunkWeighting {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chunk" | "per-chunk" | "per_chunk" => Ok(ChunkWeighting::PerChunk),
            "element" | "per-element" | "per_element" => Ok(ChunkWeighting::PerElement),
            other => Err(TensorError::invalid_argument(
                "weighting",
                format!(
                    "unknown chunk weighting '{}' (expected 'per-chunk' or 'per-element')",
                    other
                ),
            )),
        }
    }
}

/// Partition `0..len` into exactly `parts` contiguous ranges
///
/// Every range but the last spans `len / parts` elements; the last absorbs
/// the remainder and always ends at `len`. When `len < parts` the leading
/// ranges are empty.
///
/// # Panics
///
/// Panics if `parts` is zero.
///
/// # Examples
///
/// ```
/// use tensolve_kernels::chunk_bounds;
///
/// assert_eq!(chunk_bounds(10, 4), vec![0..2, 2..4, 4..6, 6..10]);
/// assert_eq!(chunk_bounds(2, 4), vec![0..0, 0..0, 0..0, 0..2]);
/// ```
pub fn chunk_bounds(len: usize, parts: usize) -> Vec<Range<usize>> {
    assert!(parts > 0, "chunk_bounds: parts must be at least 1");
    let chunk = len / parts;
    (0..parts)
        .map(|i| {
            let start = i * chunk;
            let end = if i == parts - 1 { len } else { start + chunk };
            start..end
        })
        .collect()
}

fn chunk_sum(tensor: &Tensor, start: usize, end: usize) -> f64 {
    let mut sum = 0.0;
    for &x in &tensor.as_slice()[start..end] {
        sum += x;
    }
    sum
}

/// Sum of all elements
#[derive(Clone, Copy, Debug, Default)]
pub struct SumOp;

impl ReduceOp for SumOp {
    fn apply(&self, tensor: &Tensor, start: usize, end: usize) -> f64 {
        chunk_sum(tensor, start, end)
    }

    fn combine(&self, partials: &[f64]) -> f64 {
        let mut sum = 0.0;
        for &p in partials {
            sum += p;
        }
        sum
    }
}

/// Arithmetic mean of all elements
///
/// Under [`ChunkWeighting::PerChunk`] each chunk yields its own mean (0 for an
/// empty chunk) and the combine step averages them. Under
/// [`ChunkWeighting::PerElement`] chunks yield sums and the combine step
/// divides by `len`.
#[derive(Clone, Copy, Debug)]
pub struct MeanOp {
    weighting: ChunkWeighting,
    len: usize,
}

impl MeanOp {
    /// Mean over a tensor with `len` elements
    pub fn new(weighting: ChunkWeighting, len: usize) -> Self {
        Self { weighting, len }
    }

    /// Mean configured for `tensor`
    pub fn for_tensor(weighting: ChunkWeighting, tensor: &Tensor) -> Self {
        Self::new(weighting, tensor.len())
    }
}

fn weighted_combine(weighting: ChunkWeighting, len: usize, partials: &[f64]) -> f64 {
    let total = SumOp.combine(partials);
    let denom = match weighting {
        ChunkWeighting::PerChunk => partials.len(),
        ChunkWeighting::PerElement => len,
    };
    if denom == 0 {
        0.0
    } else {
        total / denom as f64
    }
}

impl ReduceOp for MeanOp {
    fn apply(&self, tensor: &Tensor, start: usize, end: usize) -> f64 {
        let sum = chunk_sum(tensor, start, end);
        match self.weighting {
            ChunkWeighting::PerElement => sum,
            ChunkWeighting::PerChunk if start == end => 0.0,
            ChunkWeighting::PerChunk => sum / (end - start) as f64,
        }
    }

    fn combine(&self, partials: &[f64]) -> f64 {
        weighted_combine(self.weighting, self.len, partials)
    }
}

/// Sum of squared deviations from a fixed mean, combined into a variance
///
/// This is the second pass of the two-pass variance. The combine step divides
/// by the chunk count or by `len` depending on the weighting. The result is
/// the population variance (divisor `n`) under per-element weighting.
#[derive(Clone, Copy, Debug)]
pub struct SquaredDeviationOp {
    mean: f64,
    weighting: ChunkWeighting,
    len: usize,
}

impl SquaredDeviationOp {
    /// Deviation pass around `mean` over a tensor with `len` elements
    pub fn new(mean: f64, weighting: ChunkWeighting, len: usize) -> Self {
        Self {
            mean,
            weighting,
            len,
        }
    }

    /// The mean deviations are measured from
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl ReduceOp for SquaredDeviationOp {
    fn apply(&self, tensor: &Tensor, start: usize, end: usize) -> f64 {
        let mut acc = 0.0;
        for &x in &tensor.as_slice()[start..end] {
            let diff = x - self.mean;
            acc += diff * diff;
        }
        acc
    }

    fn combine(&self, partials: &[f64]) -> f64 {
        weighted_combine(self.weighting, self.len, partials)
    }
}

/// Run `op` sequentially over the same chunk layout the engine uses
///
/// Handy as a reference when checking concurrent results.
pub fn reduce_sequential<O: ReduceOp + ?Sized>(tensor: &Tensor, op: &O, parts: usize) -> f64 {
    let partials: Vec<f64> = chunk_bounds(tensor.len(), parts)
        .into_iter()
        .map(|r| op.apply(tensor, r.start, r.end))
        .collect();
    op.combine(&partials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> Tensor {
        Tensor::from_vec((1..=n).map(|x| x as f64).collect(), &[n]).unwrap()
    }

    #[test]
    fn test_chunk_bounds_even() {
        assert_eq!(chunk_bounds(8, 4), vec![0..2, 2..4, 4..6, 6..8]);
    }

    #[test]
    fn test_chunk_bounds_single_part() {
        assert_eq!(chunk_bounds(7, 1), vec![0..7]);
    }

    #[test]
    fn test_chunk_bounds_cover_everything() {
        for len in 0..40 {
            for parts in 1..9 {
                let bounds = chunk_bounds(len, parts);
                assert_eq!(bounds.len(), parts);
                assert_eq!(bounds[0].start, 0);
                assert_eq!(bounds[parts - 1].end, len);
                for w in bounds.windows(2) {
                    assert_eq!(w[0].end, w[1].start);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "parts must be at least 1")]
    fn test_chunk_bounds_zero_parts() {
        let _ = chunk_bounds(4, 0);
    }

    #[test]
    fn test_sum_empty_chunk_is_zero() {
        let t = seq(3);
        assert_eq!(SumOp.apply(&t, 1, 1), 0.0);
    }

    #[test]
    fn test_mean_per_element_exact() {
        let t = seq(10);
        let op = MeanOp::for_tensor(ChunkWeighting::PerElement, &t);
        assert_eq!(reduce_sequential(&t, &op, 4), 5.5);
    }

    #[test]
    fn test_mean_per_chunk_formula() {
        // Chunks [1,2], [3,4], [5,6], [7,8,9,10] -> means 1.5, 3.5, 5.5, 8.5
        let t = seq(10);
        let op = MeanOp::for_tensor(ChunkWeighting::PerChunk, &t);
        assert_eq!(reduce_sequential(&t, &op, 4), (1.5 + 3.5 + 5.5 + 8.5) / 4.0);
    }

    #[test]
    fn test_mean_per_chunk_with_empty_chunks() {
        // Only the last chunk holds data; empty chunks contribute 0
        let t = Tensor::from_vec(vec![2.0, 4.0], &[2]).unwrap();
        let op = MeanOp::for_tensor(ChunkWeighting::PerChunk, &t);
        assert_eq!(reduce_sequential(&t, &op, 4), 3.0 / 4.0);

        let exact = MeanOp::for_tensor(ChunkWeighting::PerElement, &t);
        assert_eq!(reduce_sequential(&t, &exact, 4), 3.0);
    }

    #[test]
    fn test_squared_deviation_population_variance() {
        let t = Tensor::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[8]).unwrap();
        let op = SquaredDeviationOp::new(5.0, ChunkWeighting::PerElement, t.len());
        assert_eq!(reduce_sequential(&t, &op, 4), 4.0);
        assert_eq!(op.mean(), 5.0);
    }

    #[test]
    fn test_weighting_from_str() {
        assert_eq!("chunk".parse::<ChunkWeighting>(), Ok(ChunkWeighting::PerChunk));
        assert_eq!(
            "Per-Element".parse::<ChunkWeighting>(),
            Ok(ChunkWeighting::PerElement)
        );
        assert!(matches!(
            "median".parse::<ChunkWeighting>(),
            Err(TensorError::InvalidArgument { arg: "weighting", .. })
        ));
    }
}
