//! Chunked fork/join reduction engine
//!
//! The tensor's flat buffer is split into `parallelism` contiguous chunks by
//! [`chunk_bounds`]. Each chunk is reduced by an independent task that writes
//! into its own pre-allocated slot, then [`ReduceOp::combine`] runs once over
//! the ordered slots. With the `parallel` feature the tasks run on the
//! scirs2-core (rayon) pool; without it they run in a loop over the same
//! partition, so both builds produce identical partials.
//!
//! A panic inside [`ReduceOp::apply`] unwinds out of the reduction call.
//!
//! # Examples
//!
//! ```
//! use tensolve_core::Tensor;
//! use tensolve_exec::{ExecConfig, ReductionEngine};
//!
//! let engine = ReductionEngine::new(ExecConfig::default()).unwrap();
//! let t = Tensor::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[8]).unwrap();
//!
//! assert_eq!(engine.sum(&t), 40.0);
//! assert_eq!(engine.mean(&t), 5.0);
//! assert_eq!(engine.variance(&t), 4.0);
//! assert_eq!(engine.std_dev(&t), 2.0);
//! ```

use crate::config::ExecConfig;
use tensolve_core::{Tensor, TensorResult};
use tensolve_kernels::{chunk_bounds, ChunkWeighting, MeanOp, ReduceOp, SquaredDeviationOp, SumOp};

#[cfg(feature = "parallel")]
use scirs2_core::parallel_ops::*;

/// Fan-out/join reducer over a fixed number of chunks
#[derive(Clone, Debug)]
pub struct ReductionEngine {
    config: ExecConfig,
}

impl Default for ReductionEngine {
    fn default() -> Self {
        Self {
            config: ExecConfig::default(),
        }
    }
}

impl ReductionEngine {
    /// Create an engine from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`tensolve_core::TensorError::InvalidArgument`] when the
    /// configuration fails [`ExecConfig::validate`].
    pub fn new(config: ExecConfig) -> TensorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Number of chunks each reduction is split into
    pub fn parallelism(&self) -> usize {
        self.config.parallelism
    }

    /// Chunk weighting used by [`mean`](Self::mean) and [`variance`](Self::variance)
    pub fn weighting(&self) -> ChunkWeighting {
        self.config.weighting
    }

    /// Per-chunk partials in chunk order
    pub fn partials<O>(&self, tensor: &Tensor, op: &O) -> Vec<f64>
    where
        O: ReduceOp + ?Sized,
    {
        let bounds = chunk_bounds(tensor.len(), self.config.parallelism);
        let mut slots = vec![0.0; bounds.len()];

        #[cfg(feature = "parallel")]
        {
            slots
                .par_iter_mut()
                .zip(bounds.par_iter())
                .enumerate()
                .for_each(|(chunk, (slot, range))| {
                    tracing::trace!(chunk, start = range.start, end = range.end, "reducing chunk");
                    *slot = op.apply(tensor, range.start, range.end);
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (chunk, (slot, range)) in slots.iter_mut().zip(bounds.iter()).enumerate() {
                tracing::trace!(chunk, start = range.start, end = range.end, "reducing chunk");
                *slot = op.apply(tensor, range.start, range.end);
            }
        }

        slots
    }

    /// Reduce `tensor` with `op`
    pub fn reduce<O>(&self, tensor: &Tensor, op: &O) -> f64
    where
        O: ReduceOp + ?Sized,
    {
        let partials = self.partials(tensor, op);
        let result = op.combine(&partials);
        tracing::debug!(
            len = tensor.len(),
            chunks = partials.len(),
            result,
            "reduction complete"
        );
        result
    }

    /// Sum of all elements
    pub fn sum(&self, tensor: &Tensor) -> f64 {
        self.reduce(tensor, &SumOp)
    }

    /// Arithmetic mean of all elements
    pub fn mean(&self, tensor: &Tensor) -> f64 {
        self.reduce(tensor, &MeanOp::for_tensor(self.config.weighting, tensor))
    }

    /// Variance, computed in two passes
    ///
    /// This is the population variance under [`ChunkWeighting::PerElement`].
    pub fn variance(&self, tensor: &Tensor) -> f64 {
        let mean = self.mean(tensor);
        let op = SquaredDeviationOp::new(mean, self.config.weighting, tensor.len());
        self.reduce(tensor, &op)
    }

    /// Square root of [`variance`](Self::variance)
    pub fn std_dev(&self, tensor: &Tensor) -> f64 {
        self.variance(tensor).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensolve_kernels::reduce_sequential;

    fn engine(parts: usize, weighting: ChunkWeighting) -> ReductionEngine {
        ReductionEngine::new(
            ExecConfig::new()
                .with_parallelism(parts)
                .with_weighting(weighting),
        )
        .unwrap()
    }

    fn seq(n: usize) -> Tensor {
        Tensor::from_vec((1..=n).map(|x| x as f64).collect(), &[n]).unwrap()
    }

    #[test]
    fn test_rejects_zero_parallelism() {
        assert!(ReductionEngine::new(ExecConfig::new().with_parallelism(0)).is_err());
    }

    #[test]
    fn test_partials_written_per_slot() {
        let e = engine(4, ChunkWeighting::PerElement);
        let t = seq(10);
        assert_eq!(e.partials(&t, &SumOp), vec![3.0, 7.0, 11.0, 34.0]);
    }

    #[test]
    fn test_matches_sequential_reference() {
        let e = engine(3, ChunkWeighting::PerChunk);
        let t = seq(17);
        let op = MeanOp::for_tensor(ChunkWeighting::PerChunk, &t);
        assert_eq!(e.reduce(&t, &op), reduce_sequential(&t, &op, 3));
    }

    #[test]
    fn test_stats_fewer_elements_than_chunks() {
        let e = engine(4, ChunkWeighting::PerElement);
        let t = Tensor::from_vec(vec![1.0, 3.0], &[2]).unwrap();
        assert_eq!(e.sum(&t), 4.0);
        assert_eq!(e.mean(&t), 2.0);
        assert_eq!(e.variance(&t), 1.0);
        assert_eq!(e.std_dev(&t), 1.0);
    }

    #[test]
    fn test_per_chunk_weighting_is_preserved() {
        let e = engine(4, ChunkWeighting::PerChunk);
        let t = seq(10);
        assert_eq!(e.mean(&t), (1.5 + 3.5 + 5.5 + 8.5) / 4.0);
    }

    #[test]
    fn test_single_chunk() {
        let e = engine(1, ChunkWeighting::PerElement);
        let t = seq(5);
        assert_eq!(e.mean(&t), 3.0);
        assert_eq!(e.variance(&t), 2.0);
    }

    #[test]
    fn test_per_chunk_variance_divides_by_chunk_count() {
        // Squared deviations of 1..=8 around 4.5 sum to 42
        let e = engine(4, ChunkWeighting::PerChunk);
        let t = seq(8);
        assert_eq!(e.mean(&t), 4.5);
        assert_eq!(e.variance(&t), 42.0 / 4.0);
    }

    struct Exploding;

    impl ReduceOp for Exploding {
        fn apply(&self, _: &Tensor, start: usize, _: usize) -> f64 {
            if start > 0 {
                panic!("chunk failed");
            }
            0.0
        }

        fn combine(&self, partials: &[f64]) -> f64 {
            partials.iter().sum()
        }
    }

    #[test]
    #[should_panic(expected = "chunk failed")]
    fn test_apply_panic_propagates() {
        let e = engine(4, ChunkWeighting::PerElement);
        e.reduce(&seq(8), &Exploding);
    }
}
