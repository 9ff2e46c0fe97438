//! Reduction Engine Example for tensolve
//!
//! This example demonstrates:
//! - Sum, mean, variance and standard deviation through the fork/join engine
//! - The effect of chunk count on the partition
//! - Per-chunk versus per-element weighting of mean and variance
//! - A custom `ReduceOp`
//!
//! Run with:
//! ```bash
//! cargo run --example statistics
//! ```

use anyhow::Result;
use tensolve::kernels::chunk_bounds;
use tensolve::prelude::*;

/// Largest absolute value
struct MaxAbs;

impl ReduceOp for MaxAbs {
    fn apply(&self, tensor: &Tensor, start: usize, end: usize) -> f64 {
        tensor.as_slice()[start..end]
            .iter()
            .fold(0.0, |acc: f64, x| acc.max(x.abs()))
    }

    fn combine(&self, partials: &[f64]) -> f64 {
        partials.iter().copied().fold(0.0, f64::max)
    }
}

fn main() -> Result<()> {
    println!("=== tensolve Reduction Engine Demo ===\n");

    // Hourly readings for a week
    let readings: Vec<f64> = (0..7 * 24)
        .map(|h| 20.0 + 5.0 * (h as f64 * std::f64::consts::PI / 12.0).sin() + (h % 5) as f64 * 0.3)
        .collect();
    let t = Tensor::from_vec(readings, &[7, 24])?;

    // ========================================================================
    // 1. Basic statistics
    // ========================================================================
    println!("1. BASIC STATISTICS");
    println!("{}", "=".repeat(60));

    let engine = ReductionEngine::new(ExecConfig::from_env()?)?;
    println!("  shape {:?}, {} chunks", t.shape(), engine.parallelism());
    println!("  sum      {:.4}", engine.sum(&t));
    println!("  mean     {:.4}", engine.mean(&t));
    println!("  variance {:.4}", engine.variance(&t));
    println!("  std dev  {:.4}", engine.std_dev(&t));
    println!("  max |x|  {:.4}", engine.reduce(&t, &MaxAbs));

    // ========================================================================
    // 2. Chunk weighting
    // ========================================================================
    println!("\n2. CHUNK WEIGHTING");
    println!("{}", "=".repeat(60));

    let small = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], &[7])?;
    println!("  data {:?}", small.as_slice());
    println!("  partition over 4 chunks: {:?}", chunk_bounds(small.len(), 4));

    for weighting in [ChunkWeighting::PerElement, ChunkWeighting::PerChunk] {
        let engine = ReductionEngine::new(
            ExecConfig::new()
                .with_parallelism(4)
                .with_weighting(weighting),
        )?;
        println!(
            "  {:<10?} mean {:.4}  variance {:.4}",
            weighting,
            engine.mean(&small),
            engine.variance(&small)
        );
    }

    println!("\n=== Demo complete ===");
    Ok(())
}
