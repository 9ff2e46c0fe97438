//! Linear System Solving Example for tensolve
//!
//! This example demonstrates:
//! - Solving a system with both elimination strategies
//! - Singular-system detection as a typed error
//! - Batch solving with whole-batch and per-pair error reporting
//! - Stacked `[B, n, n]` batches
//!
//! Run with:
//! ```bash
//! cargo run --example solve_systems
//! ```

use anyhow::Result;
use tensolve::prelude::*;

fn main() -> Result<()> {
    tensolve::exec::tracing_support::init_tracing(Default::default())?;

    println!("=== tensolve Linear Systems Demo ===\n");

    // ========================================================================
    // 1. Single system, two strategies
    // ========================================================================
    println!("1. SINGLE SYSTEM");
    println!("{}", "=".repeat(60));

    let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]])?;
    let b = Tensor::from_vec(vec![3.0, 5.0], &[2])?;
    println!("A =\n{}", a);
    println!("b = {:?}\n", b.as_slice());

    for kind in [SolverKind::Gaussian, SolverKind::GaussJordan] {
        let x = solve(&kind, &a, &b)?;
        let residual = tensolve::kernels::residual_norm(&a, &x, &b)?;
        println!(
            "  {:<13} x = {:?}  (residual {:.2e})",
            kind.to_string(),
            x.as_slice(),
            residual
        );
    }

    // ========================================================================
    // 2. Singular systems
    // ========================================================================
    println!("\n2. SINGULAR SYSTEMS");
    println!("{}", "=".repeat(60));

    let singular = Tensor::from_rows(&[&[1.0, 2.0], &[2.0, 4.0]])?;
    match solve(&SolverKind::GaussJordan, &singular, &b) {
        Ok(x) => println!("  unexpected solution {:?}", x.as_slice()),
        Err(e) => println!("  rejected: {}", e),
    }

    // ========================================================================
    // 3. Batches
    // ========================================================================
    println!("\n3. BATCHES");
    println!("{}", "=".repeat(60));

    let runner = BatchRunner::new(ExecConfig::from_env()?);
    let pairs: Vec<(Tensor, Tensor)> = (1..=4)
        .map(|k| {
            let scale = k as f64;
            Ok((a.clone(), Tensor::from_vec(vec![3.0 * scale, 5.0 * scale], &[2])?))
        })
        .collect::<TensorResult<_>>()?;

    for (i, x) in runner.run(&GaussianElimination, &pairs)?.iter().enumerate() {
        println!("  pair {}: x = {:?}", i, x.as_slice());
    }

    let mut mixed = pairs.clone();
    mixed.insert(1, (singular.clone(), b.clone()));
    println!("\n  Whole-batch mode with one singular pair:");
    if let Err(e) = runner.run(&GaussianElimination, &mixed) {
        println!("    batch failed: {}", e);
    }

    println!("\n  Per-pair mode:");
    for (i, result) in runner.run_each(&GaussianElimination, &mixed).iter().enumerate() {
        match result {
            Ok(x) => println!("    pair {}: {:?}", i, x.as_slice()),
            Err(e) => println!("    pair {}: {}", i, e),
        }
    }

    // ========================================================================
    // 4. Stacked batches
    // ========================================================================
    println!("\n4. STACKED BATCHES");
    println!("{}", "=".repeat(60));

    let a_stack = Tensor::stack(&[a.clone(), Tensor::identity(2)])?;
    let b_stack = Tensor::stack(&[b.clone(), b.clone()])?;
    let x_stack = runner.run_stacked(&GaussJordanElimination, &a_stack, &b_stack)?;
    println!("  input shapes {:?} / {:?}", a_stack.shape(), b_stack.shape());
    println!("  solution shape {:?}", x_stack.shape());
    println!("  solutions {:?}", x_stack.as_slice());

    println!("\n=== Demo complete ===");
    Ok(())
}
