//! End-to-end tests for tensolve-exec
//!
//! Solver strategies, batching and statistics through the public API.

use proptest::prelude::*;
use tensolve_core::{Tensor, TensorError};
use tensolve_exec::*;
use tensolve_kernels::residual_norm;

fn scenario() -> (Tensor, Tensor) {
    (
        Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap(),
        Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap(),
    )
}

fn direct_stats(data: &[f64]) -> (f64, f64, f64) {
    let n = data.len() as f64;
    let sum: f64 = data.iter().sum();
    let mean = sum / n;
    let var = data.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    (sum, mean, var)
}

#[test]
fn test_concrete_scenario_both_strategies() {
    let (a, b) = scenario();
    for kind in [SolverKind::Gaussian, SolverKind::GaussJordan] {
        let x = solve(&kind, &a, &b).unwrap();
        assert!((x[&[0, 0]] - 0.8).abs() < 1e-12, "{}", kind);
        assert!((x[&[1, 0]] - 1.4).abs() < 1e-12, "{}", kind);
        assert!(residual_norm(&a, &x, &b).unwrap() < 1e-12);
    }
}

#[test]
fn test_singular_fails_in_both_strategies() {
    let a = Tensor::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[1.0, 2.0, 3.0]]).unwrap();
    let b = Tensor::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    for kind in [SolverKind::Gaussian, SolverKind::GaussJordan] {
        match solve(&kind, &a, &b) {
            Err(TensorError::SingularMatrix { .. }) => {}
            other => panic!("{} returned {:?}", kind, other),
        }
    }
}

#[test]
fn test_identical_batch_identical_results() {
    let (a, b) = scenario();
    let pairs = vec![(a, b); 32];
    let runner = BatchRunner::new(ExecConfig::default());

    let xs = runner.run(&SolverKind::Gaussian, &pairs).unwrap();
    assert_eq!(xs.len(), 32);
    for x in &xs {
        assert_eq!(x, &xs[0]);
    }
}

#[test]
fn test_batch_parallel_and_sequential_agree() {
    let pairs: Vec<_> = (0..20)
        .map(|k| {
            let k = k as f64;
            (
                Tensor::from_rows(&[&[4.0 + k, 1.0, 0.0], &[1.0, 5.0, k], &[0.0, 1.0, 6.0 + k]])
                    .unwrap(),
                Tensor::from_vec(vec![1.0, k, 2.0], &[3]).unwrap(),
            )
        })
        .collect();

    let par = BatchRunner::new(ExecConfig::new().with_parallel_batches(true))
        .run(&GaussJordanElimination, &pairs)
        .unwrap();
    let seq = BatchRunner::new(ExecConfig::new().with_parallel_batches(false))
        .run(&GaussJordanElimination, &pairs)
        .unwrap();
    assert_eq!(par, seq);
}

#[test]
fn test_stacked_batch_matches_pairwise() {
    let (a, b) = scenario();
    let b2 = Tensor::from_vec(vec![1.0, 0.0], &[2]).unwrap();
    let a_stack = Tensor::stack(&[a.clone(), a.clone()]).unwrap();
    let b_stack = Tensor::stack(&[b.clone(), b2.clone()]).unwrap();

    let runner = BatchRunner::default();
    let stacked = runner
        .run_stacked(&GaussianElimination, &a_stack, &b_stack)
        .unwrap();
    let first = GaussianElimination.execute(&a, &b).unwrap();
    let second = GaussianElimination.execute(&a, &b2).unwrap();

    assert_eq!(stacked.outer_slice(0).unwrap(), first);
    assert_eq!(stacked.outer_slice(1).unwrap(), second);
}

#[test]
fn test_stats_not_divisible_by_chunks() {
    let data: Vec<f64> = (0..103).map(|i| (i as f64 * 0.37).sin() * 10.0).collect();
    let t = Tensor::from_vec(data.clone(), &[103]).unwrap();
    let engine = ReductionEngine::new(ExecConfig::default()).unwrap();
    let (sum, mean, var) = direct_stats(&data);

    assert!((engine.sum(&t) - sum).abs() < 1e-9);
    assert!((engine.mean(&t) - mean).abs() < 1e-12);
    assert!((engine.variance(&t) - var).abs() < 1e-9);
    assert!((engine.std_dev(&t) - var.sqrt()).abs() < 1e-9);
}

#[test]
fn test_stats_fewer_elements_than_chunks() {
    let t = Tensor::from_vec(vec![5.0, 7.0, 9.0], &[3]).unwrap();
    let engine = ReductionEngine::new(ExecConfig::new().with_parallelism(8)).unwrap();

    assert_eq!(engine.sum(&t), 21.0);
    assert_eq!(engine.mean(&t), 7.0);
    assert!((engine.variance(&t) - 8.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_per_chunk_weighting_formula() {
    // 5 elements over 4 chunks: [1], [2], [3], [4, 5]
    let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0], &[5]).unwrap();
    let engine = ReductionEngine::new(
        ExecConfig::new()
            .with_parallelism(4)
            .with_weighting(ChunkWeighting::PerChunk),
    )
    .unwrap();

    let mean = (1.0 + 2.0 + 3.0 + 4.5) / 4.0;
    assert_eq!(engine.mean(&t), mean);

    let ss: f64 = [1.0, 2.0, 3.0, 4.0, 5.0]
        .iter()
        .map(|x: &f64| (x - mean) * (x - mean))
        .sum();
    assert!((engine.variance(&t) - ss / 4.0).abs() < 1e-12);
}

#[cfg(unix)]
#[test]
fn test_external_variant_in_batch() {
    let approx = ExternalApproximator::for_dimension("sh", ["-c", "echo 0.8 1.4"], 2);
    let kind = SolverKind::from(approx);
    let (a, b) = scenario();

    let xs = BatchRunner::default()
        .run(&kind, &[(a.clone(), b.clone()), (a, b)])
        .unwrap();
    assert_eq!(xs.len(), 2);
    assert_eq!(xs[0].as_slice(), &[0.8, 1.4]);
}

proptest! {
    #[test]
    fn prop_stats_match_direct(data in prop::collection::vec(-50.0f64..50.0, 1..300), parts in 1usize..10) {
        let t = Tensor::from_vec(data.clone(), &[data.len()]).unwrap();
        let engine = ReductionEngine::new(ExecConfig::new().with_parallelism(parts)).unwrap();
        let (sum, mean, var) = direct_stats(&data);

        prop_assert!((engine.sum(&t) - sum).abs() < 1e-8);
        prop_assert!((engine.mean(&t) - mean).abs() < 1e-9);
        prop_assert!((engine.variance(&t) - var).abs() < 1e-6);
    }
}
