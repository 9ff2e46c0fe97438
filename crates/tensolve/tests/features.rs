//! Feature forwarding from the meta crate to its components

use tensolve::prelude::*;

#[test]
fn test_parallel_feature_controls_batches() {
    let runner = BatchRunner::new(ExecConfig::default());
    assert_eq!(runner.is_parallel(), cfg!(feature = "parallel"));
}

#[test]
fn test_results_independent_of_parallel_feature() {
    let a = Tensor::from_rows(&[&[2.0, 1.0], &[1.0, 3.0]]).unwrap();
    let b = Tensor::from_vec(vec![3.0, 5.0], &[2]).unwrap();
    let pairs = vec![(a, b); 4];

    let xs = BatchRunner::default()
        .run(&GaussianElimination, &pairs)
        .unwrap();
    for x in &xs {
        assert!((x[&[0, 0]] - 0.8).abs() < 1e-12);
        assert!((x[&[1, 0]] - 1.4).abs() < 1e-12);
    }
}
