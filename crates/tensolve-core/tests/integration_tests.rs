//! Integration tests for tensolve-core
//!
//! These tests exercise the public API across modules.

use scirs2_core::ndarray_ext::{Array, IxDyn};
use tensolve_core::{Tensor, TensorError};

#[test]
fn test_matrix_row_workflow() {
    let mut m = Tensor::from_rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]).unwrap();

    // Copy a row out, overwrite another with it, and swap
    let first = m.get_row(0).unwrap();
    m.set_row(2, &first).unwrap();
    m.swap_rows(1, 2).unwrap();

    assert_eq!(
        m.as_slice(),
        &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
    );
}

#[test]
fn test_vector_promotion_and_column_extraction() {
    let b = Tensor::from_vec(vec![3.0, 5.0, 7.0], &[3]).unwrap();
    let col = b.with_singleton().unwrap();
    assert_eq!(col.shape(), &[3, 1]);
    assert_eq!(col.column(0).unwrap(), col);
}

#[test]
fn test_batch_slicing_matches_layout() {
    let batch = Tensor::from_vec((0..18).map(|x| x as f64).collect(), &[2, 3, 3]).unwrap();
    let second = batch.outer_slice(1).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(second[&[i, j]], batch[&[1, i, j]]);
        }
    }
}

#[test]
fn test_array_interop() {
    let arr = Array::from_shape_fn(IxDyn(&[2, 3]), |idx| (idx[0] * 10 + idx[1]) as f64);
    let tensor = Tensor::from_array(&arr).unwrap();

    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor[&[1, 2]], 12.0);
    assert_eq!(tensor.to_array(), arr);
}

#[test]
fn test_errors_are_typed() {
    let mut m = Tensor::zeros(&[2, 2]);

    match m.set_row(0, &[1.0]) {
        Err(TensorError::ShapeMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, vec![2]);
            assert_eq!(actual, vec![1]);
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        m.swap_rows(0, 2),
        Err(TensorError::IndexOutOfBounds { index: 2, size: 2, .. })
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_roundtrip() {
    let t = Tensor::from_vec(vec![1.5, -2.0, 0.25, 4.0], &[2, 2]).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    let back: Tensor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rejects_invalid_payloads() {
    // Buffer shorter than the shape requires
    let short = serde_json::from_str::<Tensor>(r#"{"data":[1.0],"shape":[2,2]}"#);
    assert!(short.unwrap_err().to_string().contains("shape mismatch"));

    assert!(serde_json::from_str::<Tensor>(r#"{"data":[],"shape":[]}"#).is_err());
    assert!(serde_json::from_str::<Tensor>(r#"{"data":[],"shape":[2,0]}"#).is_err());

    let t: Tensor = serde_json::from_str(r#"{"data":[1.0,2.0,3.0,4.0],"shape":[2,2]}"#).unwrap();
    assert_eq!(t.shape(), &[2, 2]);
    assert_eq!(t[&[1, 0]], 3.0);
}
