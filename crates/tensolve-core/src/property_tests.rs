//! Property-based tests for tensor primitives

use crate::Tensor;
use proptest::prelude::*;

/// Strategy for a small matrix with arbitrary finite values
fn small_matrix() -> impl Strategy<Value = Tensor> {
    (1usize..8, 1usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1e6f64..1e6, rows * cols)
            .prop_map(move |data| Tensor::from_vec(data, &[rows, cols]).unwrap())
    })
}

proptest! {
    /// Swapping the same pair of rows twice restores every bit
    #[test]
    fn test_swap_rows_is_involution(m in small_matrix(), i in 0usize..8, j in 0usize..8) {
        let rows = m.shape()[0];
        let (i, j) = (i % rows, j % rows);

        let mut swapped = m.clone();
        swapped.swap_rows(i, j).unwrap();
        swapped.swap_rows(i, j).unwrap();

        let before: Vec<u64> = m.as_slice().iter().map(|x| x.to_bits()).collect();
        let after: Vec<u64> = swapped.as_slice().iter().map(|x| x.to_bits()).collect();
        prop_assert_eq!(before, after);
    }

    /// A swap exchanges exactly the two addressed rows
    #[test]
    fn test_swap_rows_exchanges(m in small_matrix(), i in 0usize..8, j in 0usize..8) {
        let rows = m.shape()[0];
        let (i, j) = (i % rows, j % rows);

        let mut swapped = m.clone();
        swapped.swap_rows(i, j).unwrap();

        prop_assert_eq!(swapped.get_row(i).unwrap(), m.get_row(j).unwrap());
        prop_assert_eq!(swapped.get_row(j).unwrap(), m.get_row(i).unwrap());
        for r in (0..rows).filter(|&r| r != i && r != j) {
            prop_assert_eq!(swapped.get_row(r).unwrap(), m.get_row(r).unwrap());
        }
    }

    /// set_row followed by get_row returns the written values
    #[test]
    fn test_set_then_get_row(m in small_matrix(), row in 0usize..8, fill in -10.0f64..10.0) {
        let (rows, cols) = m.matrix_dims().unwrap();
        let row = row % rows;
        let values = vec![fill; cols];

        let mut updated = m.clone();
        updated.set_row(row, &values).unwrap();
        prop_assert_eq!(updated.get_row(row).unwrap(), values);
    }

    /// Stacking then slicing returns the original items
    #[test]
    fn test_stack_outer_slice(items in prop::collection::vec(small_matrix(), 1..4)) {
        let shape = items[0].shape().to_vec();
        let same: Vec<Tensor> = items
            .iter()
            .map(|t| Tensor::from_elem(&shape, t.as_slice()[0]))
            .collect();

        let stacked = Tensor::stack(&same).unwrap();
        for (k, item) in same.iter().enumerate() {
            prop_assert_eq!(&stacked.outer_slice(k).unwrap(), item);
        }
    }
}
