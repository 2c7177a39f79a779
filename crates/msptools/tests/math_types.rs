//! Integration tests for the Array1 and Array2 buffer types.

use msptools::layout::{to_col_major_square, StorageOrder};
use msptools::{Array1, Array2, LinalgError};

// ---------------------------------------------------------------------------
// Array1 basics
// ---------------------------------------------------------------------------

#[test]
fn array1_with_capacity_starts_empty() {
    let a = Array1::with_capacity(8).unwrap();
    assert_eq!(a.len(), 0);
    assert_eq!(a.capacity(), 8);
    assert!(a.is_empty());
}

#[test]
fn array1_push_at_capacity_doubles_and_keeps_order() {
    let mut a = Array1::with_capacity(3).unwrap();
    for k in 0..3 {
        a.push(k as f64).unwrap();
    }
    assert_eq!(a.capacity(), 3);

    a.push(3.0).unwrap();
    assert_eq!(a.capacity(), 6);
    assert_eq!(a.to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn array1_many_pushes() {
    let mut a = Array1::with_capacity(1).unwrap();
    for k in 0..500 {
        a.push(2.0 * k as f64).unwrap();
    }
    assert_eq!(a.len(), 500);
    assert_eq!(a.capacity(), 512);
    assert_eq!(a[499], 998.0);
}

#[test]
fn array1_resize_shrink_and_grow() {
    let mut a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    a.resize(1).unwrap();
    assert_eq!(a.to_vec(), vec![1.0]);
    a.resize(4).unwrap();
    assert_eq!(a.capacity(), 4);
    assert_eq!(a.len(), 1);
    a.resize(0).unwrap();
    assert_eq!(a.capacity(), 1);
    assert!(a.is_empty());
}

#[test]
fn array1_get_and_truncate() {
    let mut a = Array1::from_vec(vec![10.0, 20.0, 30.0]);
    assert_eq!(a.get(1), Some(20.0));
    a.truncate(2);
    assert_eq!(a.get(2), None);
    assert_eq!(a.capacity(), 3);
    a.truncate(5);
    assert_eq!(a.len(), 2);
}

// ---------------------------------------------------------------------------
// Array2 basics
// ---------------------------------------------------------------------------

#[test]
fn array2_from_shape_vec_checks_length() {
    let err = Array2::from_shape_vec((2, 3), StorageOrder::RowMajor, vec![1.0; 5]).unwrap_err();
    assert!(matches!(err, LinalgError::DimensionMismatch { expected: 6, found: 5 }));
}

#[test]
fn array2_index_mut_writes_through_stride_rule() {
    let mut a = Array2::zeros((2, 3), StorageOrder::ColMajor).unwrap();
    a[(1, 2)] = 5.0;
    assert_eq!(a.as_slice()[1 + 2 * 2], 5.0);

    let mut b = Array2::zeros((2, 3), StorageOrder::RowMajor).unwrap();
    b[(1, 2)] = 5.0;
    assert_eq!(b.as_slice()[3 + 2], 5.0);
}

#[test]
fn array2_reshape_24_by_1_to_4_by_6() {
    let data: Vec<f64> = (0..24).map(|v| v as f64).collect();
    let mut a = Array2::from_shape_vec((24, 1), StorageOrder::RowMajor, data.clone()).unwrap();
    a.reshape((4, 6)).unwrap();
    assert_eq!(a.shape(), (4, 6));
    assert_eq!(a.as_slice(), data.as_slice());
    assert_eq!(a.order(), StorageOrder::RowMajor);

    assert!(matches!(
        a.reshape((5, 5)),
        Err(LinalgError::DimensionMismatch { .. })
    ));
}

// ---------------------------------------------------------------------------
// Layout adapter
// ---------------------------------------------------------------------------

#[test]
fn layout_adapter_preserves_logical_values() {
    for n in [1usize, 2, 3, 7] {
        let data: Vec<f64> = (0..n * n).map(|v| (v as f64).sin()).collect();
        let original = Array2::from_shape_vec((n, n), StorageOrder::RowMajor, data).unwrap();
        let mut converted = original.clone();
        to_col_major_square(&mut converted).unwrap();

        assert_eq!(converted.order(), StorageOrder::ColMajor);
        for i in 0..n {
            for j in 0..n {
                let before = original.as_slice()[i * n + j];
                let after = converted.as_slice()[i + j * n];
                assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn to_order_round_trip_rectangular() {
    let a = Array2::from_shape_vec(
        (3, 2),
        StorageOrder::RowMajor,
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
    )
    .unwrap();
    let col = a.to_order(StorageOrder::ColMajor).unwrap();
    assert_eq!(col.as_slice(), &[1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(col[(i, j)], a[(i, j)]);
        }
    }
    assert_eq!(col.to_order(StorageOrder::RowMajor).unwrap(), a);
}
