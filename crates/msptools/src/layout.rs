//! Storage orders and the row-major to column-major layout adapter.
//!
//! The stride rule in [`StorageOrder::index`] is the only place that maps a
//! logical `(row, col)` pair to a flat offset; every reader, writer, printer
//! and the adapters below go through it.

use std::fmt;

use crate::error::{LinalgError, Result};
use crate::math::{zeroed, Array2};

/// Memory layout of a two-dimensional buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageOrder {
    /// Row-major (C-style): elements of a row are contiguous.
    #[default]
    RowMajor,
    /// Column-major (Fortran-style): elements of a column are contiguous.
    ColMajor,
}

/// Transpose mode understood by the least-squares kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transpose {
    #[default]
    NoTrans,
    Trans,
}

impl StorageOrder {
    /// Flat offset of element `(i, j)` in a `rows x cols` buffer.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, rows: usize, cols: usize) -> usize {
        match self {
            StorageOrder::RowMajor => i * cols + j,
            StorageOrder::ColMajor => i + j * rows,
        }
    }

    /// Leading dimension of an unpadded `rows x cols` buffer.
    #[inline(always)]
    pub fn leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            StorageOrder::RowMajor => cols,
            StorageOrder::ColMajor => rows,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StorageOrder::RowMajor => "RowMajor",
            StorageOrder::ColMajor => "ColMajor",
        }
    }
}

impl fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rewrite a square row-major matrix into column-major order in place.
///
/// The logical value at `(i, j)` is preserved; only its physical offset
/// moves from `i*n + j` to `i + j*n`, and the matrix is re-tagged
/// `ColMajor`. A matrix that is already column-major is left alone.
/// On failure the matrix is untouched.
pub fn to_col_major_square(a: &mut Array2) -> Result<()> {
    let (rows, cols) = a.shape();
    if rows != cols {
        return Err(LinalgError::NotSquare { rows, cols });
    }
    if a.order() == StorageOrder::ColMajor {
        return Ok(());
    }

    let n = rows;
    let mut aside = zeroed(n * n)?;
    aside.copy_from_slice(a.as_slice());

    let live = a.as_mut_slice();
    let mut k = 0;
    for i in 0..n {
        for j in 0..n {
            live[k] = aside[i + n * j];
            k += 1;
        }
    }
    a.retag(StorageOrder::ColMajor);
    Ok(())
}

/// Rewrite a matrix of any shape into `target` order in place.
///
/// Uses the general `i*cols + j <-> i + j*rows` mapping, so unlike
/// [`to_col_major_square`] it also handles rectangular shapes and the
/// column-major to row-major direction.
pub fn relayout(a: &mut Array2, target: StorageOrder) -> Result<()> {
    let source = a.order();
    if source == target {
        return Ok(());
    }
    let (rows, cols) = a.shape();
    let mut aside = zeroed(rows * cols)?;
    aside.copy_from_slice(a.as_slice());

    let live = a.as_mut_slice();
    for i in 0..rows {
        for j in 0..cols {
            live[target.index(i, j, rows, cols)] = aside[source.index(i, j, rows, cols)];
        }
    }
    a.retag(target);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_rule() {
        assert_eq!(StorageOrder::RowMajor.index(1, 2, 3, 4), 6);
        assert_eq!(StorageOrder::ColMajor.index(1, 2, 3, 4), 7);
        assert_eq!(StorageOrder::RowMajor.leading_dim(3, 4), 4);
        assert_eq!(StorageOrder::ColMajor.leading_dim(3, 4), 3);
    }

    #[test]
    fn square_adapter_moves_offsets_not_values() {
        let mut a = Array2::from_shape_vec(
            (3, 3),
            StorageOrder::RowMajor,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        )
        .unwrap();
        let before = a.clone();

        to_col_major_square(&mut a).unwrap();

        assert_eq!(a.order(), StorageOrder::ColMajor);
        assert_eq!(a.as_slice(), &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0]);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(a[(i, j)], before[(i, j)]);
            }
        }
    }

    #[test]
    fn square_adapter_passes_col_major_through() {
        let data = vec![1.0, -2.0, 7.0, -3.0];
        let mut a = Array2::from_shape_vec((2, 2), StorageOrder::ColMajor, data.clone()).unwrap();
        to_col_major_square(&mut a).unwrap();
        assert_eq!(a.as_slice(), data.as_slice());
    }

    #[test]
    fn square_adapter_rejects_rectangles() {
        let mut a = Array2::zeros((2, 3), StorageOrder::RowMajor).unwrap();
        let err = to_col_major_square(&mut a).unwrap_err();
        assert!(matches!(err, LinalgError::NotSquare { rows: 2, cols: 3 }));
        assert_eq!(a.order(), StorageOrder::RowMajor);
    }

    #[test]
    fn relayout_handles_rectangles_both_ways() {
        let mut a = Array2::from_shape_vec(
            (2, 3),
            StorageOrder::RowMajor,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
        .unwrap();
        relayout(&mut a, StorageOrder::ColMajor).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(a[(1, 2)], 6.0);

        relayout(&mut a, StorageOrder::RowMajor).unwrap();
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
