use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{LinalgError, Result};
use crate::io::format_g;
use crate::layout::{relayout, StorageOrder};
use crate::math::zeroed;

/// Dense `rows x cols` matrix of `f64` tagged with its storage order.
///
/// `data.len() == rows * cols` holds at all times. Element `(i, j)` lives at
/// `order.index(i, j, rows, cols)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2 {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    order: StorageOrder,
}

impl Array2 {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(shape: (usize, usize), order: StorageOrder) -> Result<Self> {
        let (rows, cols) = shape;
        let len = rows.checked_mul(cols).ok_or(LinalgError::Allocation {
            requested: usize::MAX,
        })?;
        Ok(Self {
            data: zeroed(len)?,
            rows,
            cols,
            order,
        })
    }

    /// Wrap `data`, read according to `order`, as a `rows x cols` matrix.
    pub fn from_shape_vec(
        shape: (usize, usize),
        order: StorageOrder,
        data: Vec<f64>,
    ) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LinalgError::DimensionMismatch {
                expected: rows.saturating_mul(cols),
                found: data.len(),
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            order,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn order(&self) -> StorageOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Reinterpret the buffer with a new shape holding the same number of
    /// elements. Physical layout and storage order do not change.
    pub fn reshape(&mut self, new_shape: (usize, usize)) -> Result<()> {
        let (rows, cols) = new_shape;
        if rows.checked_mul(cols) != Some(self.data.len()) {
            return Err(LinalgError::DimensionMismatch {
                expected: self.data.len(),
                found: rows.saturating_mul(cols),
            });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    /// Same logical matrix stored in `order`.
    pub fn to_order(&self, order: StorageOrder) -> Result<Array2> {
        let mut out = self.clone();
        relayout(&mut out, order)?;
        Ok(out)
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        self.order.index(row, col, self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Flat storage in physical order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Change the order tag without touching the data. Only the layout
    /// adapters may do this, right after they have moved every element.
    pub(crate) fn retag(&mut self, order: StorageOrder) {
        self.order = order;
    }
}

impl Index<(usize, usize)> for Array2 {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Array2 {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index ({}, {}) out of bounds for shape ({}, {})",
            index.0,
            index.1,
            self.rows,
            self.cols
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for Array2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<array2d_t shape=({},{}) order={}>",
            self.rows, self.cols, self.order
        )?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let value = self[(i, j)];
                let text = format_g(value, 3);
                let text = if text.starts_with('-') {
                    text
                } else {
                    format!(" {}", text)
                };
                write!(f, "{:>8} ", text)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
