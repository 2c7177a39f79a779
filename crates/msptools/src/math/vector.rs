use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::error::{LinalgError, Result};
use crate::io::format_g;
use crate::math::zeroed;

/// Growable vector of `f64` with an explicit capacity.
///
/// `capacity` counts owned slots and is always at least one; `len` counts the
/// live prefix. Slots past `len` hold zeros or stale values and are never
/// exposed through the slice accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct Array1 {
    data: Vec<f64>,
    len: usize,
}

impl Array1 {
    /// Empty vector able to hold `capacity` values before growing.
    /// A requested capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let data = zeroed(capacity.max(1))?;
        Ok(Self { data, len: 0 })
    }

    pub fn from_vec(mut data: Vec<f64>) -> Self {
        let len = data.len();
        if data.is_empty() {
            data.push(0.0);
        }
        Self { data, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Append `value`, doubling the capacity first when the vector is full.
    ///
    /// On allocation failure the vector keeps its previous contents and
    /// capacity.
    pub fn push(&mut self, value: f64) -> Result<()> {
        if self.len == self.capacity() {
            let doubled = self
                .capacity()
                .checked_mul(2)
                .ok_or(LinalgError::Allocation {
                    requested: usize::MAX,
                })?;
            self.resize(doubled)?;
        }
        self.data[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Reallocate to exactly `new_capacity` slots (at least one).
    ///
    /// Shrinking below the current length drops the trailing values, so
    /// `resize(0)` leaves an empty vector with one slot.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let slots = new_capacity.max(1);
        let current = self.data.len();
        if slots > current {
            self.data
                .try_reserve_exact(slots - current)
                .map_err(|_| LinalgError::Allocation { requested: slots })?;
            self.data.resize(slots, 0.0);
        } else {
            self.data.truncate(slots);
            self.data.shrink_to_fit();
        }
        self.len = self.len.min(new_capacity);
        Ok(())
    }

    /// Shorten the live prefix to `len`; capacity is untouched.
    pub fn truncate(&mut self, len: usize) {
        self.len = self.len.min(len);
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.as_slice().get(index).copied()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.as_mut_slice().iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data[..self.len]
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl From<Vec<f64>> for Array1 {
    fn from(value: Vec<f64>) -> Self {
        Array1::from_vec(value)
    }
}

impl Index<usize> for Array1 {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for Array1 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl fmt::Display for Array1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<array_t len={} capacity={}>", self.len, self.capacity())?;
        for value in self.iter() {
            let text = format_g(*value, 3);
            if text.starts_with('-') {
                writeln!(f, " {}", text)?;
            } else {
                writeln!(f, "  {}", text)?;
            }
        }
        Ok(())
    }
}
