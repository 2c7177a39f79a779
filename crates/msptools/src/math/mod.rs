//! Owned numeric buffers.
//!
//! Provides `Array1` (a growable vector with explicit capacity) and `Array2`
//! (a fixed-shape matrix tagged with its storage order). Both own their
//! storage outright; growth goes through `try_reserve_exact`, so a failed
//! allocation reports `LinalgError::Allocation` and leaves the buffer as it
//! was.
pub mod matrix;
pub mod vector;

pub use matrix::Array2;
pub use vector::Array1;

use crate::error::{LinalgError, Result};

/// Allocate `len` zeroed slots without aborting on allocation failure.
pub(crate) fn zeroed(len: usize) -> Result<Vec<f64>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| LinalgError::Allocation { requested: len })?;
    data.resize(len, 0.0);
    Ok(data)
}
