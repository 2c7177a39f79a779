//! Integer-status entry points.
//!
//! `call_dgesv` and `call_dgels` mirror the facades for callers that work
//! with status codes instead of `Result`, including callers whose inputs may
//! be absent. `0` means success; see [`LinalgError::status`] for the rest.

use crate::error::{LinalgError, SUCCESS};
use crate::lapack::{FaerLapack, LapackKernel};
use crate::math::{Array1, Array2};
use crate::solver::{Method, Solver};

fn to_status(result: Result<(), LinalgError>) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(err) => err.status(),
    }
}

/// Run `method` through `solver`, reporting an integer status.
pub fn call_with<K: LapackKernel>(
    solver: &Solver<K>,
    method: Method,
    a: Option<&mut Array2>,
    b: Option<&mut Array1>,
) -> i32 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => {
            log::warn!("call_{}: A or b is missing", method.name());
            return LinalgError::NullInput.status();
        }
    };
    to_status(solver.solve(method, a, b))
}

/// Square solve with the faer kernel.
pub fn call_dgesv(a: Option<&mut Array2>, b: Option<&mut Array1>) -> i32 {
    call_with(&Solver::new(FaerLapack), Method::Gesv, a, b)
}

/// Least-squares solve with the faer kernel.
pub fn call_dgels(a: Option<&mut Array2>, b: Option<&mut Array1>) -> i32 {
    call_with(&Solver::new(FaerLapack), Method::Gels, a, b)
}
