// Kernel entry points keep the LAPACK argument lists.
// Numeric kernels use index loops for clarity.
#![allow(clippy::too_many_arguments, clippy::needless_range_loop)]

//! msptools: dense linear-algebra buffers and solvers.
//!
//! This crate provides a growable vector (`Array1`), a matrix tagged with
//! its storage order (`Array2`), plain-text load/store for both, and two
//! solver facades on top of LAPACK-style kernels:
//!
//! - `solve_square` for `A x = b` (LU with partial pivoting, `dgesv`),
//! - `solve_least_squares` for `min ||A x - b||_2` (QR, `dgels`).
//!
//! The kernels only accept column-major storage. The square facade rewrites
//! a row-major matrix in place before the call; the least-squares facade
//! uses the kernel's transpose mode instead. The default kernel,
//! [`FaerLapack`], hands the factorizations to `faer`.
//!
//! ```no_run
//! use msptools::{solve_square, Array1, Array2};
//!
//! let mut a = Array2::from_file("A.txt")?;
//! let mut b = Array1::from_file("b.txt")?;
//! solve_square(&mut a, &mut b)?;
//! b.to_file("x.txt")?;
//! # Ok::<(), msptools::LinalgError>(())
//! ```
pub mod error;
pub mod io;
pub mod lapack;
pub mod layout;
pub mod math;
pub mod solver;
pub mod status;

pub use error::{LinalgError, Result};
pub use lapack::{FaerLapack, LapackKernel};
pub use layout::{StorageOrder, Transpose};
pub use math::{Array1, Array2};
pub use solver::{solve_least_squares, solve_square, Method, Solver};
