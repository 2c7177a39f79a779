//! Solver facades: shape validation, layout adaptation and status handling
//! around a [`LapackKernel`].
//!
//! Both facades overwrite their inputs. The matrix ends up holding the
//! kernel's factors (and, for the square solver, a column-major tag); on
//! success the leading `cols` entries of `b` hold the solution and
//! `b.len()` is `cols`. After a numerical failure the contents of `b` are
//! unspecified.

use crate::error::{LinalgError, Result};
use crate::lapack::{FaerLapack, LapackKernel};
use crate::layout::{to_col_major_square, StorageOrder, Transpose};
use crate::math::{zeroed, Array1, Array2};

/// Which facade to run for a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Square solve through LU with partial pivoting (`dgesv`).
    #[default]
    Gesv,
    /// Least squares through QR (`dgels`).
    Gels,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::Gesv => "gesv",
            Method::Gels => "gels",
        }
    }
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gesv" | "square" => Ok(Method::Gesv),
            "gels" | "lstsq" | "least-squares" => Ok(Method::Gels),
            _ => Err(format!(
                "Unknown solve method: {}. Expected one of: gesv, gels",
                s
            )),
        }
    }
}

/// Solver facades bound to one kernel implementation.
#[derive(Debug, Clone, Default)]
pub struct Solver<K = FaerLapack> {
    kernel: K,
}

impl<K: LapackKernel> Solver<K> {
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Run the facade selected by `method`.
    pub fn solve(&self, method: Method, a: &mut Array2, b: &mut Array1) -> Result<()> {
        match method {
            Method::Gesv => self.solve_square(a, b),
            Method::Gels => self.solve_least_squares(a, b),
        }
    }

    /// Solve the square system `A x = b` in place.
    ///
    /// A row-major `A` is first rewritten to column-major order, since the
    /// square kernel has no transpose mode.
    pub fn solve_square(&self, a: &mut Array2, b: &mut Array1) -> Result<()> {
        let (rows, cols) = a.shape();
        if rows != cols {
            log::warn!("solve_square: A has shape ({}, {}), not square", rows, cols);
            return Err(LinalgError::NotSquare { rows, cols });
        }
        if rows != b.len() {
            log::warn!(
                "solve_square: A has {} rows but b has {} entries",
                rows,
                b.len()
            );
            return Err(LinalgError::DimensionMismatch {
                expected: rows,
                found: b.len(),
            });
        }

        let n = rows;
        let mut ipiv = vec![0i32; 0];
        ipiv.try_reserve_exact(n)
            .map_err(|_| LinalgError::Allocation { requested: n })?;
        ipiv.resize(n, 0);

        if a.order() == StorageOrder::RowMajor {
            log::debug!("solve_square: relayout {}x{} row-major matrix", n, n);
            to_col_major_square(a)?;
        }

        let info = self.kernel.dgesv(
            n,
            1,
            a.as_mut_slice(),
            n.max(1),
            &mut ipiv,
            b.as_mut_slice(),
            n.max(1),
        );
        match info {
            0 => {
                b.truncate(n);
                Ok(())
            }
            i if i > 0 => {
                log::warn!("solve_square: U({},{}) is exactly zero", i, i);
                Err(LinalgError::SingularMatrix { pivot: i as usize })
            }
            i => Err(kernel_contract_violation("dgesv", i)),
        }
    }

    /// Solve `minimize ||A x - b||_2` in place for `A` with `rows >= cols`.
    ///
    /// A row-major `A` is handed to the kernel as the column-major storage of
    /// `A^T` together with the transpose flag, so no data moves.
    pub fn solve_least_squares(&self, a: &mut Array2, b: &mut Array1) -> Result<()> {
        let (rows, cols) = a.shape();
        if rows < cols {
            log::warn!(
                "solve_least_squares: A has shape ({}, {}), more columns than rows",
                rows,
                cols
            );
            return Err(LinalgError::Underdetermined { rows, cols });
        }
        if rows != b.len() {
            log::warn!(
                "solve_least_squares: A has {} rows but b has {} entries",
                rows,
                b.len()
            );
            return Err(LinalgError::DimensionMismatch {
                expected: rows,
                found: b.len(),
            });
        }

        let (trans, m, n) = match a.order() {
            StorageOrder::ColMajor => (Transpose::NoTrans, rows, cols),
            StorageOrder::RowMajor => (Transpose::Trans, cols, rows),
        };
        // A row-major buffer read column-major is A^T, so its leading
        // dimension is the kernel's m in both cases.
        let lda = a.order().leading_dim(rows, cols).max(1);
        let ldb = rows.max(1);
        log::debug!(
            "solve_least_squares: {:?} with m={}, n={}, lda={}, ldb={}",
            trans,
            m,
            n,
            lda,
            ldb
        );

        let mut query = [0.0f64; 1];
        let info = self.kernel.dgels(
            trans,
            m,
            n,
            1,
            a.as_mut_slice(),
            lda,
            b.as_mut_slice(),
            ldb,
            &mut query,
            -1,
        );
        if info < 0 {
            return Err(kernel_contract_violation("dgels", info));
        }
        let lwork = (query[0] as usize).max(1);
        let mut work = zeroed(lwork)?;

        let info = self.kernel.dgels(
            trans,
            m,
            n,
            1,
            a.as_mut_slice(),
            lda,
            b.as_mut_slice(),
            ldb,
            &mut work,
            lwork as i32,
        );
        match info {
            0 => {
                b.truncate(cols);
                Ok(())
            }
            i if i > 0 => {
                log::warn!("solve_least_squares: A does not have full rank");
                Err(LinalgError::RankDeficient { index: i as usize })
            }
            i => Err(kernel_contract_violation("dgels", i)),
        }
    }
}

fn kernel_contract_violation(routine: &'static str, info: i32) -> LinalgError {
    let param = info.unsigned_abs() as usize;
    log::error!(
        "Parameter number {} of {} had an illegal value; this is a bug in the caller",
        param,
        routine
    );
    LinalgError::InvalidKernelArgument { routine, param }
}

/// [`Solver::solve_square`] with the faer kernel.
pub fn solve_square(a: &mut Array2, b: &mut Array1) -> Result<()> {
    Solver::new(FaerLapack).solve_square(a, b)
}

/// [`Solver::solve_least_squares`] with the faer kernel.
pub fn solve_least_squares(a: &mut Array2, b: &mut Array1) -> Result<()> {
    Solver::new(FaerLapack).solve_least_squares(a, b)
}
