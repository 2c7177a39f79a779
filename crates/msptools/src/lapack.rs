//! Dense solve kernels with the LAPACK `dgesv` / `dgels` calling contract.
//!
//! The solver facades only ever talk to a [`LapackKernel`], so a binding to
//! a system LAPACK can replace [`FaerLapack`] without touching them.
//! Every buffer is column-major with an explicit leading dimension, and the
//! returned `info` follows LAPACK:
//!
//! - `0` on success,
//! - `i > 0` when `U(i,i)` (or `R(i,i)`) is exactly zero,
//! - `-i` when argument number `i` had an illegal value.
//!
//! [`FaerLapack`] checks arguments and pivots the way LAPACK does and hands
//! the factorizations to faer: partial-pivoting LU for `dgesv` and
//! Householder QR for `dgels`. Factors are written back into `a`.

use faer::linalg::matmul::matmul;
use faer::linalg::solvers::{SolveCore, SolveLstsqCore};
use faer::linalg::triangular_solve::solve_lower_triangular_in_place;
use faer::{Accum, Conj, Mat, Par};

use crate::layout::Transpose;

/// Square and least-squares solve kernels over column-major storage.
pub trait LapackKernel {
    /// Solve `A * X = B` for square `A` (`n x n`, leading dimension `lda`).
    ///
    /// `a` is overwritten with the LU factors, `ipiv` (length `n`) with the
    /// 1-based pivot rows and `b` (`n x nrhs`, leading dimension `ldb`) with
    /// the solution.
    fn dgesv(
        &self,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        ipiv: &mut [i32],
        b: &mut [f64],
        ldb: usize,
    ) -> i32;

    /// Least-squares or minimum-norm solution of `op(A) * X = B`, where
    /// `op(A)` is `A` (`m x n`) or its transpose.
    ///
    /// `b` needs `max(m, n)` rows. With `lwork == -1` nothing is solved and
    /// the minimum workspace size is written to `work[0]`.
    fn dgels(
        &self,
        trans: Transpose,
        m: usize,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
        work: &mut [f64],
        lwork: i32,
    ) -> i32;
}

/// Kernels backed by faer's dense decompositions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerLapack;

impl LapackKernel for FaerLapack {
    fn dgesv(
        &self,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        ipiv: &mut [i32],
        b: &mut [f64],
        ldb: usize,
    ) -> i32 {
        if lda < n.max(1) {
            return -4;
        }
        if ldb < n.max(1) {
            return -7;
        }
        if n == 0 {
            return 0;
        }
        if a.len() < lda * (n - 1) + n {
            return -3;
        }
        if ipiv.len() < n {
            return -5;
        }
        if nrhs > 0 && b.len() < ldb * (nrhs - 1) + n {
            return -6;
        }

        let lu = Mat::from_fn(n, n, |i, j| a[i + j * lda]).partial_piv_lu();
        let l = lu.L().to_owned();
        let u = lu.U().to_owned();

        let (forward, _) = lu.P().arrays();
        interchanges(forward, &mut ipiv[..n]);
        for j in 0..n {
            for i in 0..n {
                a[i + j * lda] = if i > j { l[(i, j)] } else { u[(i, j)] };
            }
        }

        if let Some(k) = (0..n).find(|&k| u[(k, k)] == 0.0) {
            return (k + 1) as i32;
        }
        if nrhs == 0 {
            return 0;
        }

        let mut rhs = Mat::from_fn(n, nrhs, |i, c| b[i + c * ldb]);
        lu.solve_in_place_with_conj(Conj::No, rhs.as_mut());
        store_columns(&rhs, b, ldb);
        0
    }

    fn dgels(
        &self,
        trans: Transpose,
        m: usize,
        n: usize,
        nrhs: usize,
        a: &mut [f64],
        lda: usize,
        b: &mut [f64],
        ldb: usize,
        work: &mut [f64],
        lwork: i32,
    ) -> i32 {
        let mn = m.min(n);
        let mx = m.max(n);
        let min_work = (mn + mn.max(nrhs)).max(1);

        if lda < m.max(1) {
            return -6;
        }
        if ldb < mx.max(1) {
            return -8;
        }
        if work.is_empty() {
            return -9;
        }
        if lwork == -1 {
            work[0] = min_work as f64;
            return 0;
        }
        if lwork < 0 || (lwork as usize) < min_work {
            return -10;
        }
        if work.len() < lwork as usize {
            return -9;
        }
        if nrhs > 0 && b.len() < ldb * (nrhs - 1) + mx {
            return -7;
        }

        // An empty operator has the zero vector as its minimum-norm solution;
        // `a` is never read.
        if mn == 0 || nrhs == 0 {
            for c in 0..nrhs {
                b[c * ldb..c * ldb + mx].fill(0.0);
            }
            return 0;
        }
        if a.len() < lda * (n - 1) + m {
            return -5;
        }

        // `tall` is whichever of A and A^T has at least as many rows as
        // columns; `least_squares` says whether op(A) is that matrix or its
        // transpose.
        let a_view = TallView {
            rows: m,
            cols: n,
            row_stride: 1,
            col_stride: lda,
        };
        let at_view = TallView {
            rows: n,
            cols: m,
            row_stride: lda,
            col_stride: 1,
        };
        let (tall, least_squares) = match (trans, m >= n) {
            (Transpose::NoTrans, true) => (a_view, true),
            (Transpose::NoTrans, false) => (at_view, false),
            (Transpose::Trans, true) => (a_view, false),
            (Transpose::Trans, false) => (at_view, true),
        };

        let qr = Mat::from_fn(tall.rows, tall.cols, |i, j| a[tall.at(i, j)]).qr();
        let r = qr.thin_R().to_owned();
        let basis = qr.Q_basis().to_owned();
        for j in 0..tall.cols {
            for i in 0..tall.rows {
                a[tall.at(i, j)] = if i <= j { r[(i, j)] } else { basis[(i, j)] };
            }
        }

        if let Some(k) = (0..tall.cols).find(|&k| r[(k, k)] == 0.0) {
            return (k + 1) as i32;
        }

        if least_squares {
            // x = R^{-1} (Q^T b)[..cols]; the tail of b keeps the residual
            // components.
            let mut rhs = Mat::from_fn(tall.rows, nrhs, |i, c| b[i + c * ldb]);
            qr.solve_lstsq_in_place_with_conj(Conj::No, rhs.as_mut());
            store_columns(&rhs, b, ldb);
        } else {
            // x = Q [R^{-T} b; 0]
            let mut y = Mat::from_fn(tall.cols, nrhs, |i, c| b[i + c * ldb]);
            solve_lower_triangular_in_place(r.as_ref().transpose(), y.as_mut(), Par::Seq);
            let q = qr.compute_thin_Q();
            let mut x = Mat::<f64>::zeros(tall.rows, nrhs);
            matmul(&mut x, Accum::Replace, &q, &y, 1.0, Par::Seq);
            store_columns(&x, b, ldb);
        }
        0
    }
}

/// A `rows x cols` matrix (`rows >= cols`) addressed inside a flat buffer;
/// element `(i, j)` sits at `i * row_stride + j * col_stride`.
#[derive(Debug, Clone, Copy)]
struct TallView {
    rows: usize,
    cols: usize,
    row_stride: usize,
    col_stride: usize,
}

impl TallView {
    #[inline(always)]
    fn at(&self, i: usize, j: usize) -> usize {
        i * self.row_stride + j * self.col_stride
    }
}

/// Rewrite a row permutation as the LAPACK interchange sequence: step `k`
/// swapped row `k` with row `ipiv[k] - 1`.
fn interchanges(forward: &[usize], ipiv: &mut [i32]) {
    let n = forward.len();
    let mut row_at: Vec<usize> = (0..n).collect();
    let mut position: Vec<usize> = (0..n).collect();
    for k in 0..n {
        let p = position[forward[k]];
        ipiv[k] = (p + 1) as i32;
        let displaced = row_at[k];
        row_at.swap(k, p);
        position[displaced] = p;
        position[forward[k]] = k;
    }
}

fn store_columns(src: &Mat<f64>, b: &mut [f64], ldb: usize) {
    for c in 0..src.ncols() {
        for i in 0..src.nrows() {
            b[i + c * ldb] = src[(i, c)];
        }
    }
}
