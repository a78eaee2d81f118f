/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Orthogonal factorizations of small fixed-size matrices.
//!
//! The kernels in [`qr`] are total: they never fail, and numerically
//! degenerate input simply produces a zero on the diagonal of `R`.  The
//! functions at the top level of this crate are checked front-ends that
//! turn such degeneracy into an error.

#[macro_use] extern crate log;
extern crate thiserror;
extern crate meshalg_array_types;
#[cfg(test)] #[macro_use] extern crate meshalg_assert_close;
#[cfg(test)] extern crate rand;

use meshalg_array_types::{Real, Vector, Matrix};

pub use crate::qr::{Reflectors, ReducedQr};
pub use crate::qr::{householder_vector, reflect_columns, factorize_qr_householder};
pub use crate::qr::{implicit_q_trans_b, implicit_q_x, decompose_qr_reduced};
pub mod qr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("matrix is degenerate: diagonal of R vanishes at column {column}")]
pub struct DegenerateMatrixError {
    pub column: usize,
}

/// Index of the first column whose diagonal entry in `r` is within `tol` of zero.
///
/// NaN counts as vanishing.
fn first_vanishing_diagonal<const N: usize>(r: &Matrix<N, N>, tol: Real) -> Option<usize>
{ (0..N).find(|&k| !(r[k][k].abs() > tol)) }

fn frobenius_norm<const M: usize, const N: usize>(a: &Matrix<M, N>) -> Real
{ a.iter().map(Vector::sqnorm).sum::<Real>().sqrt() }

/// Thin QR decomposition that rejects rank-deficient input.
///
/// Fails if any diagonal entry of `R` has magnitude at most `rel_tol`
/// times the Frobenius norm of `a`.  (with `rel_tol = 0.0`, only exact
/// zeros and NaN are rejected)
pub fn decompose_qr_reduced_checked<const M: usize, const N: usize>(
    a: &Matrix<M, N>,
    rel_tol: Real,
) -> Result<ReducedQr<M, N>, DegenerateMatrixError> {
    let qr = decompose_qr_reduced(a);
    let tol = rel_tol * frobenius_norm(a);
    match first_vanishing_diagonal(&qr.r, tol) {
        None => Ok(qr),
        Some(column) => {
            debug!("rejecting degenerate {}x{} matrix (column {}, tol {:e})", M, N, column, tol);
            Err(DegenerateMatrixError { column })
        },
    }
}

/// Solve `r x = y` for upper triangular `r` by back substitution.
///
/// Only the upper triangle of `r` is read.
pub fn solve_upper_triangular<const N: usize>(
    r: &Matrix<N, N>,
    y: &Vector<N>,
) -> Result<Vector<N>, DegenerateMatrixError> {
    if let Some(column) = first_vanishing_diagonal(r, 0.0) {
        debug!("back substitution hit a zero pivot at column {}", column);
        return Err(DegenerateMatrixError { column });
    }

    let mut x = Vector::zero();
    for i in (0..N).rev() {
        let partial = (i + 1..N).fold(y[i], |acc, j| acc - r[j][i] * x[j]);
        x[i] = partial / r[i][i];
    }
    Ok(x)
}

/// Minimize `|a x - b|` over `x`.
///
/// Computes `Q^T b` implicitly and back-substitutes with `R`.
///
/// A wide matrix (`N > M`) never has full column rank, and is rejected with
/// `column = M`, the first column that cannot have a pivot.
pub fn least_squares<const M: usize, const N: usize>(
    a: &Matrix<M, N>,
    b: &Vector<M>,
) -> Result<Vector<N>, DegenerateMatrixError> {
    if N > M {
        debug!("least squares on a wide {}x{} matrix", M, N);
        return Err(DegenerateMatrixError { column: M });
    }

    let mut work = *a;
    let reflectors = factorize_qr_householder(&mut work);

    let mut qtb = *b;
    reflectors.apply_q_trans(&mut qtb);

    let r = Matrix::<N, N>::from_fn(|i, j| if i <= j { work[j][i] } else { 0.0 });
    let y = Vector::from_fn(|i| qtb[i]);
    solve_upper_triangular(&r, &y)
}
