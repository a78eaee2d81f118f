/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Householder QR factorization of small fixed-size matrices.
//!
//! Trefethen, Lloyd N., and David Bau III. Numerical Linear Algebra.
//! SIAM, 1997.  Algorithms 10.1 (Householder QR factorization) and 10.2
//! (implicit calculation of `Q^T b` and `Q x`).
//!
//! The orthogonal factor is kept in compact form as one unit reflector
//! vector per column ([`Reflectors`]).  Use [`decompose_qr_reduced`] when an
//! explicit `Q` is actually needed.

use meshalg_array_types::{Real, Vector, Matrix, sign, square};

/// The Householder vectors produced by factorizing an `M x N` matrix.
///
/// Reflector `k` is a unit vector (or exactly zero, see
/// [`householder_vector`]) whose entries above row `k` are zero.
/// `Q = H_0 H_1 ... H_{N-1}` with `H_k = I - 2 v_k v_k^T`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reflectors<const M: usize, const N: usize>(pub [Vector<M>; N]);

/// A thin QR decomposition, `a = q * r`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReducedQr<const M: usize, const N: usize> {
    /// `M x N` with orthonormal columns.
    pub q: Matrix<M, N>,
    /// `N x N` upper triangular.
    pub r: Matrix<N, N>,
}

/// Compute the Householder vector that zeroes column `k` of `a` below row `k + offset`.
///
/// Only rows `k + offset .. M` of the output are nonzero.  The sign of the
/// shift is chosen to match the sign of the leading entry, so that the
/// leading entry of the unnormalized vector never suffers cancellation.
///
/// When that part of the column is exactly zero there is nothing to
/// eliminate, and the zero vector is returned.  Reflecting across it is
/// the identity.
#[inline]
pub fn householder_vector<const M: usize, const N: usize>(
    a: &Matrix<M, N>,
    k: usize,
    offset: usize,
) -> Vector<M> {
    let start = k + offset;
    if start >= M {
        return Vector::zero();
    }
    let norm_x = (start..M).map(|i| square(a[k][i])).sum::<Real>().sqrt();

    let mut v_k = Vector::zero();
    for i in start..M {
        v_k[i] = a[k][i];
    }
    v_k[start] += sign(a[k][start]) * norm_x;

    let norm_v_k = (start..M).map(|i| square(v_k[i])).sum::<Real>().sqrt();
    if norm_v_k == 0.0 {
        return Vector::zero();
    }
    for i in start..M {
        v_k[i] /= norm_v_k;
    }
    v_k
}

/// Apply the reflector `I - 2 v_k v_k^T` to every column of `a`, in place.
///
/// Rows above `k + offset` are untouched.
#[inline]
pub fn reflect_columns<const M: usize, const N: usize>(
    a: &mut Matrix<M, N>,
    v_k: &Vector<M>,
    k: usize,
    offset: usize,
) {
    for j in 0..N {
        reflect_range(&mut a[j], v_k, k + offset);
    }
}

/// `x[start..] -= 2 (v . x[start..]) v`
#[inline(always)]
fn reflect_range<const M: usize>(x: &mut Vector<M>, v: &Vector<M>, start: usize) {
    let dot = (start..M).fold(0.0, |acc, i| acc + x[i] * v[i]);
    for i in start..M {
        x[i] -= 2.0 * dot * v[i];
    }
}

/// Reduce `a` to upper-triangular form in place, returning the reflectors.
///
/// Afterwards, the upper triangle of `a` holds `R`.  The entries below the
/// diagonal are left with rounding-level garbage rather than exact zeros;
/// [`decompose_qr_reduced`] never reads them.
///
/// This destroys the input; copy it first if it is still needed.
#[inline]
pub fn factorize_qr_householder<const M: usize, const N: usize>(
    a: &mut Matrix<M, N>,
) -> Reflectors<M, N> {
    let mut v = [Vector::zero(); N];
    for k in 0..N {
        v[k] = householder_vector(a, k, 0);
        reflect_columns(a, &v[k], k, 0);
    }
    Reflectors(v)
}

/// Compute `Q^T b` in place without forming `Q`.
#[inline]
pub fn implicit_q_trans_b<const M: usize, const N: usize>(
    b: &mut Vector<M>,
    v: &Reflectors<M, N>,
) {
    for k in 0..N {
        reflect_range(b, &v.0[k], k);
    }
}

/// Compute `Q x` in place without forming `Q`.
///
/// The reflectors are applied in the reverse of the order used by
/// [`implicit_q_trans_b`].
#[inline]
pub fn implicit_q_x<const M: usize, const N: usize>(
    x: &mut Vector<M>,
    v: &Reflectors<M, N>,
) {
    for k in (0..N).rev() {
        reflect_range(x, &v.0[k], k);
    }
}

impl<const M: usize, const N: usize> Reflectors<M, N> {
    /// `b <- Q^T b`.
    #[inline(always)]
    pub fn apply_q_trans(&self, b: &mut Vector<M>)
    { implicit_q_trans_b(b, self) }

    /// `x <- Q x`.
    #[inline(always)]
    pub fn apply_q(&self, x: &mut Vector<M>)
    { implicit_q_x(x, self) }

    /// Materialize the first `N` columns of `Q`.
    #[inline]
    pub fn thin_q(&self) -> Matrix<M, N> {
        Matrix::from_col_fn(|j| {
            let mut col = Vector::from_fn(|i| if i == j { 1.0 } else { 0.0 });
            self.apply_q(&mut col);
            col
        })
    }
}

/// Compute the thin QR decomposition of `a`. (`a` itself is not modified)
///
/// `M >= N` is expected; for `N > M` the trailing reflectors are zero and
/// `Q` is not meaningful.
///
/// The strictly lower part of `r` is exactly zero.
#[inline]
pub fn decompose_qr_reduced<const M: usize, const N: usize>(a: &Matrix<M, N>) -> ReducedQr<M, N> {
    let mut a = *a;
    let v = factorize_qr_householder(&mut a);

    let mut r = Matrix::<N, N>::zero();
    for j in 0..N {
        for i in 0..=j.min(M.saturating_sub(1)) {
            r[j][i] = a[j][i];
        }
    }
    let q = v.thin_q();
    ReducedQr { q, r }
}

// ---------------------------------------------------------------------------
