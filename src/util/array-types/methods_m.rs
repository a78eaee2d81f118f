/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Small fixed-size matrix types, compatible with `Vector`.
//!
//! This library uses a column-based formalism; matrices are containers of
//! column vectors, and vectors are column vectors (so matrix-vector
//! multiplication has the matrix on the left).
//!
//! Constructors that take nested literal arrays come in two flavors:
//! `from_cols` takes the data exactly as it is stored, while `from_rows`
//! takes it the way it is usually written on paper and reorders it.

use crate::types::*;

use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<const M: usize, const N: usize> Matrix<M, N> {
    /// Construct the zero matrix.
    #[inline(always)]
    pub fn zero() -> Self
    { Matrix([Vector::zero(); N]) }

    /// Construct a matrix from a function of `(row, col)`.
    #[inline]
    pub fn from_fn<F>(mut f: F) -> Self
    where F: FnMut(usize, usize) -> Real,
    { Matrix(std::array::from_fn(|c| Vector::from_fn(|r| f(r, c)))) }

    /// Construct a matrix from a function producing each column.
    #[inline]
    pub fn from_col_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> Vector<M>,
    { Matrix(std::array::from_fn(f)) }

    /// Construct a matrix from a 2D array of columns. (the storage order)
    #[inline]
    pub fn from_cols(cols: [[Real; M]; N]) -> Self
    { Matrix(cols.map(Vector)) }

    /// Construct a matrix from a 2D array of rows.
    ///
    /// This is the order in which matrix literals are normally written, and
    /// it is reordered into column-major storage.
    #[inline]
    pub fn from_rows(rows: [[Real; N]; M]) -> Self
    { Self::from_fn(|r, c| rows[r][c]) }

    /// The identity matrix.
    ///
    /// Non-square shapes get ones on the leading diagonal.
    #[inline]
    pub fn identity() -> Self
    { Self::identity_block(M, N) }

    /// Ones on the diagonal of the leading `m x n` block, zero elsewhere.
    ///
    /// This lets a caller that only knows its true dimension at runtime
    /// build an identity inside a larger fixed-size matrix.
    #[inline]
    pub fn identity_block(m: usize, n: usize) -> Self
    { Self::from_fn(|r, c| if r == c && r < m && c < n { 1.0 } else { 0.0 }) }

    /// Get column `j` (a copy of `self[j]`).
    #[inline(always)]
    pub fn col(&self, j: usize) -> Vector<M>
    { self[j] }

    /// Get row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<N>
    { Vector::from_fn(|j| self[j][i]) }

    /// Matrix transpose.
    #[inline]
    pub fn t(&self) -> Matrix<N, M>
    { Matrix::from_fn(|r, c| self[r][c]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<F>(self, mut f: F) -> Self
    where F: FnMut(Real) -> Real,
    { Matrix(self.0.map(|col| col.map(&mut f))) }

    /// Cast into a plain `[[Real; M]; N]` (an array of columns).
    #[inline]
    pub fn into_array(self) -> [[Real; M]; N]
    { self.0.map(Vector::into_array) }

    /// Cast into a plain `&[[Real; M]; N]` (an array of columns).
    #[inline(always)]
    pub fn as_array(&self) -> &[[Real; M]; N] {
        // Vector<M> is repr(transparent) over [Real; M].
        unsafe { &*(self as *const Self as *const [[Real; M]; N]) }
    }
}

/// Matrix transpose, as a free function.
#[inline(always)]
pub fn transpose<const M: usize, const N: usize>(a: &Matrix<M, N>) -> Matrix<N, M>
{ a.t() }

/// Square matrix with `v` on the diagonal.
#[inline]
pub fn diagonal<const M: usize>(v: &Vector<M>) -> Matrix<M, M>
{ Matrix::from_fn(|r, c| if r == c { v[r] } else { 0.0 }) }

/// The skew-symmetric matrix of the linear map `b -> a x b`.
///
/// `cross_matrix(a) * b == cross(a, b)`
#[inline]
pub fn cross_matrix(a: &V3) -> M33 {
    matrix_3x3(
          0.0, -a[2],  a[1],
         a[2],   0.0, -a[0],
        -a[1],  a[0],   0.0,
    )
}

/// A 1x1 matrix.
#[inline(always)]
pub fn matrix_1x1(a: Real) -> M11
{ Matrix([Vector([a])]) }

/// A 2x2 matrix, from entries in row-first order.
#[inline(always)]
pub fn matrix_2x2(a: Real, b: Real, c: Real, d: Real) -> M22
{ M22::from_rows([[a, b], [c, d]]) }

/// A 3x3 matrix, from entries in row-first order.
#[inline(always)]
#[allow(clippy::too_many_arguments)]
pub fn matrix_3x3(
    a: Real, b: Real, c: Real,
    d: Real, e: Real, f: Real,
    g: Real, h: Real, i: Real,
) -> M33
{ M33::from_rows([[a, b, c], [d, e, f], [g, h, i]]) }

// -------------------------- END PUBLIC API ---------------------------------

impl<const M: usize, const N: usize> Zero for Matrix<M, N> {
    #[inline]
    fn zero() -> Self
    { Matrix::zero() }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

impl<const M: usize> One for Matrix<M, M> {
    #[inline(always)]
    fn one() -> Self
    { Matrix::identity() }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cross, vector_3};

    #[test]
    fn storage_is_column_major() {
        let m = Matrix::<2, 3>::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        assert_eq!(m.into_array(), [[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
        assert_eq!(m[2][0], 3.0);
        assert_eq!(m.row(1), Vector([4.0, 5.0, 6.0]));
        assert_eq!(m.col(1), Vector([2.0, 5.0]));
        assert_eq!(m, Matrix::from_cols([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(m.as_array(), &m.into_array());
    }

    #[test]
    fn literal_constructors() {
        assert_eq!(matrix_2x2(1.0, 2.0, 3.0, 4.0)[0], Vector([1.0, 3.0]));
        let m = matrix_3x3(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m[0], vector_3(1.0, 4.0, 7.0));
        assert_eq!(m[2], vector_3(3.0, 6.0, 9.0));
        assert_eq!(matrix_1x1(2.0)[0][0], 2.0);
    }

    #[test]
    fn transpose_swaps_indices() {
        let m = Matrix::<2, 3>::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        let t: Matrix<3, 2> = transpose(&m);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t[i][j], m[j][i]);
            }
        }
        assert_eq!(t.t(), m);
    }

    #[test]
    fn test_zero_identity() {
        assert!(M22::zero().is_zero());
        assert!(!M22::identity().is_zero());
        assert_eq!(M33::identity(), M33::one());
        assert_eq!(M33::identity(), diagonal(&vector_3(1.0, 1.0, 1.0)));
        assert_eq!(
            Matrix::<2, 3>::identity(),
            Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]),
        );
    }

    #[test]
    fn identity_block() {
        let m = M33::identity_block(2, 2);
        assert_eq!(m, diagonal(&vector_3(1.0, 1.0, 0.0)));
        assert_eq!(M33::identity_block(3, 3), M33::identity());
        assert!(M22::identity_block(0, 0).is_zero());
    }

    #[test]
    fn diagonal_is_diagonal() {
        let d = diagonal(&vector_3(1.0, 2.0, 3.0));
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { (i + 1) as Real } else { 0.0 };
                assert_eq!(d[j][i], expected);
            }
        }
    }

    #[test]
    fn cross_matrix_matches_cross() {
        for _ in 0..10 {
            let a: V3 = Vector(::rand::random());
            let b: V3 = Vector(::rand::random());
            assert_close!(
                abs=1e-14,
                (cross_matrix(&a) * b).into_array(),
                cross(&a, &b).into_array(),
            );
        }
        let c = cross_matrix(&vector_3(1.0, 2.0, 3.0));
        assert_eq!(c.t(), -c);
    }
}
