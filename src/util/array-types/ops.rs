/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Add, Sub, AddAssign, SubAssign, Neg};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;

use crate::types::*;

// ---------------------------------------------------------------------------
// Binary operators are implemented once on values (the types are Copy),
// and then forwarded for every combination of references.

macro_rules! forward_ref_binop {
    (
        [$($generics:tt)*] impl $Op:ident, $op:ident for $Lhs:ty, $Rhs:ty => $Out:ty
    ) => {
        impl<'a, $($generics)*> $Op<$Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, other: $Rhs) -> $Out
            { $Op::$op(*self, other) }
        }

        impl<'b, $($generics)*> $Op<&'b $Rhs> for $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, other: &'b $Rhs) -> $Out
            { $Op::$op(self, *other) }
        }

        impl<'a, 'b, $($generics)*> $Op<&'b $Rhs> for &'a $Lhs {
            type Output = $Out;

            #[inline(always)]
            fn $op(self, other: &'b $Rhs) -> $Out
            { $Op::$op(*self, *other) }
        }
    };
}

// ---------------------------------------------------------------------------
// vector-vector ops

impl<const M: usize> Add for Vector<M> {
    type Output = Vector<M>;

    #[inline]
    fn add(self, other: Vector<M>) -> Self::Output
    { Vector::from_fn(|k| self[k] + other[k]) }
}

impl<const M: usize> Sub for Vector<M> {
    type Output = Vector<M>;

    #[inline]
    fn sub(self, other: Vector<M>) -> Self::Output
    { Vector::from_fn(|k| self[k] - other[k]) }
}

impl<const M: usize> Neg for Vector<M> {
    type Output = Vector<M>;

    #[inline]
    fn neg(self) -> Self::Output
    { Vector::from_fn(|k| -self[k]) }
}

forward_ref_binop!{ [const M: usize] impl Add, add for Vector<M>, Vector<M> => Vector<M> }
forward_ref_binop!{ [const M: usize] impl Sub, sub for Vector<M>, Vector<M> => Vector<M> }

// ---------------------------------------------------------------------------
// vector-scalar ops

impl<const M: usize> Mul<Real> for Vector<M> {
    type Output = Vector<M>;

    #[inline]
    fn mul(self, scalar: Real) -> Self::Output
    { Vector::from_fn(|k| self[k] * scalar) }
}

// scalar * vector
impl<const M: usize> Mul<Vector<M>> for Real {
    type Output = Vector<M>;

    #[inline(always)]
    fn mul(self, vector: Vector<M>) -> Self::Output
    { vector * self }
}

impl<const M: usize> Div<Real> for Vector<M> {
    type Output = Vector<M>;

    #[inline]
    fn div(self, scalar: Real) -> Self::Output
    { Vector::from_fn(|k| self[k] / scalar) }
}

forward_ref_binop!{ [const M: usize] impl Mul, mul for Vector<M>, Real => Vector<M> }
forward_ref_binop!{ [const M: usize] impl Div, div for Vector<M>, Real => Vector<M> }

// ---------------------------------------------------------------------------
// matrix-matrix and matrix-scalar ops (elementwise)

impl<const M: usize, const N: usize> Add for Matrix<M, N> {
    type Output = Matrix<M, N>;

    #[inline]
    fn add(self, other: Matrix<M, N>) -> Self::Output
    { Matrix::from_col_fn(|j| self[j] + other[j]) }
}

impl<const M: usize, const N: usize> Sub for Matrix<M, N> {
    type Output = Matrix<M, N>;

    #[inline]
    fn sub(self, other: Matrix<M, N>) -> Self::Output
    { Matrix::from_col_fn(|j| self[j] - other[j]) }
}

impl<const M: usize, const N: usize> Neg for Matrix<M, N> {
    type Output = Matrix<M, N>;

    #[inline]
    fn neg(self) -> Self::Output
    { Matrix::from_col_fn(|j| -self[j]) }
}

impl<const M: usize, const N: usize> Mul<Real> for Matrix<M, N> {
    type Output = Matrix<M, N>;

    #[inline]
    fn mul(self, scalar: Real) -> Self::Output
    { Matrix::from_col_fn(|j| self[j] * scalar) }
}

impl<const M: usize, const N: usize> Mul<Matrix<M, N>> for Real {
    type Output = Matrix<M, N>;

    #[inline(always)]
    fn mul(self, matrix: Matrix<M, N>) -> Self::Output
    { matrix * self }
}

impl<const M: usize, const N: usize> Div<Real> for Matrix<M, N> {
    type Output = Matrix<M, N>;

    #[inline]
    fn div(self, scalar: Real) -> Self::Output
    { Matrix::from_col_fn(|j| self[j] / scalar) }
}

forward_ref_binop!{ [const M: usize, const N: usize] impl Add, add for Matrix<M, N>, Matrix<M, N> => Matrix<M, N> }
forward_ref_binop!{ [const M: usize, const N: usize] impl Sub, sub for Matrix<M, N>, Matrix<M, N> => Matrix<M, N> }
forward_ref_binop!{ [const M: usize, const N: usize] impl Mul, mul for Matrix<M, N>, Real => Matrix<M, N> }
forward_ref_binop!{ [const M: usize, const N: usize] impl Div, div for Matrix<M, N>, Real => Matrix<M, N> }

// ---------------------------------------------------------------------------
// matrix products

// matrix * column vector
//
// This is a weighted sum of the columns of the matrix.
impl<const M: usize, const N: usize> Mul<Vector<N>> for Matrix<M, N> {
    type Output = Vector<M>;

    #[inline]
    fn mul(self, vector: Vector<N>) -> Self::Output {
        let matrix = self;
        (0..N).fold(Vector::zero(), |acc, j| acc + matrix[j] * vector[j])
    }
}

// matrix * matrix
//
// Column j of the product is `a * b[j]`.
impl<const M: usize, const P: usize, const N: usize> Mul<Matrix<P, N>> for Matrix<M, P> {
    type Output = Matrix<M, N>;

    #[inline]
    fn mul(self, other: Matrix<P, N>) -> Self::Output
    { Matrix::from_col_fn(|j| self * other[j]) }
}

forward_ref_binop!{ [const M: usize, const N: usize] impl Mul, mul for Matrix<M, N>, Vector<N> => Vector<M> }
forward_ref_binop!{
    [const M: usize, const P: usize, const N: usize]
    impl Mul, mul for Matrix<M, P>, Matrix<P, N> => Matrix<M, N>
}

// ---------------------------------------------------------------------------
// assign ops (general)

macro_rules! impl_assign_ops {
    ([$($generics:tt)*] $Ty:ty) => {
        // x += y;
        impl<B, $($generics)*> AddAssign<B> for $Ty where $Ty: Add<B, Output=$Ty> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = *self + rhs; }
        }

        // x -= y;
        impl<B, $($generics)*> SubAssign<B> for $Ty where $Ty: Sub<B, Output=$Ty> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = *self - rhs; }
        }

        // x *= scalar;
        impl<B, $($generics)*> MulAssign<B> for $Ty where $Ty: Mul<B, Output=$Ty> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = *self * rhs; }
        }

        // x /= scalar;
        impl<B, $($generics)*> DivAssign<B> for $Ty where $Ty: Div<B, Output=$Ty> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = *self / rhs; }
        }
    };
}

impl_assign_ops!{ [const M: usize] Vector<M> }
impl_assign_ops!{ [const M: usize, const N: usize] Matrix<M, N> }

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
macro_rules! impl_fmt {
    (@one [$($generics:tt)*] $Ty:ty => $Format:ident) => {
        impl<$($generics)*> fmt::$Format for $Ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                let mut first = true;
                for x in self {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    fmt::$Format::fmt(x, f)?;
                }
                write!(f, "]")
            }
        }
    };
    ($generics:tt $Ty:ty => [$($Format:ident)*]) => {$(
        impl_fmt!{@one $generics $Ty => $Format}
    )*};
}

impl_fmt!{ [const M: usize] Vector<M> => [Display LowerExp UpperExp] }
impl_fmt!{ [const M: usize, const N: usize] Matrix<M, N> => [Display LowerExp UpperExp] }

// ---------------------------------------------------------------------------
