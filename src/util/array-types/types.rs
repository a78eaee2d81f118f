/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut};
use std::fmt;

/// The scalar type of every kernel in this library.
pub type Real = f64;

// ---------------------------------------------------------------------------

/// A fixed-length vector with operations for linear algebra.
///
/// It is a plain value type.  It dereferences to `[Real; M]`, so it can be
/// indexed and iterated like the array it wraps.
#[derive(Copy, Clone, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Vector<const M: usize>(pub [Real; M]);

/// A fixed-size dense matrix with `M` rows and `N` columns.
///
/// **Storage is column-major.** The matrix is a container of `N` column
/// vectors, so `a[j]` is column `j` and `a[j][i]` is the entry at row `i`,
/// column `j`.  Every consumer of this type relies on that layout.
#[derive(Copy, Clone, PartialEq)]
#[repr(transparent)]
pub struct Matrix<const M: usize, const N: usize>(pub [Vector<M>; N]);

pub type V1 = Vector<1>;
pub type V2 = Vector<2>;
pub type V3 = Vector<3>;
pub type V4 = Vector<4>;

/// A square dense 1x1 matrix.
pub type M11 = Matrix<1, 1>;
/// A square dense 2x2 matrix.
pub type M22 = Matrix<2, 2>;
/// A square dense 3x3 matrix.
pub type M33 = Matrix<3, 3>;
/// A square dense 4x4 matrix.
pub type M44 = Matrix<4, 4>;

// ---------------------------------------------------------------------------
// Both types behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

macro_rules! impl_array_like {
    (
        [$($generics:tt)*] $Ty:ty => $Elem:ty, $n:expr
    ) => {
        impl<$($generics)*> Deref for $Ty {
            type Target = [$Elem; $n];

            #[inline(always)]
            fn deref(&self) -> &Self::Target
            { &self.0 }
        }

        impl<$($generics)*> DerefMut for $Ty {
            #[inline(always)]
            fn deref_mut(&mut self) -> &mut Self::Target
            { &mut self.0 }
        }

        // Fix a paper cut not solved by Deref, which is that many methods
        // take `I: IntoIterator`.
        impl<'a, $($generics)*> IntoIterator for &'a $Ty {
            type Item = &'a $Elem;
            type IntoIter = Iter<'a, $Elem>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter() }
        }

        impl<'a, $($generics)*> IntoIterator for &'a mut $Ty {
            type Item = &'a mut $Elem;
            type IntoIter = IterMut<'a, $Elem>;

            #[inline(always)]
            fn into_iter(self) -> Self::IntoIter
            { self.0.iter_mut() }
        }

        // forward the debug impl without a surrounding "Vector(...)", so that
        // debug output of a matrix is a plain nested list of columns.
        impl<$($generics)*> fmt::Debug for $Ty {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
            { fmt::Debug::fmt(&self.0, f) }
        }
    };
}

impl_array_like!{ [const M: usize] Vector<M> => Real, M }
impl_array_like!{ [const M: usize, const N: usize] Matrix<M, N> => Vector<M>, N }

impl<const M: usize> Default for Vector<M> {
    #[inline(always)]
    fn default() -> Self
    { Vector([0.0; M]) }
}

impl<const M: usize, const N: usize> Default for Matrix<M, N> {
    #[inline(always)]
    fn default() -> Self
    { Matrix([Vector::default(); N]) }
}

impl<const M: usize> From<[Real; M]> for Vector<M> {
    #[inline(always)]
    fn from(arr: [Real; M]) -> Self
    { Vector(arr) }
}

impl<const M: usize> From<Vector<M>> for [Real; M] {
    #[inline(always)]
    fn from(v: Vector<M>) -> Self
    { v.0 }
}

// slice-of-array integration, so that flat bulk arrays can be viewed as
// `[Vector<M>]` and back.
unsafe impl<const M: usize> slice_of_array::IsSliceomorphic for Vector<M> {
    type Element = Real;
    const LEN: usize = M;
}

// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Serialize, Serializer, Deserialize, Deserializer};
    use serde::de::Error;
    use std::convert::TryInto;

    impl<const M: usize> Serialize for Vector<M> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
        { serializer.collect_seq(self.iter()) }
    }

    impl<'de, const M: usize> Deserialize<'de> for Vector<M> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let elems = Vec::<Real>::deserialize(deserializer)?;
            let len = elems.len();
            elems.try_into()
                .map(Vector)
                .map_err(|_| D::Error::invalid_length(len, &&*format!("a vector of length {}", M)))
        }
    }

    impl<const M: usize, const N: usize> Serialize for Matrix<M, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
        { serializer.collect_seq(self.iter()) }
    }

    impl<'de, const M: usize, const N: usize> Deserialize<'de> for Matrix<M, N> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let cols = Vec::<Vector<M>>::deserialize(deserializer)?;
            let len = cols.len();
            cols.try_into()
                .map(Matrix)
                .map_err(|_| D::Error::invalid_length(len, &&*format!("a matrix with {} columns", N)))
        }
    }
}
