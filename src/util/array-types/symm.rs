/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Packed storage of symmetric tensors.
//!
//! A `d x d` symmetric matrix has `d(d+1)/2` independent entries.  They are
//! packed band by band: the main diagonal from top to bottom, then the first
//! sub-diagonal from top to bottom, then the second, and so on.  For `d = 3`:
//!
//! ```text
//! [S00, S11, S22, S10, S21, S20]
//! ```
//!
//! This order is a storage format shared with everything that reads or
//! writes bulk tensor fields, and must never change.

use crate::types::*;

use slice_of_array::IsSliceomorphic;

/// Number of independent entries in a `dim x dim` symmetric matrix.
#[inline(always)]
pub const fn symm_dofs(dim: usize) -> usize
{ (dim + 1) * dim / 2 }

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Pack a symmetric matrix into a vector of its independent entries.
///
/// Only the lower triangle is read.
#[inline(always)]
pub fn symm2vector<S: SymmPack>(symm: &S) -> S::Packed
{ SymmPack::symm2vector(symm) }

/// Unpack a vector of independent entries into a symmetric matrix.
///
/// The output is exactly symmetric.
#[inline(always)]
pub fn vector2symm<V: SymmUnpack>(packed: &V) -> SymmT<V>
{ SymmUnpack::vector2symm(packed) }

/// Output of `vector2symm`. A square matrix.
pub type SymmT<V> = <V as SymmUnpack>::Symm;
/// Output of `symm2vector`. A vector of length `symm_dofs(d)`.
pub type PackedT<S> = <S as SymmPack>::Packed;

// -------------------------- END PUBLIC API ---------------------------------

/// Implementation detail of the free function `symm2vector`.
///
/// Implemented for `Matrix<d, d>` with `d` in `1..=4`.
pub trait SymmPack: Copy {
    /// The packed form, a `Vector<symm_dofs(d)>`.
    type Packed: SymmUnpack<Symm = Self> + IsSliceomorphic<Element = Real> + Copy;

    fn symm2vector(&self) -> Self::Packed;
}

/// Implementation detail of the free function `vector2symm`.
pub trait SymmUnpack: Copy {
    type Symm: SymmPack;

    fn vector2symm(&self) -> Self::Symm;
}

#[inline]
fn pack<const D: usize, const P: usize>(symm: &Matrix<D, D>) -> Vector<P> {
    debug_assert_eq!(P, symm_dofs(D));
    let mut packed = Vector::zero();
    let mut k = 0;
    for band in 0..D {
        for c in 0..D - band {
            packed[k] = symm[c][c + band];
            k += 1;
        }
    }
    packed
}

#[inline]
fn unpack<const D: usize, const P: usize>(packed: &Vector<P>) -> Matrix<D, D> {
    debug_assert_eq!(P, symm_dofs(D));
    let mut symm = Matrix::zero();
    let mut k = 0;
    for band in 0..D {
        for c in 0..D - band {
            symm[c][c + band] = packed[k];
            symm[c + band][c] = packed[k];
            k += 1;
        }
    }
    symm
}

macro_rules! impl_symm {
    ($($d:literal => $dofs:literal,)*) => {$(
        impl SymmPack for Matrix<$d, $d> {
            type Packed = Vector<$dofs>;

            #[inline]
            fn symm2vector(&self) -> Self::Packed
            { pack(self) }
        }

        impl SymmUnpack for Vector<$dofs> {
            type Symm = Matrix<$d, $d>;

            #[inline]
            fn vector2symm(&self) -> Self::Symm
            { unpack(self) }
        }
    )*};
}

impl_symm!{
    1 => 1,
    2 => 3,
    3 => 6,
    4 => 10,
}

// ---------------------------------------------------------------------------
