/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reading and writing one entity's value in a flat bulk array.
//!
//! A bulk array stores one fixed-size value per mesh entity, back to back,
//! so entity `i` owns `a[i * stride .. (i + 1) * stride]`.  An index past the
//! end panics, just like slice indexing.

use meshalg_array_types::{Real, Vector, Matrix, SymmPack, SymmUnpack};
use slice_of_array::prelude::*;
use slice_of_array::IsSliceomorphic;

use crate::BulkError;

/// Stride of a bulk array of packed symmetric tensors of type `S`.
#[inline(always)]
pub fn symm_stride<S: SymmPack>() -> usize
{ <S::Packed as IsSliceomorphic>::LEN }

/// Number of entities in a bulk array, checking that the length is a
/// multiple of the stride.
pub fn entity_count(a: &[Real], stride: usize) -> Result<usize, BulkError> {
    match stride {
        0 => Err(BulkError::ZeroStride),
        _ if a.len() % stride != 0 => Err(BulkError::BadLength { len: a.len(), stride }),
        _ => Ok(a.len() / stride),
    }
}

#[inline]
pub fn get_vector<const N: usize>(a: &[Real], i: usize) -> Vector<N>
{ a[i * N..(i + 1) * N].to_array() }

#[inline]
pub fn set_vector<const N: usize>(a: &mut [Real], i: usize, v: &Vector<N>)
{ a[i * N..(i + 1) * N].copy_from_slice(&v[..]) }

/// Read entity `i`'s `M x N` matrix, stored column-major.
#[inline]
pub fn get_matrix<const M: usize, const N: usize>(a: &[Real], i: usize) -> Matrix<M, N> {
    let data = &a[i * M * N..(i + 1) * M * N];
    Matrix::from_col_fn(|j| data[j * M..(j + 1) * M].to_array())
}

#[inline]
pub fn set_matrix<const M: usize, const N: usize>(a: &mut [Real], i: usize, m: &Matrix<M, N>) {
    let data = &mut a[i * M * N..(i + 1) * M * N];
    data.copy_from_slice(m[..].flat());
}

/// Read entity `i`'s packed symmetric tensor and unpack it.
#[inline]
pub fn get_symm<S: SymmPack>(a: &[Real], i: usize) -> S {
    let n = symm_stride::<S>();
    let packed: S::Packed = a[i * n..(i + 1) * n].to_array();
    packed.vector2symm()
}

/// Pack a symmetric tensor and write it as entity `i`.
#[inline]
pub fn set_symm<S: SymmPack>(a: &mut [Real], i: usize, symm: &S) {
    let n = symm_stride::<S>();
    let packed = symm.symm2vector();
    // named explicitly, since slices now have an inherent `as_mut_array` of their own
    *SliceArrayExt::as_mut_array::<S::Packed>(&mut a[i * n..(i + 1) * n]) = packed;
}

/// A bulk array holding `n` copies of one vector.
pub fn repeat_vector<const N: usize>(n: usize, v: &Vector<N>) -> Vec<Real>
{ vec![*v; n].flat().to_vec() }

/// A bulk array holding `n` copies of one symmetric tensor, packed.
pub fn repeat_symm<S: SymmPack>(n: usize, symm: &S) -> Vec<Real>
{ vec![symm.symm2vector(); n].flat().to_vec() }

#[cfg(test)]
mod tests {
    use super::*;
    use meshalg_array_types::{M11, M22, M33, M44, V2, vector_2, vector_3, matrix_2x2, matrix_3x3, symm2vector};

    #[test]
    fn vector_slots() {
        let mut a = vec![0.0; 9];
        set_vector(&mut a, 1, &vector_3(1.0, 2.0, 3.0));
        assert_eq!(a, vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0]);
        assert_eq!(get_vector::<3>(&a, 1), vector_3(1.0, 2.0, 3.0));
        assert_eq!(get_vector::<3>(&a, 2), vector_3(0.0, 0.0, 0.0));

        // the same data viewed with a different stride
        assert_eq!(get_vector::<2>(&a, 2), vector_2(2.0, 3.0));
    }

    #[test]
    #[should_panic]
    fn vector_out_of_range() {
        let a = vec![0.0; 6];
        get_vector::<3>(&a, 2);
    }

    #[test]
    fn symm_slots() {
        let s = matrix_3x3(
            1.0, 4.0, 6.0,
            4.0, 2.0, 5.0,
            6.0, 5.0, 3.0,
        );
        let mut a = vec![0.0; 12];
        set_symm(&mut a, 1, &s);
        assert_eq!(&a[..6], &[0.0; 6]);
        assert_eq!(&a[6..], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(get_symm::<M33>(&a, 1), s);
        assert_eq!(get_symm::<M33>(&a, 0), M33::zero());
    }

    #[test]
    fn symm_slots_every_size() {
        let mut a = vec![0.0; 2 * 10];
        let s = M44::from_fn(|r, c| (1 + r + c) as Real);
        set_symm(&mut a, 1, &s);
        assert_eq!(&a[..10], &[0.0; 10]);
        assert_eq!(get_symm::<M44>(&a, 1), s);

        let mut a = vec![0.0; 3];
        set_symm(&mut a, 2, &M11::identity());
        assert_eq!(a, vec![0.0, 0.0, 1.0]);
        assert_eq!(get_symm::<M11>(&a, 2), M11::identity());
    }

    #[test]
    fn symm_stride_matches_dofs() {
        assert_eq!(symm_stride::<M22>(), 3);
        assert_eq!(symm_stride::<M33>(), 6);
    }

    #[test]
    fn matrix_slots_are_column_major() {
        let m = Matrix::<2, 3>::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]);
        let mut a = vec![0.0; 12];
        set_matrix(&mut a, 1, &m);
        assert_eq!(&a[6..], &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(get_matrix::<2, 3>(&a, 1), m);
    }

    #[test]
    fn repeat() {
        let s = matrix_2x2(
            1.0, 3.0,
            3.0, 2.0,
        );
        let a = repeat_symm(3, &s);
        assert_eq!(a, vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
        for i in 0..3 {
            assert_eq!(get_symm::<M22>(&a, i), s);
        }
        assert_eq!(symm2vector(&s).into_array(), [1.0, 2.0, 3.0]);

        let v: V2 = vector_2(5.0, 6.0);
        assert_eq!(repeat_vector(2, &v), vec![5.0, 6.0, 5.0, 6.0]);
        assert!(repeat_vector(0, &v).is_empty());
    }

    #[test]
    fn count() {
        assert_eq!(entity_count(&[0.0; 12], 6), Ok(2));
        assert_eq!(entity_count(&[], 3), Ok(0));
        assert_eq!(entity_count(&[0.0; 7], 3), Err(BulkError::BadLength { len: 7, stride: 3 }));
        assert_eq!(entity_count(&[0.0; 7], 0), Err(BulkError::ZeroStride));
    }
}
