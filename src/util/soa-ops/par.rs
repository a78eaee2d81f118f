/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Data-parallel drivers that apply a per-entity kernel over whole bulk arrays.
//!
//! Each entity is independent, so the work is split with rayon.  Lengths are
//! validated up front; a driver that returns `Err` has written nothing.

use meshalg_array_types::{Real, Vector, Matrix, SymmPack, compose_metric};
use rayon::prelude::*;

use crate::BulkError;
use crate::bulk::{entity_count, symm_stride, get_vector, set_vector, get_matrix, get_symm, set_symm};

fn matching_counts(
    input: &[Real], input_stride: usize,
    output: &[Real], output_stride: usize,
) -> Result<usize, BulkError> {
    let input = entity_count(input, input_stride)?;
    let output = entity_count(output, output_stride)?;
    match input == output {
        true => Ok(input),
        false => Err(BulkError::CountMismatch { input, output }),
    }
}

/// Map each `N`-vector of `input` to a `K`-vector of `output`.
pub fn par_map_vectors<const N: usize, const K: usize, F>(
    input: &[Real],
    output: &mut [Real],
    f: F,
) -> Result<(), BulkError>
where F: Fn(&Vector<N>) -> Vector<K> + Sync,
{
    let count = matching_counts(input, N, output, K)?;
    trace!("par_map_vectors: {} entities ({} -> {})", count, N, K);

    input.par_chunks(N)
        .zip(output.par_chunks_mut(K))
        .for_each(|(src, dest)| set_vector(dest, 0, &f(&get_vector(src, 0))));
    Ok(())
}

/// Map each packed symmetric tensor of `input` to one of `output`.
pub fn par_map_symms<S, T, F>(
    input: &[Real],
    output: &mut [Real],
    f: F,
) -> Result<(), BulkError>
where
    S: SymmPack,
    T: SymmPack,
    F: Fn(&S) -> T + Sync,
{
    let (n_in, n_out) = (symm_stride::<S>(), symm_stride::<T>());
    let count = matching_counts(input, n_in, output, n_out)?;
    trace!("par_map_symms: {} entities", count);

    input.par_chunks(n_in)
        .zip(output.par_chunks_mut(n_out))
        .for_each(|(src, dest)| set_symm(dest, 0, &f(&get_symm::<S>(src, 0))));
    Ok(())
}

/// Build a packed metric per entity from its rotation (`D x D`, column-major)
/// and its `D` desired edge lengths.
pub fn par_compose_metrics<const D: usize>(
    rotations: &[Real],
    lengths: &[Real],
    output: &mut [Real],
) -> Result<(), BulkError>
where Matrix<D, D>: SymmPack,
{
    let n_out = symm_stride::<Matrix<D, D>>();
    let n_rot = entity_count(rotations, D * D)?;
    let n_len = entity_count(lengths, D)?;
    if n_rot != n_len {
        return Err(BulkError::InputsDisagree { first: n_rot, second: n_len });
    }
    let count = matching_counts(lengths, D, output, n_out)?;
    trace!("par_compose_metrics: {} entities in {}D", count, D);

    rotations.par_chunks(D * D)
        .zip(lengths.par_chunks(D))
        .zip(output.par_chunks_mut(n_out))
        .for_each(|((r, h), dest)| {
            let r = get_matrix::<D, D>(r, 0);
            let h = get_vector::<D>(h, 0);
            set_symm(dest, 0, &compose_metric(&r, &h));
        });
    Ok(())
}
