/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Struct-of-arrays storage for per-entity tensor fields.
//!
//! A mesh stores, say, one metric per vertex as a single flat `[Real]` rather
//! than a `Vec` of matrices.  This crate moves values between that layout and
//! the fixed-size types of `meshalg-array-types`.

#[macro_use] extern crate log;
extern crate thiserror;
extern crate rayon;
extern crate slice_of_array;
extern crate meshalg_array_types;
#[cfg(test)] #[macro_use] extern crate meshalg_assert_close;

#[cfg(test)]
macro_rules! assert_matches {
    ($pat:pat, $expr:expr,)
    => { assert_matches!($pat, $expr) };
    ($pat:pat, $expr:expr)
    => { assert_matches!($pat, $expr, "actual {:?}", $expr) };
    ($pat:pat, $expr:expr, $($arg:expr),+ $(,)*)
    => {
        match $expr {
            $pat => {},
            _ => panic!(
                "assertion failed: {} ({})",
                stringify!(assert_matches!($pat, $expr)),
                format_args!($($arg),+))
        }
    };
}

pub use crate::bulk::{entity_count, symm_stride};
pub use crate::bulk::{get_vector, set_vector, get_matrix, set_matrix, get_symm, set_symm};
pub use crate::bulk::{repeat_vector, repeat_symm};
mod bulk;

pub use crate::par::{par_map_vectors, par_map_symms, par_compose_metrics};
mod par;

/// A bulk array whose length does not fit the layout it is read with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BulkError {
    #[error("bulk array stride must be nonzero")]
    ZeroStride,
    #[error("bulk array of length {len} is not a whole number of {stride}-element entities")]
    BadLength { len: usize, stride: usize },
    #[error("input has {input} entities but output has {output}")]
    CountMismatch { input: usize, output: usize },
    #[error("input arrays disagree on the entity count ({first} vs {second})")]
    InputsDisagree { first: usize, second: usize },
}
