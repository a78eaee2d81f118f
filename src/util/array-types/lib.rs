/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fixed-size vectors and matrices for per-entity mesh kernels.
//!
//! Everything here is a `Copy` value on the stack.  There is no heap
//! allocation and no global state, so any function in this crate can be
//! called from inside the body of a data-parallel loop.

#[cfg(feature = "serde")]
extern crate serde;
extern crate num_traits;
extern crate slice_of_array;

#[cfg(test)] extern crate rand;
#[cfg(test)] #[macro_use] extern crate meshalg_assert_close;
#[cfg(all(test, feature = "serde"))] extern crate serde_json;

pub use crate::types::{Real, Vector, Matrix};
pub use crate::types::{V1, V2, V3, V4, M11, M22, M33, M44};
pub use crate::types::{Iter, IterMut};
mod types;

mod ops;

pub use crate::methods_v::{dot, cross, vector_1, vector_2, vector_3, square, sign};
mod methods_v;

pub use crate::methods_m::{transpose, diagonal, cross_matrix};
pub use crate::methods_m::{matrix_1x1, matrix_2x2, matrix_3x3};
mod methods_m;

pub use crate::symm::{symm_dofs, symm2vector, vector2symm};
pub use crate::symm::{SymmPack, SymmUnpack, SymmT, PackedT};
mod symm;

pub use crate::metric::{metric_eigenvalue_from_length, metric_eigenvalues, compose_metric};
mod metric;
