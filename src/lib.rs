/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense linear algebra on small fixed-size matrices, for the per-entity
//! kernels of an anisotropic mesh adaptation engine.
//!
//! Everything lives in the member crates; this one only gathers them.
//!
//! * [`array_types`]: `Vector`/`Matrix`, the packed symmetric tensor codec,
//!   and metric composition.
//! * [`linalg`]: Householder QR.
//! * [`soa_ops`]: per-entity access to flat bulk arrays, and parallel drivers.

pub extern crate meshalg_array_types as array_types;
pub extern crate meshalg_linalg as linalg;
pub extern crate meshalg_soa_ops as soa_ops;

pub use crate::array_types::{Real, Vector, Matrix};
pub use crate::array_types::{V1, V2, V3, V4, M11, M22, M33, M44};
pub use crate::array_types::{symm2vector, vector2symm, compose_metric};

pub use crate::linalg::{decompose_qr_reduced, factorize_qr_householder};
pub use crate::linalg::{implicit_q_trans_b, implicit_q_x};
pub use crate::linalg::{Reflectors, ReducedQr, DegenerateMatrixError};

pub use crate::soa_ops::{get_vector, set_vector, get_symm, set_symm, BulkError};
