/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Metric tensors for anisotropic mesh adaptation.
//!
//! A metric is a symmetric positive-definite tensor `R * diag(l) * R^T`,
//! where the columns of `R` are the principal directions and each
//! eigenvalue `l[i]` is `1 / h[i]^2` for a desired edge length `h[i]`
//! along that direction.

use crate::types::*;
use crate::methods_m::diagonal;
use crate::methods_v::square;

/// Metric eigenvalue for a desired edge length.
///
/// No check is made that `h > 0`; zero gives infinity.
#[inline(always)]
pub fn metric_eigenvalue_from_length(h: Real) -> Real
{ 1.0 / square(h) }

/// Elementwise `1 / h[i]^2`.
#[inline]
pub fn metric_eigenvalues<const D: usize>(h: &Vector<D>) -> Vector<D>
{ h.map(metric_eigenvalue_from_length) }

/// Compose `r * diag(metric_eigenvalues(h)) * r^T`.
///
/// The columns of `r` must be orthonormal and the lengths positive;
/// neither is checked.
#[inline]
pub fn compose_metric<const D: usize>(r: &Matrix<D, D>, h: &Vector<D>) -> Matrix<D, D> {
    let l = metric_eigenvalues(h);
    r * diagonal(&l) * r.t()
}
