/* ************************************************************************ **
** This file is part of meshalg, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::types::*;

use num_traits::Zero;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

impl<const M: usize> Vector<M> {
    /// Get a zero vector.
    #[inline(always)]
    pub fn zero() -> Self
    { Vector([0.0; M]) }

    /// Construct a fixed-size vector from a function on indices.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> Real,
    { Vector(std::array::from_fn(f)) }

    /// Get a basis vector.
    #[inline]
    pub fn axis_unit(i: usize) -> Self {
        let mut v = Self::zero();
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", M, i)) = 1.0;
        v
    }

    /// Get the inner product of two vectors.
    ///
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline]
    pub fn dot(&self, other: &Self) -> Real
    { (0..M).fold(0.0, |s, i| s + self[i] * other[i]) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> Real
    { self.dot(self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> Real
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    #[inline(always)]
    pub fn unit(&self) -> Self
    { self / self.norm() }

    /// Perform elementwise multiplication, or multiplication of a vector by a diagonal
    /// matrix.
    #[inline(always)]
    pub fn mul_diag(&self, other: &Self) -> Self
    { Self::from_fn(|i| self[i] * other[i]) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where F: FnMut(Real) -> Real,
    { Vector(self.0.map(f)) }

    /// Cast into a plain `[Real; M]`.
    #[inline(always)]
    pub fn into_array(self) -> [Real; M]
    { self.0 }

    /// Borrow as a plain `&[Real; M]`.
    #[inline(always)]
    pub fn as_array(&self) -> &[Real; M]
    { &self.0 }
}

impl V3 {
    /// Cross-product. Only defined on 3-dimensional vectors.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vector([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Inner product of vectors.
///
/// This is basically just `Vector::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<const M: usize>(a: &Vector<M>, b: &Vector<M>) -> Real
{ a.dot(b) }

/// Cross product of two 3-vectors.
#[inline(always)]
pub fn cross(a: &V3, b: &V3) -> V3
{ a.cross(b) }

#[inline(always)]
pub fn vector_1(x: Real) -> V1
{ Vector([x]) }

#[inline(always)]
pub fn vector_2(x: Real, y: Real) -> V2
{ Vector([x, y]) }

#[inline(always)]
pub fn vector_3(x: Real, y: Real, z: Real) -> V3
{ Vector([x, y, z]) }

/// `x * x`
#[inline(always)]
pub fn square(x: Real) -> Real
{ x * x }

/// `+1` for non-negative input (including `+0.0` and `-0.0`), `-1` otherwise.
///
/// Unlike `f64::signum`, zero maps to `+1`.
#[inline(always)]
pub fn sign(x: Real) -> Real
{ if x >= 0.0 { 1.0 } else { -1.0 } }

// -------------------------- END PUBLIC API ---------------------------------

impl<const M: usize> Zero for Vector<M> {
    #[inline]
    fn zero() -> Self
    { Vector::zero() }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

impl<const M: usize> std::iter::Sum for Vector<M> {
    fn sum<I: Iterator<Item=Vector<M>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

impl<'a, const M: usize> std::iter::Sum<&'a Vector<M>> for Vector<M> {
    fn sum<I: Iterator<Item=&'a Vector<M>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

// ---------------------------------------------------------------------------
