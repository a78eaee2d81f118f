//! `assert_close!`, for comparing floating point results in tests.
//!
//! ```text
//! assert_close!(a, b);                          // rel = DEFAULT_NONZERO_TOL, abs = 0
//! assert_close!(abs=1e-12, a, b);
//! assert_close!(rel=1e-8, abs=1e-8, a, b, "at step {}", i);
//! ```
//!
//! Anything implementing [`CheckClose`] can be compared.  That covers `f64`,
//! slices, `Vec`s, and arrays nested to any depth, so fixed-size vectors and
//! matrices are compared through their `into_array()` forms.

extern crate thiserror;
use std::fmt;

/// Relative tolerance used when `rel=` is not given.
pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {
        $crate::__assert_close_parse!{[$crate::Tolerances::default()] $($t)*}
    };
}

/// `assert_close!` that is skipped in release builds.
#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::assert_close!{$($t)*}
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __assert_close_parse {
    (@check [$tol:expr] $a:expr, $b:expr, $($fmt:tt)+) => {{
        let tol: $crate::Tolerances = $tol;
        let (left, right) = (&$a, &$b);
        if let Err(e) = $crate::CheckClose::check_close(left, right, tol) {
            panic!(
                "{} (rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                format_args!($($fmt)+), tol.rel, tol.abs, left, right, e,
            );
        }
    }};
    ([$tol:expr] rel=$rel:expr, $($rest:tt)*) => {
        $crate::__assert_close_parse!{[$crate::Tolerances { rel: $rel, ..$tol }] $($rest)*}
    };
    ([$tol:expr] abs=$abs:expr, $($rest:tt)*) => {
        $crate::__assert_close_parse!{[$crate::Tolerances { abs: $abs, ..$tol }] $($rest)*}
    };
    ([$tol:expr] $a:expr, $b:expr $(,)?) => {
        $crate::__assert_close_parse!{@check [$tol] $a, $b, "values are not close"}
    };
    ([$tol:expr] $a:expr, $b:expr, $($fmt:tt)+) => {
        $crate::__assert_close_parse!{@check [$tol] $a, $b, $($fmt)+}
    };
}

/// Scalar comparison with the semantics of Python's `math.isclose`.
///
/// Equal values (including equal infinities) are always close; NaN never is.
#[inline]
pub fn is_close(a: f64, b: f64, tol: Tolerances) -> bool {
    assert!(tol.rel >= 0.0 && tol.abs >= 0.0, "negative tolerance: {:?}", tol);

    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let allowed = tol.abs.max(tol.rel * a.abs()).max(tol.rel * b.abs());
    (a - b).abs() <= allowed
}

/// Absolute and relative tolerance of one comparison.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self
    { Tolerances { abs: 0.0, rel: DEFAULT_NONZERO_TOL } }
}

/// The first pair of scalars that failed a comparison.
#[derive(Debug, thiserror::Error)]
pub struct CheckCloseError<T: fmt::Debug = f64> {
    pub values: (T, T),
    pub tol: Tolerances,
}

impl<T: fmt::Debug> fmt::Display for CheckCloseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = &self.values;
        writeln!(f, "first differing elements:")?;
        writeln!(f, "  left: {:?}", left)?;
        writeln!(f, " right: {:?}", right)?;
        write!(f, "   tol: {:?}", self.tol)
    }
}

/// Elementwise approximate comparison.
pub trait CheckClose<Rhs: ?Sized = Self> {
    type Scalar: fmt::Debug;

    /// `Ok` if every pair of corresponding scalars is close.
    ///
    /// Containers of different length panic rather than returning `Err`.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError<Self::Scalar>>;
}

impl CheckClose for f64 {
    type Scalar = f64;

    #[inline]
    fn check_close(&self, other: &f64, tol: Tolerances) -> Result<(), CheckCloseError<f64>> {
        match is_close(*self, *other, tol) {
            true => Ok(()),
            false => Err(CheckCloseError { values: (*self, *other), tol }),
        }
    }
}

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { (**self).check_close(*other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    type Scalar = T::Scalar;

    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>> {
        assert_eq!(self.len(), other.len(), "compared containers differ in length");
        self.iter().zip(other).try_for_each(|(a, b)| a.check_close(b, tol))
    }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose> CheckClose<Vec<T>> for [T] {
    type Scalar = T::Scalar;

    #[inline]
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError<T::Scalar>>
    { self.check_close(&other[..], tol) }
}
