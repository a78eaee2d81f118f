#![allow(unused)]

use ::meshalg::{Real, Matrix};
use ::rand::Rng;

/// Turn on `RUST_LOG` output for a test.  Safe to call from every test.
pub fn init_logger() {
    let _ = ::env_logger::try_init();
}

/// A matrix with entries uniform in `[-1, 1)`.
pub fn random_matrix<const M: usize, const N: usize>() -> Matrix<M, N> {
    let mut rng = ::rand::thread_rng();
    Matrix::from_fn(|_, _| rng.gen_range(-1.0, 1.0))
}

pub fn frobenius<const M: usize, const N: usize>(a: &Matrix<M, N>) -> Real {
    a.iter().map(|col| col.sqnorm()).sum::<Real>().sqrt()
}

pub fn random_rotation_2d() -> Matrix<2, 2> {
    let theta: Real = ::rand::thread_rng().gen_range(0.0, 2.0 * ::std::f64::consts::PI);
    let (s, c) = theta.sin_cos();
    Matrix::from_rows([[c, -s], [s, c]])
}
