extern crate meshalg;
extern crate rand;
extern crate env_logger;
#[macro_use] extern crate meshalg_assert_close;

use ::meshalg::{Real, Vector, Matrix, V3, M11, M22, M33, M44};
use ::meshalg::{symm2vector, vector2symm, compose_metric};
use ::meshalg::array_types::{cross, metric_eigenvalues, diagonal, vector_3};

mod shared;
use self::shared::{random_matrix, random_rotation_2d};

#[test]
fn cross_of_axes() {
    let x = vector_3(1.0, 0.0, 0.0);
    let y = vector_3(0.0, 1.0, 0.0);
    assert_eq!(cross(&x, &y), vector_3(0.0, 0.0, 1.0));
    assert_eq!(cross(&y, &x), vector_3(0.0, 0.0, -1.0));
    assert_eq!(V3::axis_unit(2).cross(&x), y);
}

fn random_symm<const D: usize>() -> Matrix<D, D> {
    let a = random_matrix::<D, D>();
    a + a.t()
}

#[test]
fn codec_round_trip_is_exact() {
    for _ in 0..100 {
        let s: M11 = random_symm();
        assert_eq!(vector2symm(&symm2vector(&s)), s);
        let s: M22 = random_symm();
        assert_eq!(vector2symm(&symm2vector(&s)), s);
        let s: M33 = random_symm();
        assert_eq!(vector2symm(&symm2vector(&s)), s);
        let s: M44 = random_symm();
        assert_eq!(vector2symm(&symm2vector(&s)), s);
    }
}

#[test]
fn packed_wire_order() {
    let s = M33::from_rows([
        [1.0, 4.0, 6.0],
        [4.0, 2.0, 5.0],
        [6.0, 5.0, 3.0],
    ]);
    assert_eq!(symm2vector(&s), Vector([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
}

#[test]
fn metric_of_standard_basis() {
    let m = compose_metric(&M33::identity(), &vector_3(1.0, 1.0, 1.0));
    assert_eq!(m, M33::identity());

    let c: Real = 3.0;
    let m = compose_metric(&M33::identity(), &vector_3(1.0, 1.0, c));
    assert_eq!(m, diagonal(&vector_3(1.0, 1.0, 1.0 / (c * c))));
}

#[test]
fn metric_has_requested_eigenpairs() {
    for _ in 0..20 {
        let r = random_rotation_2d();
        let h = Vector([0.5, 4.0]);
        let m = compose_metric(&r, &h);
        let l = metric_eigenvalues(&h);

        assert_close!(abs=1e-14, m.into_array(), m.t().into_array());
        for k in 0..2 {
            // M r_k = l_k r_k
            assert_close!(abs=1e-13, (m * r[k]).into_array(), (r[k] * l[k]).into_array());
        }
    }
}

#[test]
fn metric_survives_packing() {
    let r = random_rotation_2d();
    let m = compose_metric(&r, &Vector([1.0, 0.1]));
    let unpacked = vector2symm(&symm2vector(&m));
    assert_close!(abs=1e-12, unpacked.into_array(), m.into_array());
}
