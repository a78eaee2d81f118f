extern crate meshalg;
extern crate rand;
extern crate env_logger;
#[macro_use] extern crate meshalg_assert_close;

use ::meshalg::{Real, Vector, M22, M33, BulkError};
use ::meshalg::{get_vector, set_vector, get_symm, set_symm, symm2vector, compose_metric};
use ::meshalg::soa_ops::{entity_count, symm_stride, repeat_symm, set_matrix};
use ::meshalg::soa_ops::{par_map_symms, par_compose_metrics};

mod shared;
use self::shared::{init_logger, random_rotation_2d};

#[test]
fn entities_own_disjoint_slices() {
    let n = 7;
    let mut a = vec![-1.0; n * symm_stride::<M33>()];
    let tensors: Vec<M33> = (0..n).map(|i| M33::identity() * i as Real).collect();
    for (i, s) in tensors.iter().enumerate() {
        set_symm(&mut a, i, s);
    }
    assert!(a.iter().all(|&x| x != -1.0));
    for (i, s) in tensors.iter().enumerate() {
        assert_eq!(&get_symm::<M33>(&a, i), s);
        assert_eq!(&a[6 * i..6 * (i + 1)], &symm2vector(s)[..]);
    }
    assert_eq!(entity_count(&a, 6), Ok(n));
}

#[test]
fn vectors_in_bulk() {
    let mut coords = vec![0.0; 3 * 4];
    set_vector(&mut coords, 3, &Vector([7.0, 8.0, 9.0]));
    assert_eq!(get_vector::<3>(&coords, 3), Vector([7.0, 8.0, 9.0]));
    assert_eq!(&coords[9..], &[7.0, 8.0, 9.0]);
}

#[test]
fn metric_field_pipeline() {
    init_logger();

    let n = 100;
    let rotations: Vec<_> = (0..n).map(|_| random_rotation_2d()).collect();
    let mut rot_array = vec![0.0; 4 * n];
    for (i, r) in rotations.iter().enumerate() {
        set_matrix(&mut rot_array, i, r);
    }
    let lengths = vec![0.25, 2.0].repeat(n);

    let mut metrics = vec![0.0; 3 * n];
    par_compose_metrics::<2>(&rot_array, &lengths, &mut metrics).unwrap();

    for (i, r) in rotations.iter().enumerate() {
        let expected = compose_metric(r, &Vector([0.25, 2.0]));
        assert_close!(abs=1e-12, get_symm::<M22>(&metrics, i).into_array(), expected.into_array());
    }

    // scale every metric in place, through a second buffer
    let mut scaled = vec![0.0; metrics.len()];
    par_map_symms(&metrics, &mut scaled, |m: &M22| *m * 4.0).unwrap();
    for i in 0..n {
        assert_eq!(get_symm::<M22>(&scaled, i), get_symm::<M22>(&metrics, i) * 4.0);
    }
}

#[test]
fn mismatched_arrays_are_rejected() {
    init_logger();

    let input = repeat_symm(3, &M22::identity());
    let mut output = vec![0.0; 7];
    assert_eq!(
        par_map_symms(&input, &mut output, |m: &M22| *m),
        Err(BulkError::BadLength { len: 7, stride: 3 }),
    );
    assert_eq!(output, vec![0.0; 7]);
}
