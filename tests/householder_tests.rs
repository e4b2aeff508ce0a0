//! Reflector contract tests: normalization, annihilation, involution

use approx::assert_abs_diff_eq;
use householder_qr::{apply_left, apply_right, form_dense_p, house, Complex64};
use ndarray::{array, Array2, Axis};

#[test]
fn reflector_first_component_is_one() {
    for x in [
        array![1.0, 2.0, 3.0],
        array![-4.0, 0.5, 0.0, 2.0],
        array![0.0, 0.0],
        array![7.0],
    ] {
        let h = house(x.view());
        assert_eq!(h.v()[0], 1.0);
    }
}

#[test]
fn reflector_annihilates_tail_and_preserves_norm() {
    let x = array![1.0, -2.0, 4.0, 0.5, -1.0];
    let norm_x = x.iter().map(|v| v * v).sum::<f64>().sqrt();
    let h = house(x.view());

    let px = apply_left(x.insert_axis(Axis(1)).view(), &h);
    assert_abs_diff_eq!(px[[0, 0]].abs(), norm_x, epsilon = 1e-12);
    for i in 1..5 {
        assert_abs_diff_eq!(px[[i, 0]], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn reflector_annihilates_complex_tail() {
    let x = array![
        Complex64::new(0.5, -1.5),
        Complex64::new(2.0, 1.0),
        Complex64::new(-1.0, 0.0),
        Complex64::new(0.0, 0.25)
    ];
    let norm_x = x.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
    let h = house(x.view());
    assert_eq!(h.v()[0], Complex64::new(1.0, 0.0));

    let px = apply_left(x.insert_axis(Axis(1)).view(), &h);
    assert_abs_diff_eq!(px[[0, 0]].norm(), norm_x, epsilon = 1e-12);
    for i in 1..4 {
        assert_abs_diff_eq!(px[[i, 0]].norm(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn zero_vector_gives_identity_reflector() {
    let x = array![0.0, 0.0, 0.0, 0.0];
    let h = house(x.view());
    assert_eq!(h.beta(), 0.0);
    assert_eq!(h.v()[0], 1.0);

    // beta = 0 means P = I: nothing moves
    let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
    let pa = apply_left(a.view(), &h);
    assert_eq!(pa, a);
}

#[test]
fn zero_tail_gives_beta_two() {
    let x = array![5.0, 0.0, 0.0];
    let h = house(x.view());
    assert_eq!(h.beta(), 2.0);
}

#[test]
fn dense_p_is_hermitian_and_unitary() {
    let x = array![
        Complex64::new(1.0, 1.0),
        Complex64::new(-2.0, 0.5),
        Complex64::new(0.0, 3.0)
    ];
    let h = house(x.view());
    let p = form_dense_p(&h);

    for i in 0..3 {
        for j in 0..3 {
            // Hermitian
            assert_abs_diff_eq!((p[[i, j]] - p[[j, i]].conj()).norm(), 0.0, epsilon = 1e-12);
        }
    }
    // unitary (P is its own inverse since it is also Hermitian)
    let pp = p.dot(&p);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_abs_diff_eq!(pp[[i, j]].re, expected, epsilon = 1e-12);
            assert_abs_diff_eq!(pp[[i, j]].im, 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn left_and_right_application_are_involutions() {
    let x = array![2.0, -1.0, 0.5, 3.0];
    let h = house(x.view());

    let a: Array2<f64> = array![
        [1.0, 0.0, 2.0],
        [0.0, 1.0, -1.0],
        [3.0, 2.0, 0.0],
        [1.0, 1.0, 1.0]
    ];
    let twice_left = apply_left(apply_left(a.view(), &h).view(), &h);
    for (u, v) in twice_left.iter().zip(a.iter()) {
        assert_abs_diff_eq!(*u, *v, epsilon = 1e-12);
    }

    let b = householder_qr::dagger(&a.view());
    let twice_right = apply_right(apply_right(b.view(), &h).view(), &h);
    for (u, v) in twice_right.iter().zip(b.iter()) {
        assert_abs_diff_eq!(*u, *v, epsilon = 1e-12);
    }
}

#[test]
fn right_application_matches_dense_product() {
    let x = array![1.0, 4.0, -2.0];
    let h = house(x.view());
    let a = array![[1.0, 2.0, 0.0], [0.5, -1.0, 3.0]];

    let fast = apply_right(a.view(), &h);
    let dense = a.dot(&form_dense_p(&h));
    for (u, v) in fast.iter().zip(dense.iter()) {
        assert_abs_diff_eq!(*u, *v, epsilon = 1e-12);
    }
}
