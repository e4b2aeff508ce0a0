//! Construction and application of single Householder reflectors
//!
//! A reflector is stored as `(v, beta)` with `v[0] == 1`, representing the
//! Hermitian unitary matrix `P = I - beta * v v^H` that maps the vector it
//! was built from onto a multiple of the first basis vector.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::numeric::Scalar;
use crate::utils::norms::norm_2;

/// A single Householder reflector `P = I - beta * v v^H`.
///
/// `v[0] == 1` always holds; construction goes through [`house`], which
/// enforces it. `beta` is real even for complex `v`, which keeps `P`
/// Hermitian. `beta == 0` marks the identity (no-op) reflector.
#[derive(Debug, Clone)]
pub struct Householder<T: Scalar> {
    v: Array1<T>,
    beta: f64,
}

impl<T: Scalar> Householder<T> {
    pub(crate) fn new(v: Array1<T>, beta: f64) -> Self {
        debug_assert!(v.is_empty() || v[0] == T::one());
        Householder { v, beta }
    }

    /// Reassemble a reflector from its packed tail (the strict lower triangle
    /// of a factored QR matrix) by prepending the implicit leading 1.
    pub(crate) fn from_tail(tail: ArrayView1<'_, T>, beta: f64) -> Self {
        let mut v = Array1::zeros(tail.len() + 1);
        v[0] = T::one();
        for (i, &t) in tail.iter().enumerate() {
            v[i + 1] = t;
        }
        Householder { v, beta }
    }

    /// The Householder vector, leading 1 included
    pub fn v(&self) -> ArrayView1<'_, T> {
        self.v.view()
    }

    /// The real normalization factor
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Non-unit tail `v[1..]`
    pub(crate) fn tail(&self) -> ArrayView1<'_, T> {
        self.v.slice(ndarray::s![1..])
    }
}

/// Compute the Householder reflector of a vector.
///
/// Given a real or complex vector `x` of length m, finds `(v, beta)` with
/// `v[0] = 1` such that `P = I - beta * v v^H` reflects `x` onto a multiple
/// of the first basis vector: `P x = -rho e_0` with `|rho| = ||x||`.
///
/// Of the two candidate pivots `x[0] +- rho`, the one with larger modulus is
/// chosen (Golub & Van Loan), which avoids cancellation when `x[0]` is close
/// to `+-||x||`.
///
/// Defined for every finite input. For the zero vector the reflector is the
/// identity (`beta = 0`); for a vector with zero tail norm it is the negating
/// reflector (`beta = 2`).
pub fn house<T: Scalar>(x: ArrayView1<'_, T>) -> Householder<T> {
    let m = x.len();
    if m == 0 {
        return Householder::new(Array1::zeros(0), 0.0);
    }

    let x0 = x[0];
    let tail_norm = norm_2(x.slice(ndarray::s![1..]));

    if tail_norm == 0.0 {
        let mut v = x.to_owned();
        v[0] = T::one();
        let beta = if x0.abs() == 0.0 { 0.0 } else { 2.0 };
        return Householder::new(v, beta);
    }

    let x_norm = f64::hypot(x0.abs(), tail_norm);
    // sign(0) = 0 would zero both pivot candidates; a vanished leading entry
    // takes rho = ||x|| so the division below stays defined
    let rho = if x0.abs() == 0.0 {
        T::from_f64(x_norm)
    } else {
        x0.csign() * T::from_f64(x_norm)
    };

    let v1_plus = x0 + rho;
    let v1_minus = x0 - rho;
    let v1 = if v1_plus.abs() >= v1_minus.abs() {
        v1_plus
    } else {
        v1_minus
    };

    let mut v = x.to_owned();
    for i in 1..m {
        v[i] = v[i] / v1;
    }
    v[0] = T::one();

    let t = tail_norm / v1.abs();
    let beta = 2.0 / (1.0 + t * t);
    Householder::new(v, beta)
}

/// Compute `P A` without forming `P`: `A - beta * v (v^H A)`.
///
/// `v` must have as many entries as `A` has rows. O(mn) instead of the
/// O(m^2 n) of a dense product.
pub fn apply_left<T: Scalar>(a: ArrayView2<'_, T>, h: &Householder<T>) -> Array2<T> {
    let (m, n) = a.dim();
    debug_assert_eq!(h.v().len(), m);
    let beta = T::from_f64(h.beta());

    // w = v^H A, a length-n row
    let mut w = Array1::<T>::zeros(n);
    for j in 0..n {
        let mut acc = T::zero();
        for i in 0..m {
            acc = acc + h.v()[i].conj() * a[[i, j]];
        }
        w[j] = acc;
    }

    let mut c = a.to_owned();
    for i in 0..m {
        let bv = beta * h.v()[i];
        for j in 0..n {
            c[[i, j]] = c[[i, j]] - bv * w[j];
        }
    }
    c
}

/// Compute `A P` without forming `P`: `A - beta * (A v) v^H`.
pub fn apply_right<T: Scalar>(a: ArrayView2<'_, T>, h: &Householder<T>) -> Array2<T> {
    let (m, n) = a.dim();
    debug_assert_eq!(h.v().len(), n);
    let beta = T::from_f64(h.beta());

    // w = A v, a length-m column
    let mut w = Array1::<T>::zeros(m);
    for i in 0..m {
        let mut acc = T::zero();
        for j in 0..n {
            acc = acc + a[[i, j]] * h.v()[j];
        }
        w[i] = acc;
    }

    let mut c = a.to_owned();
    for i in 0..m {
        let bw = beta * w[i];
        for j in 0..n {
            c[[i, j]] = c[[i, j]] - bw * h.v()[j].conj();
        }
    }
    c
}

/// Dense reflector matrix `P = I - beta * v v^H`. For verification only;
/// production paths use [`apply_left`] / [`apply_right`].
pub fn form_dense_p<T: Scalar>(h: &Householder<T>) -> Array2<T> {
    let m = h.v().len();
    let beta = T::from_f64(h.beta());
    Array2::from_shape_fn((m, m), |(i, j)| {
        let delta = if i == j { T::one() } else { T::zero() };
        delta - beta * h.v()[i] * h.v()[j].conj()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use num_complex::Complex64;

    #[test]
    fn test_house_zeroes_tail() {
        let x = array![3.0, 4.0, 0.0];
        let h = house(x.view());
        assert_eq!(h.v()[0], 1.0);

        let px = apply_left(
            x.clone().insert_axis(ndarray::Axis(1)).view(),
            &h,
        );
        // norm preserved, tail annihilated
        assert_abs_diff_eq!(px[[0, 0]].abs(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[[1, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[[2, 0]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_house_zero_vector_is_identity() {
        let x = array![0.0, 0.0, 0.0];
        let h = house(x.view());
        assert_eq!(h.beta(), 0.0);
        assert_eq!(h.v()[0], 1.0);
    }

    #[test]
    fn test_house_zero_tail_norm() {
        let x = array![-2.0, 0.0, 0.0];
        let h = house(x.view());
        assert_eq!(h.beta(), 2.0);
        // P = I - 2 e_0 e_0^T negates the first component
        let px = apply_left(x.insert_axis(ndarray::Axis(1)).view(), &h);
        assert_abs_diff_eq!(px[[0, 0]], 2.0, epsilon = 1e-14);
    }

    #[test]
    fn test_house_zero_leading_entry() {
        // nonzero tail behind a zero pivot must not divide by zero
        let x = array![0.0, 1.0, -2.0];
        let h = house(x.view());
        assert!(h.beta().is_finite());
        let px = apply_left(x.insert_axis(ndarray::Axis(1)).view(), &h);
        assert_abs_diff_eq!(px[[0, 0]].abs(), 5.0f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(px[[1, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[[2, 0]], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_house_complex_unitary() {
        let x = array![
            Complex64::new(1.0, 2.0),
            Complex64::new(-0.5, 0.25),
            Complex64::new(0.0, 3.0)
        ];
        let norm_x: f64 = x.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        let h = house(x.view());
        assert_eq!(h.v()[0], Complex64::new(1.0, 0.0));

        let px = apply_left(x.insert_axis(ndarray::Axis(1)).view(), &h);
        assert_abs_diff_eq!(px[[0, 0]].norm(), norm_x, epsilon = 1e-12);
        assert_abs_diff_eq!(px[[1, 0]].norm(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(px[[2, 0]].norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_left_matches_dense_p() {
        let x = array![2.0, -1.0, 4.0];
        let h = house(x.view());
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let fast = apply_left(a.view(), &h);
        let dense = form_dense_p(&h).dot(&a);
        for i in 0..3 {
            for j in 0..2 {
                assert_abs_diff_eq!(fast[[i, j]], dense[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_apply_twice_is_identity() {
        let x = array![1.0, 2.0, -3.0, 0.5];
        let h = house(x.view());
        let a = array![
            [1.0, 0.0],
            [2.0, 1.0],
            [0.0, -1.0],
            [4.0, 2.0]
        ];
        let twice = apply_left(apply_left(a.view(), &h).view(), &h);
        for (x, y) in twice.iter().zip(a.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}
