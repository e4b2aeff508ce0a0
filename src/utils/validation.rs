//! Factorization validation helpers
//!
//! Used by the test suites to check orthogonality, triangularity and
//! reconstruction accuracy of computed factorizations.

use ndarray::ArrayView2;

use crate::numeric::Scalar;
use crate::utils::dagger;

/// Check that the columns of `q` are orthonormal: Q^H Q = I within `tol`.
pub fn is_unitary<T: Scalar>(q: ArrayView2<'_, T>, tol: f64) -> bool {
    let k = q.ncols();
    let qhq = dagger(&q).dot(&q);
    for i in 0..k {
        for j in 0..k {
            let expected = if i == j { 1.0 } else { 0.0 };
            if (qhq[[i, j]] - T::from_f64(expected)).abs() > tol {
                return false;
            }
        }
    }
    true
}

/// Check that every entry strictly below the main diagonal is zero within `tol`.
pub fn is_upper_triangular<T: Scalar>(r: ArrayView2<'_, T>, tol: f64) -> bool {
    let (m, n) = r.dim();
    for i in 1..m {
        for j in 0..n.min(i) {
            if r[[i, j]].abs() > tol {
                return false;
            }
        }
    }
    true
}

/// Frobenius-norm reconstruction error ||A - Q R||_F.
pub fn reconstruction_error<T: Scalar>(
    a: ArrayView2<'_, T>,
    q: ArrayView2<'_, T>,
    r: ArrayView2<'_, T>,
) -> f64 {
    let qr = q.dot(&r);
    let diff = &a.to_owned() - &qr;
    crate::utils::norm_frobenius(diff.view())
}
