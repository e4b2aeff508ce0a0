//! Dense QR driver for the reduced / complete / r output shapes
//!
//! These modes mirror the conventional dense-QR interface; they run on the
//! same Householder core as the factored path and accept any M x N shape,
//! real or complex.

use ndarray::{s, Array2, ArrayView2};

use crate::numeric::Scalar;
use crate::qr::factored::householder_factor;

/// Output shape of a dense QR factorization. With `K = min(M, N)`:
/// `Reduced` returns Q (M x K) and R (K x N), `Complete` returns Q (M x M)
/// and R (M x N), `ROnly` skips Q and returns R (K x N).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenseMode {
    Reduced,
    Complete,
    ROnly,
}

/// Dense Householder QR of `A`.
///
/// Returns `(Q, R)` in the shapes dictated by `mode`; in `ROnly` mode `Q` is
/// an empty M x 0 matrix. Q is accumulated by unwinding the packed
/// reflectors from last to first onto an identity-shaped seed, so the
/// reduced Q is the first K columns of the complete one by construction.
pub fn qr_decompose<T: Scalar>(a: ArrayView2<'_, T>, mode: DenseMode) -> (Array2<T>, Array2<T>) {
    let (m, n) = a.dim();
    let k = m.min(n);
    let f = householder_factor(a);

    let r_full = f.r();
    match mode {
        DenseMode::Reduced => (f.accumulate_q(k), r_full.slice(s![..k, ..]).to_owned()),
        DenseMode::Complete => (f.accumulate_q(m), r_full),
        DenseMode::ROnly => (Array2::zeros((m, 0)), r_full.slice(s![..k, ..]).to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_reduced_shapes() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let (q, r) = qr_decompose(a.view(), DenseMode::Reduced);
        assert_eq!(q.dim(), (3, 2));
        assert_eq!(r.dim(), (2, 2));
    }

    #[test]
    fn test_complete_shapes() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let (q, r) = qr_decompose(a.view(), DenseMode::Complete);
        assert_eq!(q.dim(), (3, 3));
        assert_eq!(r.dim(), (3, 2));
    }

    #[test]
    fn test_r_only() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let (q, r) = qr_decompose(a.view(), DenseMode::ROnly);
        assert_eq!(q.dim(), (3, 0));
        assert_eq!(r.dim(), (2, 2));
        assert!(crate::utils::is_upper_triangular(r.view(), 1e-14));
    }

    #[test]
    fn test_wide_matrix_supported() {
        // dense modes accept n > m, unlike the factored/WY entry points
        let a = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let (q, r) = qr_decompose(a.view(), DenseMode::Reduced);
        assert_eq!(q.dim(), (2, 2));
        assert_eq!(r.dim(), (2, 3));
        let qr = q.dot(&r);
        for (x, y) in qr.iter().zip(a.iter()) {
            approx::assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}
