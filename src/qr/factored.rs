//! Factored (packed) QR representation
//!
//! The same layout LAPACK's `geqrf` produces: `factors` holds R in its upper
//! triangle and the non-unit tail of the j-th Householder vector in the
//! strict lower triangle of column j; `betas[j]` is that reflector's
//! normalization. Q is the product `P_0 P_1 ... P_{K-1}` and is never formed
//! unless explicitly requested.

use ndarray::{s, Array1, Array2, ArrayView2};

use crate::numeric::Scalar;
use crate::qr::householder::{apply_right, house, Householder};
use crate::qr::wy::WyQr;
use crate::utils::triu;

/// Compact QR factorization: packed reflectors plus per-column scales.
///
/// Produced once by [`crate::qr::qr_factored`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct FactoredQr<T: Scalar> {
    factors: Array2<T>,
    betas: Vec<f64>,
}

impl<T: Scalar> FactoredQr<T> {
    /// Packed M x N matrix: R above the diagonal, reflector tails below
    pub fn factors(&self) -> &Array2<T> {
        &self.factors
    }

    /// Reflector normalizations, length min(M, N)
    pub fn betas(&self) -> &[f64] {
        &self.betas
    }

    /// The j-th reflector, padded leading 1 included (length M - j)
    fn reflector(&self, j: usize) -> Householder<T> {
        Householder::from_tail(self.factors.slice(s![j + 1.., j]), self.betas[j])
    }

    /// Upper-triangular factor R (M x N)
    pub fn r(&self) -> Array2<T> {
        triu(&self.factors.view())
    }

    /// Dense factors `(Q, R)` with Q of size M x M and R of size M x N.
    ///
    /// Q is accumulated by unwinding the reflectors from last applied to
    /// first: each `P_j` only touches rows and columns `j..`, so applied in
    /// reverse order the updates never disturb columns already finished.
    pub fn to_qr(&self) -> (Array2<T>, Array2<T>) {
        let m = self.factors.nrows();
        (self.accumulate_q(m), self.r())
    }

    /// Unwind the reflectors onto an identity-shaped M x `cols` seed.
    ///
    /// `cols = M` yields the complete Q; `cols = K` its first K columns
    /// (the reduced Q).
    pub(crate) fn accumulate_q(&self, cols: usize) -> Array2<T> {
        let m = self.factors.nrows();
        let mut q = crate::utils::eye::<T>(m, cols);
        for j in (0..self.betas.len()).rev() {
            let h = self.reflector(j);
            let updated = crate::qr::householder::apply_left(q.slice(s![j.., j..]), &h);
            q.slice_mut(s![j.., j..]).assign(&updated);
        }
        q
    }

    /// `A Q` with Q left in factored form, applied one reflector at a time.
    ///
    /// With `A = I` this recovers Q, but less economically than [`Self::to_qr`].
    pub fn rightmult(&self, a: ArrayView2<'_, T>) -> Array2<T> {
        let mut c = a.to_owned();
        for j in 0..self.betas.len() {
            let h = self.reflector(j);
            let updated = apply_right(c.slice(s![.., j..]), &h);
            c.slice_mut(s![.., j..]).assign(&updated);
        }
        c
    }

    /// Convert to the WY block representation `Q = I - W YH`.
    ///
    /// Column-by-column compact-WY recurrence: with `W_j`, `Y_j` holding the
    /// first j reflectors,
    /// `w_j = beta_j * (v_j - W_j (Y_j^H v_j))`, `y_j = v_j`.
    /// O(M j) per column, so O(M K^2) total; the payoff is that Q then
    /// applies through two narrow matrices instead of M x M.
    pub fn to_wy(&self) -> WyQr<T> {
        let (m, _) = self.factors.dim();
        let k = self.betas.len();
        if k == 0 {
            return WyQr::new(Array2::zeros((m, 0)), Array2::zeros((0, m)));
        }

        let mut w = Array2::<T>::zeros((m, k));
        let mut y = Array2::<T>::zeros((m, k));

        // vj[j..] holds the current padded reflector; entries above j are zero
        let mut vj = Array1::<T>::zeros(m);
        vj[0] = T::one();
        for i in 1..m {
            vj[i] = self.factors[[i, 0]];
        }
        let beta0 = T::from_f64(self.betas[0]);
        for i in 0..m {
            w[[i, 0]] = beta0 * vj[i];
            y[[i, 0]] = vj[i];
        }

        for j in 1..k {
            vj[j] = T::one();
            for i in (j + 1)..m {
                vj[i] = self.factors[[i, j]];
            }

            // yhv = Y[j.., ..j]^H vj[j..]
            let mut yhv = Array1::<T>::zeros(j);
            for c in 0..j {
                let mut acc = T::zero();
                for i in j..m {
                    acc = acc + y[[i, c]].conj() * vj[i];
                }
                yhv[c] = acc;
            }

            // z = beta_j * (vj - W[.., ..j] yhv)
            let beta = T::from_f64(self.betas[j]);
            for i in 0..m {
                let mut wyv = T::zero();
                for c in 0..j {
                    wyv = wyv + w[[i, c]] * yhv[c];
                }
                let vi = if i >= j { vj[i] } else { T::zero() };
                w[[i, j]] = beta * (vi - wyv);
            }

            for i in j..m {
                y[[i, j]] = vj[i];
            }
        }

        WyQr::new(w, crate::utils::dagger(&y.view()))
    }
}

/// Householder QR in the factored representation.
///
/// Works on a private copy of `A`; the input is never touched. For each
/// column j the reflector of `A[j.., j]` is applied to the trailing block
/// `A[j.., j..]`, and its tail is packed into the entries it just zeroed.
///
/// Loops over `min(M, N)` columns, so any shape is accepted here; the
/// public factored/WY entry points restrict to N <= M.
pub(crate) fn householder_factor<T: Scalar>(a: ArrayView2<'_, T>) -> FactoredQr<T> {
    let (m, n) = a.dim();
    let k = m.min(n);
    let mut h = a.to_owned();
    let mut betas = Vec::with_capacity(k);

    for j in 0..k {
        let refl = house(h.slice(s![j.., j]));
        betas.push(refl.beta());

        let updated = crate::qr::householder::apply_left(h.slice(s![j.., j..]), &refl);
        h.slice_mut(s![j.., j..]).assign(&updated);

        // pack the non-unit tail into the zeroed entries below the diagonal
        h.slice_mut(s![j + 1.., j]).assign(&refl.tail());
    }

    FactoredQr { factors: h, betas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_factored_reconstructs_square() {
        let a = array![[2.0, 1.0], [1.0, 3.0]];
        let f = householder_factor(a.view());
        let (q, r) = f.to_qr();
        let qr = q.dot(&r);
        for i in 0..2 {
            for j in 0..2 {
                assert_abs_diff_eq!(qr[[i, j]], a[[i, j]], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_betas_length_is_min_dim() {
        let a = array![[1.0, 2.0], [0.5, 1.0], [3.0, -1.0], [0.0, 2.0]];
        let f = householder_factor(a.view());
        assert_eq!(f.betas().len(), 2);
        assert_eq!(f.factors().dim(), (4, 2));
    }

    #[test]
    fn test_r_is_upper_triangular() {
        let a = array![[1.0, 2.0, 0.0], [4.0, 1.0, 1.0], [-2.0, 0.5, 3.0]];
        let f = householder_factor(a.view());
        let r = f.r();
        assert!(crate::utils::is_upper_triangular(r.view(), 1e-14));
    }

    #[test]
    fn test_rightmult_identity_recovers_q() {
        let a = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let f = householder_factor(a.view());
        let (q, _) = f.to_qr();
        let q_via_rightmult = f.rightmult(crate::utils::eye::<f64>(3, 3).view());
        for (x, y) in q_via_rightmult.iter().zip(q.iter()) {
            assert_abs_diff_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}
