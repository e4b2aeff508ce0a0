//! WY block representation of the implicit orthogonal factor
//!
//! `Q = I - W YH`, with `W` of size M x K and `YH` of size K x M. `YH` is
//! already the conjugate transpose of the lower-triangular matrix whose
//! columns are the padded Householder vectors, which is the shape the apply
//! routines consume directly. Applying Q this way runs on block matrix
//! products (Level-3 work) rather than one rank-1 update per reflector.

use ndarray::{Array2, ArrayView2};

use crate::numeric::Scalar;
use crate::utils::dagger;

/// Implicit orthogonal matrix `Q = I - W YH` from a blocked Householder QR.
///
/// Built by [`crate::qr::FactoredQr::to_wy`]; immutable afterwards. Column j
/// of `Y = YH^H` carries a 1 on the diagonal, zeros above and the j-th
/// reflector tail below.
#[derive(Debug, Clone)]
pub struct WyQr<T: Scalar> {
    w: Array2<T>,
    yh: Array2<T>,
}

impl<T: Scalar> WyQr<T> {
    pub(crate) fn new(w: Array2<T>, yh: Array2<T>) -> Self {
        debug_assert_eq!(w.nrows(), yh.ncols());
        debug_assert_eq!(w.ncols(), yh.nrows());
        WyQr { w, yh }
    }

    /// The M x K block W
    pub fn w(&self) -> &Array2<T> {
        &self.w
    }

    /// The K x M block YH (conjugate transpose of Y)
    pub fn yh(&self) -> &Array2<T> {
        &self.yh
    }

    /// `B Q = B - (B W) YH` for a k x M input `B`.
    pub fn b_times_q(&self, b: ArrayView2<'_, T>) -> Array2<T> {
        let bw = b.dot(&self.w);
        &b.to_owned() - &bw.dot(&self.yh)
    }

    /// `Q^H B = B - YH^H (W^H B)` for an M x k input `B`.
    pub fn qdag_times_b(&self, b: ArrayView2<'_, T>) -> Array2<T> {
        let whb = dagger(&self.w.view()).dot(&b);
        &b.to_owned() - &dagger(&self.yh.view()).dot(&whb)
    }

    /// Dense M x M `Q`, recovered by applying to the identity.
    ///
    /// Verification only: materializing Q defeats the point of keeping it as
    /// two narrow blocks.
    pub fn to_q(&self) -> Array2<T> {
        let m = self.w.nrows();
        self.b_times_q(crate::utils::eye::<T>(m, m).view())
    }
}
