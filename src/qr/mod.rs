//! Householder QR decomposition in several output representations
//!
//! Five entry points cover the five historical mode strings, each statically
//! typed to its own return shape:
//!
//! - [`qr_reduced`] / [`qr_complete`] / [`qr_r`]: dense output, any M x N
//! - [`qr_factored`]: packed reflectors, requires N <= M
//! - [`qr_wy`]: WY block representation plus R, requires N <= M
//!
//! The factored and WY forms pay off when K = min(M, N) is much smaller
//! than M: Q stays implicit in O(M K) storage, and applying it costs O(M K k)
//! instead of the O(M^2 k) of a dense product. Factored application is
//! rank-1 (Level-2) work per reflector; WY application is block (Level-3)
//! work, which is the representation to pick when throughput matters.

pub mod dense;
pub mod factored;
pub mod householder;
pub mod recursive;
pub mod wy;

pub use dense::{qr_decompose, DenseMode};
pub use factored::FactoredQr;
pub use householder::{apply_left, apply_right, form_dense_p, house, Householder};
pub use recursive::recursive_qr;
pub use wy::WyQr;

use ndarray::{s, Array2, ArrayView2};

use crate::error::Error;
use crate::numeric::Scalar;

/// Reduced QR: `Q` (M x K), `R` (K x N), `K = min(M, N)`.
pub fn qr_reduced<T: Scalar>(a: ArrayView2<'_, T>) -> (Array2<T>, Array2<T>) {
    qr_decompose(a, DenseMode::Reduced)
}

/// Complete QR: `Q` (M x M), `R` (M x N).
pub fn qr_complete<T: Scalar>(a: ArrayView2<'_, T>) -> (Array2<T>, Array2<T>) {
    qr_decompose(a, DenseMode::Complete)
}

/// The triangular factor alone: `R` (K x N).
pub fn qr_r<T: Scalar>(a: ArrayView2<'_, T>) -> Array2<T> {
    qr_decompose(a, DenseMode::ROnly).1
}

/// QR in the factored representation (packed reflectors + betas).
///
/// Fails with [`Error::NotImplemented`] when `A` has more columns than rows;
/// the packed layout has no room for reflectors past row M.
pub fn qr_factored<T: Scalar>(a: ArrayView2<'_, T>) -> Result<FactoredQr<T>, Error> {
    let (m, n) = a.dim();
    if n > m {
        return Err(Error::NotImplemented { m, n });
    }
    Ok(factored::householder_factor(a))
}

/// QR in the WY representation: `(Q = I - W YH, R)`.
///
/// `R` is the K x N upper-triangular factor. Same `N <= M` restriction as
/// [`qr_factored`], which this builds on.
pub fn qr_wy<T: Scalar>(a: ArrayView2<'_, T>) -> Result<(WyQr<T>, Array2<T>), Error> {
    let f = qr_factored(a)?;
    let k = f.betas().len();
    let r = f.r().slice(s![..k, ..]).to_owned();
    Ok((f.to_wy(), r))
}
