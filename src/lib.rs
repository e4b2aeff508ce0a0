//! # householder-qr: Householder QR and block power SVD
//!
//! QR factorization built from numerically stable Householder reflectors,
//! exposed in several interchangeable representations:
//!
//! - dense reduced / complete / R-only output ([`qr_reduced`],
//!   [`qr_complete`], [`qr_r`])
//! - the factored (packed-reflector) form ([`qr_factored`]), the layout
//!   LAPACK's `geqrf` uses
//! - the WY block form ([`qr_wy`]), `Q = I - W YH`, which applies Q through
//!   matrix-matrix products
//!
//! plus a recursive blocked QR ([`recursive_qr`]) and a truncated SVD by
//! block power iteration ([`block_power_svd`]).
//!
//! Everything is generic over `f64` and `Complex64` via the [`Scalar`]
//! trait, and purely functional: no routine mutates its caller's data.

pub mod error;
pub mod numeric;
pub mod qr;
pub mod svd;
pub mod utils;

pub use error::Error;
pub use numeric::Scalar;
pub use qr::{
    apply_left, apply_right, form_dense_p, house, qr_complete, qr_decompose, qr_factored, qr_r,
    qr_reduced, qr_wy, recursive_qr, DenseMode, FactoredQr, Householder, WyQr,
};
pub use svd::{block_power_svd, BlockPowerConfig, BlockPowerSvd};
pub use utils::{dagger, norm_2, norm_frobenius, random_matrix, triu};

// Re-export the array types the API is written against
pub use ndarray::{Array1, Array2};
pub use num_complex::Complex64;

/// Real matrix alias
pub type Matrix = Array2<f64>;
/// Real vector alias
pub type Vector = Array1<f64>;
