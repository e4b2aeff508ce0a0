//! Scalar trait shared by the real and complex factorization paths
//!
//! The factorization core is generic over the element type. Both `f64` and
//! `Complex64` are supported; norms and Householder normalizations are always
//! real-valued (`f64`), which keeps the reflectors Hermitian for complex input.

use ndarray::LinalgScalar;
use num_complex::Complex64;
use num_traits::{One, Zero};
use rand::Rng;
use rand_distr::StandardNormal;
use std::fmt::{Debug, Display};
use std::ops::Neg;

/// Scalar element of a vector or matrix, real or complex.
///
/// `LinalgScalar` as a supertrait gives `.dot()` on `ndarray` arrays for free.
pub trait Scalar:
    LinalgScalar + Zero + One + Neg<Output = Self> + PartialEq + Debug + Display + Send + Sync
{
    /// Complex conjugate (identity for real scalars)
    fn conj(self) -> Self;

    /// Modulus |z| as an f64
    fn abs(self) -> f64;

    /// Real part as an f64
    fn re(self) -> f64;

    /// Embed a real number into Self
    fn from_f64(x: f64) -> Self;

    /// Sign in the complex-valid convention: sign(z) = z / |z|, sign(0) = 0.
    ///
    /// This differs from the convention sign(z) = z / sqrt(z * z), which is
    /// not a modulus-one number for complex z.
    fn csign(self) -> Self {
        let a = self.abs();
        if a == 0.0 {
            Self::zero()
        } else {
            self / Self::from_f64(a)
        }
    }

    /// One draw from the scalar's standard normal distribution
    /// (independent real and imaginary parts in the complex case)
    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn conj(self) -> f64 {
        self
    }

    #[inline]
    fn abs(self) -> f64 {
        f64::abs(self)
    }

    #[inline]
    fn re(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }

    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        rng.sample(StandardNormal)
    }
}

impl Scalar for Complex64 {
    #[inline]
    fn conj(self) -> Complex64 {
        Complex64::new(self.re, -self.im)
    }

    #[inline]
    fn abs(self) -> f64 {
        self.norm()
    }

    #[inline]
    fn re(self) -> f64 {
        self.re
    }

    #[inline]
    fn from_f64(x: f64) -> Complex64 {
        Complex64::new(x, 0.0)
    }

    fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> Complex64 {
        Complex64::new(rng.sample(StandardNormal), rng.sample(StandardNormal))
    }
}
