//! Small dense linear algebra helpers shared across the crate

pub mod norms;
pub mod random;
pub mod validation;

pub use norms::{norm_2, norm_frobenius};
pub use random::random_matrix;
pub use validation::{is_unitary, is_upper_triangular, reconstruction_error};

use ndarray::{Array2, ArrayView2};

use crate::numeric::Scalar;

/// Conjugate transpose of a matrix.
///
/// For real input this is the ordinary transpose.
pub fn dagger<T: Scalar>(a: &ArrayView2<'_, T>) -> Array2<T> {
    let (m, n) = a.dim();
    Array2::from_shape_fn((n, m), |(i, j)| a[[j, i]].conj())
}

/// Upper triangle of a matrix (including the diagonal), same shape as the
/// input with everything below the diagonal zeroed.
pub fn triu<T: Scalar>(a: &ArrayView2<'_, T>) -> Array2<T> {
    let (m, n) = a.dim();
    Array2::from_shape_fn((m, n), |(i, j)| if i <= j { a[[i, j]] } else { T::zero() })
}

/// Identity-shaped m x n matrix: ones on the main diagonal, zeros elsewhere.
///
/// With m == n this is the identity; rectangular shapes seed the reduced-Q
/// accumulation.
pub fn eye<T: Scalar>(m: usize, n: usize) -> Array2<T> {
    Array2::from_shape_fn((m, n), |(i, j)| if i == j { T::one() } else { T::zero() })
}
