//! Gaussian random matrices for seeding the block power iteration

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::numeric::Scalar;

/// Matrix with i.i.d. standard normal entries (independent real and
/// imaginary parts for complex scalars).
///
/// A `seed` makes the draw reproducible; `None` seeds from OS entropy.
/// This only seeds iterative algorithms, so no further reproducibility
/// guarantee is made across versions of the underlying generator.
pub fn random_matrix<T: Scalar>(rows: usize, cols: usize, seed: Option<u64>) -> Array2<T> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    Array2::from_shape_simple_fn((rows, cols), || T::standard_normal(&mut rng))
}
