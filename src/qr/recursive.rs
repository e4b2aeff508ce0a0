//! Recursive blocked QR
//!
//! Divide-and-conquer over column halves. Each level replaces part of the
//! memory-bound per-reflector work with the two block products
//! `Q0^H A1` and `Q0 R01`, which is where a dense backend can run Level-3
//! kernels. The two recursive calls are sequential: the right half is
//! factored only after the left half's column space has been removed
//! from it.

use ndarray::{concatenate, s, Array2, ArrayView2, Axis};

use crate::error::Error;
use crate::numeric::Scalar;
use crate::qr::dense::{qr_decompose, DenseMode};
use crate::utils::dagger;

/// Reduced QR of `A` via recursive column blocking.
///
/// Splits `A = [A0 | A1]` at `N/2` until the panel is at most `block_size`
/// columns wide, then falls back to the dense reduced factorization. The
/// halves recombine as
///
/// ```text
/// [A0 | A1] = [Q0 | Q1] [ R00  R01 ]
///                       [  0   R11 ]
/// ```
///
/// with `R01 = Q0^H A1` and `(Q1, R11)` the factorization of
/// `A1 - Q0 R01`, the part of `A1` not already in Q0's span.
///
/// Returns `(Q, R)` with Q of size M x N and R of size N x N when `M >= N`,
/// matching the reduced mode of [`qr_decompose`]; a wide `A` yields the same
/// degenerate block assembly the splitting produces, with no extra meaning
/// attached. Fails with
/// [`Error::InvalidBlockSize`] when `block_size < 1`.
pub fn recursive_qr<T: Scalar>(
    a: ArrayView2<'_, T>,
    block_size: usize,
) -> Result<(Array2<T>, Array2<T>), Error> {
    if block_size < 1 {
        return Err(Error::InvalidBlockSize(block_size));
    }
    Ok(recursive_qr_inner(a, block_size))
}

fn recursive_qr_inner<T: Scalar>(a: ArrayView2<'_, T>, block_size: usize) -> (Array2<T>, Array2<T>) {
    let n = a.ncols();
    if n <= block_size {
        return qr_decompose(a, DenseMode::Reduced);
    }

    let n0 = n / 2;
    let (q0, r00) = recursive_qr_inner(a.slice(s![.., ..n0]), block_size);

    let a1 = a.slice(s![.., n0..]);
    let r01 = dagger(&q0.view()).dot(&a1);
    // deflate: remove the component of A1 already explained by Q0
    let a1_deflated = &a1.to_owned() - &q0.dot(&r01);

    let (q1, r11) = recursive_qr_inner(a1_deflated.view(), block_size);

    // Q1's columns are orthogonal to Q0's span by construction, so plain
    // column concatenation assembles the reduced Q
    let q = concatenate![Axis(1), q0.view(), q1.view()];
    let r10 = Array2::<T>::zeros((r11.nrows(), r00.ncols()));
    let r_top = concatenate![Axis(1), r00.view(), r01.view()];
    let r_bottom = concatenate![Axis(1), r10.view(), r11.view()];
    let r = concatenate![Axis(0), r_top.view(), r_bottom.view()];
    (q, r)
}
