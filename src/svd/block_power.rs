//! Truncated SVD by block power iteration
//!
//! Simultaneous power iteration on a random s-dimensional starting subspace,
//! re-orthogonalized each sweep through reduced QR (rather than Gram-Schmidt)
//! for numerical stability. Converges to the dominant left/right singular
//! subspaces of A.

use ndarray::{s, Array1, Array2, ArrayView2};

use crate::error::Error;
use crate::numeric::Scalar;
use crate::qr::qr_reduced;
use crate::utils::{dagger, norm_frobenius, random_matrix};

/// Configuration for the block power iteration.
#[derive(Debug, Clone)]
pub struct BlockPowerConfig {
    /// Stop once the residual `||A V - U Sigma||_F` drops below this
    pub tol: f64,
    /// Hard cap on iterations; reaching it is a soft failure
    pub max_iter: usize,
    /// Seed for the random starting subspace; `None` draws from entropy
    pub seed: Option<u64>,
}

impl BlockPowerConfig {
    pub fn new(tol: f64) -> Self {
        BlockPowerConfig {
            tol,
            max_iter: 10_000,
            seed: None,
        }
    }
}

impl Default for BlockPowerConfig {
    fn default() -> Self {
        BlockPowerConfig::new(1e-6)
    }
}

/// Truncated SVD triple `A ~= U diag(Sigma) V^H` plus convergence data.
///
/// The QR convention underneath does not force a positive diagonal, so
/// `sigma` entries can come out negative: the magnitude is the singular
/// value, the sign is absorbed by the corresponding column pair.
#[derive(Debug, Clone)]
pub struct BlockPowerSvd<T: Scalar> {
    /// Left singular subspace basis, M x min(s, M)
    pub u: Array2<T>,
    /// Diagonal of the projected triangular factor, length min(s, M)
    pub sigma: Array1<T>,
    /// Right singular subspace basis, N x min(s, M)
    pub v: Array2<T>,
    /// Sweeps actually run
    pub iterations: usize,
    /// Final residual `||A V - U Sigma||_F`
    pub error: f64,
    /// False when the iteration cap was hit before reaching `tol`
    pub converged: bool,
}

/// Compute the rank-`s` truncated SVD of `A` by block power iteration.
///
/// Each sweep orthogonalizes `A V` for the left subspace and `A^H U` for the
/// right one; `Sigma` is read off the diagonal of the second sweep's
/// triangular factor. A wide `A` with fewer rows than `s` yields the
/// `min(s, M)`-dimensional subspace that actually exists. Iteration stops at
/// `config.tol` or at
/// `config.max_iter`, whichever comes first. The cap is a soft failure: a
/// warning is logged and the best triple so far is returned with
/// `converged == false`, leaving the accept/reject call to the caller.
///
/// Fails with [`Error::InvalidTruncationRank`] unless `s < N`.
pub fn block_power_svd<T: Scalar>(
    a: ArrayView2<'_, T>,
    s_rank: usize,
    config: &BlockPowerConfig,
) -> Result<BlockPowerSvd<T>, Error> {
    let (m, n) = a.dim();
    if s_rank >= n {
        return Err(Error::InvalidTruncationRank { s: s_rank, n });
    }
    // A wide A has at most m singular values; the orthogonal basis of A V
    // cannot carry more than m columns, so the subspace shrinks to match.
    let rank = s_rank.min(m);

    let ah = dagger(&a);
    let mut v: Array2<T> = random_matrix(n, s_rank, config.seed);
    let mut iterations = 0;
    loop {
        iterations += 1;

        let (ql, _) = qr_reduced(a.dot(&v).view());
        let u = ql.slice(s![.., ..rank]).to_owned();

        let (qr, rr) = qr_reduced(ah.dot(&u).view());
        let sigma = Array1::from_shape_fn(rank, |i| rr[[i, i]]);
        v = qr.slice(s![.., ..rank]).to_owned();

        // residual between A V and U scaled column-wise by Sigma
        let av = a.dot(&v);
        let us = Array2::from_shape_fn(u.dim(), |(i, j)| u[[i, j]] * sigma[j]);
        let error = norm_frobenius((&av - &us).view());

        if error <= config.tol {
            return Ok(BlockPowerSvd {
                u,
                sigma,
                v,
                iterations,
                error,
                converged: true,
            });
        }
        if iterations >= config.max_iter {
            log::warn!(
                "block power SVD hit the iteration cap ({}) with residual {:.3e} > tol {:.3e}",
                config.max_iter,
                error,
                config.tol
            );
            return Ok(BlockPowerSvd {
                u,
                sigma,
                v,
                iterations,
                error,
                converged: false,
            });
        }
    }
}
