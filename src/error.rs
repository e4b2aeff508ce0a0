//! Error types for the QR and SVD drivers

/// Errors raised by the QR and SVD entry points.
///
/// Every variant is detected before any numerical work starts; nothing in
/// this crate retries or degrades silently. Reaching the SVD iteration cap is
/// deliberately *not* an error: the triple is still returned, flagged as
/// unconverged (see [`crate::svd::BlockPowerSvd`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Recursive QR requires a positive blocking parameter
    #[error("block size must be at least 1, got {0}")]
    InvalidBlockSize(usize),

    /// The SVD truncation rank must satisfy s < n
    #[error("truncation rank {s} out of range for a matrix with {n} columns (need s < n)")]
    InvalidTruncationRank { s: usize, n: usize },

    /// Factored and WY modes only handle matrices with at least as many rows
    /// as columns
    #[error("QR in factored or WY mode is not implemented for n > m (got {m} x {n})")]
    NotImplemented { m: usize, n: usize },
}
