//! Truncated SVD built on the QR primitive

pub mod block_power;

pub use block_power::{block_power_svd, BlockPowerConfig, BlockPowerSvd};
