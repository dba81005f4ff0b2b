//! Lossy compression of grayscale images by truncated SVD.
//!
//! An image is decomposed once with [decompose] and can then be reconstructed
//! at any rank between 1 and min(rows, cols) with [Factorization::reconstruct].
//! Each [Reconstruction] carries the percentage of retained energy and the
//! number of scalars needed to store the truncated factors.

pub mod compute_svd;
pub mod helpers;
pub mod image_io;
pub mod metrics;
pub mod prelude;
pub mod random_image;
pub mod reconstruction;
pub mod svd;
pub mod types;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompressionType {
    /// Compression to the smallest rank retaining the given percentage of energy
    FIDELITY(f64),
    /// Rank based compression with specified rank
    RANK(usize),
}

pub use compute_svd::{decompose, ComputeSVD};
pub use helpers::PixelDiff;
pub use reconstruction::Reconstruction;
pub use svd::{Factorization, LowRank};
pub use types::{ImageCompressionError, PixelMatrix, Result};
