//! Error type, result alias and the pixel matrix type shared by all modules.

use ndarray::Array2;
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub use ndarray_linalg::Scalar;

/// A single channel image. Rows correspond to the image height and columns
/// to the image width.
pub type PixelMatrix = Array2<u8>;

#[derive(Error, Debug)]
pub enum ImageCompressionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Rank {rank} outside of valid range 1..={full_rank}")]
    RankOutOfRange { rank: usize, full_rank: usize },
    #[error("Target fidelity {0} outside of valid range 0..=100")]
    FidelityOutOfRange(f64),
    #[error("SVD computation did not return singular vectors")]
    SVDError,
    #[error("Lapack Error")]
    LinalgError(#[from] LinalgError),
    #[error("Image codec error")]
    ImageError(#[from] image::ImageError),
    #[error("Incompatible memory layout")]
    LayoutError(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, ImageCompressionError>;
