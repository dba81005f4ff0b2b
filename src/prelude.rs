//! Collect all traits and other exports here.

pub use crate::compute_svd::{decompose, ComputeSVD};
pub use crate::helpers::*;
pub use crate::image_io::{decode_grayscale, download_file_name, encode_png, load_grayscale, save_png};
pub use crate::metrics::{fidelity_percent, parameter_count, to_pixel};
pub use crate::random_image::*;
pub use crate::reconstruction::Reconstruction;
pub use crate::svd::{Factorization, LowRank, DEFAULT_RANK};
pub use crate::types::{ImageCompressionError, PixelMatrix};
pub use crate::CompressionType;
