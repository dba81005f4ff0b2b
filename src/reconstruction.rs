//! The result of reconstructing an image at a given rank.

use crate::types::PixelMatrix;

pub struct Reconstruction {
    /// The reconstructed pixels. Same shape as the original image.
    pub pixels: PixelMatrix,
    /// Number of singular components used.
    pub rank: usize,
    /// Percentage of energy retained, in [0, 100].
    pub fidelity: f64,
    /// Number of scalars needed to store the rank `rank` factors.
    pub parameter_count: usize,
    /// Number of pixels of the original image.
    pub pixel_count: usize,
}

impl Reconstruction {
    pub fn nrows(&self) -> usize {
        self.pixels.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Ratio of original pixels to stored scalars.
    ///
    /// Values below 1 mean that the factors take more space than the image.
    pub fn compression_ratio(&self) -> f64 {
        self.pixel_count as f64 / self.parameter_count as f64
    }

    /// Consume the reconstruction and return the pixel matrix.
    pub fn into_pixels(self) -> PixelMatrix {
        self.pixels
    }
}
