//! Generation of test images

use crate::metrics::to_pixel;
use crate::types::PixelMatrix;
use ndarray::Array2;
use rand::Rng;
use rand_distr::StandardNormal;

/// Generate an image with uniformly distributed pixels.
///
/// # Arguments
///
/// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
/// * `rng`: The random number generator to use.
pub fn random_pixel_matrix<R: Rng>(dimension: (usize, usize), rng: &mut R) -> PixelMatrix {
    let mut mat = PixelMatrix::zeros(dimension);
    mat.map_inplace(|item| *item = rng.gen::<u8>());
    mat
}

/// Generate an image that is close to a low-rank matrix.
///
/// The image is the product of two Gaussian matrices of inner dimension
/// `rank`, rescaled to [0, 255] and rounded. Rescaling adds a constant
/// offset, so the rank of the image before rounding is at most `rank + 1`.
///
/// # Arguments
///
/// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
/// * `rank`: Inner dimension of the Gaussian factors.
/// * `rng`: The random number generator to use.
pub fn random_low_rank_image<R: Rng>(
    dimension: (usize, usize),
    rank: usize,
    rng: &mut R,
) -> PixelMatrix {
    assert!(rank > 0, "`rank` must be positive.");

    let left = random_gaussian((dimension.0, rank), rng);
    let right = random_gaussian((rank, dimension.1), rng);
    let mat = left.dot(&right);

    let min = mat.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = mat.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if !(max > min) {
        return PixelMatrix::zeros(dimension);
    }

    mat.mapv(|item| to_pixel((item - min) / (max - min) * 255.0))
}

/// Generate the rank two image with pixel value `row + col`.
///
/// # Arguments
///
/// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
pub fn ramp_image(dimension: (usize, usize)) -> PixelMatrix {
    assert!(
        dimension.0 + dimension.1 <= 257,
        "`rows + cols` must not exceed 257."
    );

    PixelMatrix::from_shape_fn(dimension, |(row, col)| (row + col) as u8)
}

fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<f64> {
    let mut mat = Array2::<f64>::zeros(dimension);
    mat.map_inplace(|item| *item = rng.sample(StandardNormal));
    mat
}
