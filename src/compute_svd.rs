//! A simple trait to wrap SVD Computation.

use crate::svd::Factorization;
use crate::types::{ImageCompressionError, Result};
use log::debug;
use ndarray::ArrayView2;
use ndarray_linalg::{JobSvd, Lapack, SVDDCInto, Scalar};

pub trait ComputeSVD
where
    Self: Scalar + Lapack,
{
    /// Compute the economy size SVD of a matrix.
    ///
    /// Fails with `InvalidInput` if the matrix is empty or contains
    /// non-finite values.
    fn compute_svd(arr: ArrayView2<Self>) -> Result<Factorization<Self>>;

    /// Compute the economy size SVD of an image.
    fn decompose(pixels: ArrayView2<u8>) -> Result<Factorization<Self>>;
}

macro_rules! compute_svd_impl {
    ($scalar:ty) => {
        impl ComputeSVD for $scalar {
            fn compute_svd(arr: ArrayView2<Self>) -> Result<Factorization<Self>> {
                if arr.is_empty() {
                    return Err(ImageCompressionError::InvalidInput(format!(
                        "cannot decompose an empty {}x{} matrix",
                        arr.nrows(),
                        arr.ncols()
                    )));
                }

                if !arr.iter().all(|item| item.is_finite()) {
                    return Err(ImageCompressionError::InvalidInput(
                        "matrix contains non-finite values".to_string(),
                    ));
                }

                debug!(
                    "Computing SVD of {}x{} matrix in {}",
                    arr.nrows(),
                    arr.ncols(),
                    stringify!($scalar)
                );

                let (u, s, vt) = arr.to_owned().svddc_into(JobSvd::Some)?;

                match (u, vt) {
                    (Some(u), Some(vt)) => Factorization::<$scalar>::new(u, s, vt),
                    _ => Err(ImageCompressionError::SVDError),
                }
            }

            fn decompose(pixels: ArrayView2<u8>) -> Result<Factorization<Self>> {
                Self::compute_svd(pixels.mapv(|pixel| pixel as $scalar).view())
            }
        }
    };
}

compute_svd_impl!(f32);
compute_svd_impl!(f64);

/// Compute the SVD of an image once so that it can be reconstructed at any rank.
///
/// ```no_run
/// use svd_image_compression::decompose;
/// use svd_image_compression::PixelMatrix;
///
/// let image = PixelMatrix::zeros((64, 48));
/// let factorization = decompose::<f64>(image.view()).unwrap();
/// let preview = factorization.reconstruct(factorization.default_rank()).unwrap();
/// assert_eq!(preview.pixels.dim(), (64, 48));
/// ```
pub fn decompose<A: ComputeSVD>(pixels: ArrayView2<u8>) -> Result<Factorization<A>> {
    A::decompose(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PixelMatrix;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    #[test]
    fn test_known_singular_values() {
        let arr = array![[1.0, 2.0], [3.0, 4.0]];

        let factorization = f64::compute_svd(arr.view()).unwrap();
        let s = factorization.singular_values();

        assert_eq!(factorization.u().dim(), (2, 2));
        assert_eq!(factorization.vt().dim(), (2, 2));
        assert_abs_diff_eq!(s[0], 5.4649857, epsilon = 1E-6);
        assert_abs_diff_eq!(s[1], 0.3659662, epsilon = 1E-6);
    }

    #[test]
    fn test_economy_shapes() {
        let image = PixelMatrix::from_shape_fn((9, 4), |(i, j)| (i * 4 + j) as u8);

        let thin = decompose::<f64>(image.view()).unwrap();
        assert_eq!(thin.u().dim(), (9, 4));
        assert_eq!(thin.singular_values().len(), 4);
        assert_eq!(thin.vt().dim(), (4, 4));

        let thick = decompose::<f32>(image.t()).unwrap();
        assert_eq!(thick.u().dim(), (4, 4));
        assert_eq!(thick.singular_values().len(), 4);
        assert_eq!(thick.vt().dim(), (4, 9));
    }

    #[test]
    fn test_singular_values_descending() {
        let image = PixelMatrix::from_shape_fn((12, 10), |(i, j)| ((i * 37 + j * 11) % 256) as u8);

        let factorization = decompose::<f64>(image.view()).unwrap();
        let s = factorization.singular_values();

        for index in 1..s.len() {
            assert!(s[index] <= s[index - 1]);
            assert!(s[index] >= 0.0);
        }
    }

    #[test]
    fn test_single_pixel() {
        let image = array![[200u8]];

        let factorization = decompose::<f64>(image.view()).unwrap();

        assert_eq!(factorization.full_rank(), 1);
        assert_abs_diff_eq!(factorization.singular_values()[0], 200.0, epsilon = 1E-10);
        assert_eq!(factorization.reconstruct(1).unwrap().pixels, image);
    }

    #[test]
    fn test_empty_matrix() {
        for &dim in &[(0, 5), (5, 0), (0, 0)] {
            let image = PixelMatrix::zeros(dim);
            assert!(matches!(
                decompose::<f64>(image.view()),
                Err(ImageCompressionError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_non_finite_matrix() {
        let mut arr = Array2::<f64>::ones((3, 3));
        arr[[1, 2]] = f64::NAN;

        assert!(matches!(
            f64::compute_svd(arr.view()),
            Err(ImageCompressionError::InvalidInput(_))
        ));

        arr[[1, 2]] = f64::INFINITY;

        assert!(matches!(
            f64::compute_svd(arr.view()),
            Err(ImageCompressionError::InvalidInput(_))
        ));
    }
}
