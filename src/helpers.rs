//! Comparison of pixel matrices.

use ndarray::{ArrayBase, ArrayView2, Data, Ix2, Zip};

pub trait PixelDiff {
    /// Return the largest absolute difference between corresponding pixels.
    fn max_abs_diff(&self, other: ArrayView2<u8>) -> u8;

    /// Return the Frobenius norm of `self - other` relative to the norm of `other`.
    ///
    /// If `other` is all black the absolute difference norm is returned.
    fn rel_diff(&self, other: ArrayView2<u8>) -> f64;
}

impl<S> PixelDiff for ArrayBase<S, Ix2>
where
    S: Data<Elem = u8>,
{
    fn max_abs_diff(&self, other: ArrayView2<u8>) -> u8 {
        assert_eq!(self.dim(), other.dim(), "Pixel matrices must have the same shape.");

        let mut max_diff = 0;
        Zip::from(self).and(&other).for_each(|&first, &second| {
            max_diff = std::cmp::max(max_diff, first.max(second) - first.min(second));
        });
        max_diff
    }

    fn rel_diff(&self, other: ArrayView2<u8>) -> f64 {
        assert_eq!(self.dim(), other.dim(), "Pixel matrices must have the same shape.");

        let mut diff_sq = 0.0;
        Zip::from(self).and(&other).for_each(|&first, &second| {
            let diff = first as f64 - second as f64;
            diff_sq += diff * diff;
        });

        let norm_sq: f64 = other.iter().map(|&item| (item as f64) * (item as f64)).sum();

        if norm_sq > 0.0 {
            (diff_sq / norm_sq).sqrt()
        } else {
            diff_sq.sqrt()
        }
    }
}
