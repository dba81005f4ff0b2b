//! Quality and compactness metrics of a rank k approximation.
//!
//! The fidelity of a rank $k$ approximation with singular values
//! $\sigma_1\geq\sigma_2\geq\dots\geq\sigma_r$ is the retained energy
//! $100\cdot\sum_{i\leq k}\sigma_i^2 / \sum_{i\leq r}\sigma_i^2$.
//! The compactness is the number of scalars needed to store $U_k$,
//! $\Sigma_k$ and $V_k^T$, i.e. $hk + k + kw$ for an $h\times w$ image.

use ndarray::ArrayView1;

/// Smallest representable pixel intensity.
pub const PIXEL_MIN: f64 = 0.0;

/// Largest representable pixel intensity.
pub const PIXEL_MAX: f64 = 255.0;

/// Return the percentage of energy retained by the first `rank` components.
///
/// `energies` holds the squared singular values in descending order.
/// If the total energy is zero (an all black image) the result is 0.
pub fn fidelity_percent(energies: ArrayView1<f64>, rank: usize) -> f64 {
    let total: f64 = energies.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let kept: f64 = energies.iter().take(rank).sum();
    kept / total * 100.0
}

/// Number of scalars stored by a rank `rank` factorization of an
/// `nrows` x `ncols` matrix.
pub fn parameter_count(nrows: usize, ncols: usize, rank: usize) -> usize {
    nrows * rank + rank + rank * ncols
}

/// Convert a reconstructed value to a pixel intensity.
///
/// The value is clamped to [0, 255] and then rounded half away from zero,
/// so 127.5 becomes 128 and 127.49 becomes 127.
pub fn to_pixel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    num::clamp(value, PIXEL_MIN, PIXEL_MAX).round() as u8
}
