//! Economy size SVD of an image and its rank k truncations.
//!
//! The SVD of an image $A\in\mathbb{R}^{h\times w}$ is stored as $A = U\Sigma V^T$
//! with $U\in\mathbb{R}^{h\times r}$, $\Sigma = \text{diag}(\sigma_1,\dots,\sigma_r)$,
//! $V^T\in\mathbb{R}^{r\times w}$ and $r=\min(h, w)$. A rank $k$ approximation keeps
//! the first $k$ columns of $U$, the first $k$ singular values and the first $k$
//! rows of $V^T$.
//!
//! Computing the SVD is the expensive step. A [Factorization] is meant to be
//! computed once per image and then reconstructed at as many ranks as needed.
//! All reconstruction methods take `&self`, so a single factorization can be
//! shared between threads.

use crate::metrics::{fidelity_percent, parameter_count, to_pixel};
use crate::reconstruction::Reconstruction;
use crate::types::{ImageCompressionError, Result, Scalar};
use crate::CompressionType;
use log::{debug, trace};
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis, Zip};
use rayon::prelude::*;

/// Rank offered before a caller has made a choice.
pub const DEFAULT_RANK: usize = 50;

pub struct Factorization<A: Scalar> {
    /// The U matrix
    u: Array2<A>,
    /// The array of singular values
    s: Array1<A::Real>,
    /// The vt matrix
    vt: Array2<A>,
}

/// The factors of a rank k approximation.
pub struct LowRank<A: Scalar> {
    /// The first k columns of U
    pub u: Array2<A>,
    /// The first k singular values
    pub s: Array1<A::Real>,
    /// The first k rows of vt
    pub vt: Array2<A>,
}

impl<A: Scalar> Factorization<A> {
    /// Number of rows of the factorized image
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    /// Number of columns of the factorized image
    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    /// Number of singular values, equal to min(nrows, ncols)
    pub fn full_rank(&self) -> usize {
        self.s.len()
    }

    pub fn pixel_count(&self) -> usize {
        self.nrows() * self.ncols()
    }

    pub fn u(&self) -> ArrayView2<A> {
        self.u.view()
    }

    pub fn singular_values(&self) -> ArrayView1<A::Real> {
        self.s.view()
    }

    pub fn vt(&self) -> ArrayView2<A> {
        self.vt.view()
    }

    /// The smaller of [DEFAULT_RANK] and the full rank.
    pub fn default_rank(&self) -> usize {
        std::cmp::min(DEFAULT_RANK, self.full_rank())
    }

    fn check_rank(&self, rank: usize) -> Result<()> {
        if rank == 0 || rank > self.full_rank() {
            return Err(ImageCompressionError::RankOutOfRange {
                rank,
                full_rank: self.full_rank(),
            });
        }
        Ok(())
    }

    /// Return the factors of the rank `rank` approximation.
    pub fn truncate(&self, rank: usize) -> Result<LowRank<A>> {
        self.check_rank(rank)?;
        trace!("Truncating rank {} factorization to rank {}", self.full_rank(), rank);

        Ok(LowRank {
            u: self.u.slice(s![.., 0..rank]).to_owned(),
            s: self.s.slice(s![0..rank]).to_owned(),
            vt: self.vt.slice(s![0..rank, ..]).to_owned(),
        })
    }
}

impl<A: Scalar> LowRank<A> {
    pub fn nrows(&self) -> usize {
        self.u.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.vt.ncols()
    }

    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// Number of scalars stored in `u`, `s` and `vt`.
    pub fn parameter_count(&self) -> usize {
        parameter_count(self.nrows(), self.ncols(), self.rank())
    }

    /// Multiply the factors back out.
    pub fn to_mat(&self) -> Array2<A> {
        let mut scaled_vt = self.vt.to_owned();

        Zip::from(scaled_vt.axis_iter_mut(Axis(0)))
            .and(self.s.view())
            .for_each(|mut row, &s_elem| row.map_inplace(|item| *item *= A::from_real(s_elem)));

        self.u.dot(&scaled_vt)
    }
}

macro_rules! factorization_impl {
    ($scalar:ty) => {
        impl Factorization<$scalar> {
            /// Create a factorization from given factors.
            ///
            /// The factors must describe an economy size SVD: `u` is h x r, `s` has
            /// r finite, non-negative and non-increasing entries and `vt` is r x w,
            /// where r = min(h, w).
            pub fn new(
                u: Array2<$scalar>,
                s: Array1<$scalar>,
                vt: Array2<$scalar>,
            ) -> Result<Self> {
                let nrows = u.nrows();
                let ncols = vt.ncols();

                if nrows == 0 || ncols == 0 {
                    return Err(ImageCompressionError::InvalidInput(format!(
                        "factorization of an empty {}x{} matrix",
                        nrows, ncols
                    )));
                }

                let full_rank = std::cmp::min(nrows, ncols);
                if u.ncols() != full_rank || s.len() != full_rank || vt.nrows() != full_rank {
                    return Err(ImageCompressionError::InvalidInput(format!(
                        "inconsistent factor shapes: u {:?}, s {}, vt {:?}",
                        u.dim(),
                        s.len(),
                        vt.dim()
                    )));
                }

                if !u.iter().chain(s.iter()).chain(vt.iter()).all(|item| item.is_finite()) {
                    return Err(ImageCompressionError::InvalidInput(
                        "factors contain non-finite values".to_string(),
                    ));
                }

                if s.iter().any(|&item| item < 0.0) {
                    return Err(ImageCompressionError::InvalidInput(
                        "singular values must be non-negative".to_string(),
                    ));
                }

                if s.iter().zip(s.iter().skip(1)).any(|(&prev, &next)| next > prev) {
                    return Err(ImageCompressionError::InvalidInput(
                        "singular values must be in descending order".to_string(),
                    ));
                }

                Ok(Factorization { u, s, vt })
            }

            /// Squared singular values in double precision.
            fn energies(&self) -> Array1<f64> {
                self.s.mapv(|item| {
                    let item = item as f64;
                    item * item
                })
            }

            /// Percentage of energy retained by a rank `rank` approximation.
            pub fn fidelity(&self, rank: usize) -> Result<f64> {
                self.check_rank(rank)?;
                Ok(fidelity_percent(self.energies().view(), rank))
            }

            /// Reconstruct the image from the first `rank` components.
            ///
            /// Reconstructed values are clamped to [0, 255] and rounded half away
            /// from zero.
            pub fn reconstruct(&self, rank: usize) -> Result<Reconstruction> {
                let low_rank = self.truncate(rank)?;
                let pixels = low_rank.to_mat().mapv(|item| to_pixel(item as f64));
                let fidelity = fidelity_percent(self.energies().view(), rank);

                debug!(
                    "Reconstructed {}x{} image at rank {}/{} retaining {:.2}% energy",
                    self.nrows(),
                    self.ncols(),
                    rank,
                    self.full_rank(),
                    fidelity
                );

                Ok(Reconstruction {
                    pixels,
                    rank,
                    fidelity,
                    parameter_count: low_rank.parameter_count(),
                    pixel_count: self.pixel_count(),
                })
            }

            /// Reconstruct at several ranks in parallel.
            ///
            /// Fails without returning any reconstruction if one of the ranks is invalid.
            pub fn reconstruct_many(&self, ranks: &[usize]) -> Result<Vec<Reconstruction>> {
                ranks
                    .par_iter()
                    .map(|&rank| self.reconstruct(rank))
                    .collect()
            }

            /// Smallest rank whose fidelity is at least `target` percent.
            pub fn rank_for_fidelity(&self, target: f64) -> Result<usize> {
                if !(0.0..=100.0).contains(&target) {
                    return Err(ImageCompressionError::FidelityOutOfRange(target));
                }

                let energies = self.energies();
                let total: f64 = energies.iter().sum();

                // Every rank reproduces an all black image exactly.
                if total <= 0.0 {
                    return Ok(1);
                }

                let mut kept = 0.0;
                for (index, &energy) in energies.iter().enumerate() {
                    kept += energy;
                    if kept / total * 100.0 >= target {
                        return Ok(index + 1);
                    }
                }

                Ok(self.full_rank())
            }

            /// Reconstruct by rank or by target fidelity.
            pub fn compress(&self, compression_type: CompressionType) -> Result<Reconstruction> {
                match compression_type {
                    CompressionType::RANK(rank) => self.reconstruct(rank),
                    CompressionType::FIDELITY(target) => {
                        self.reconstruct(self.rank_for_fidelity(target)?)
                    }
                }
            }
        }
    };
}

factorization_impl!(f32);
factorization_impl!(f64);
