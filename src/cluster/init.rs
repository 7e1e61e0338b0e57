//! Random centroid seeding.

use rand::seq::SliceRandom;
use rand::RngCore;

use super::util::Points;

/// Source of the permutation used to pick initial centroids.
///
/// Every [`rand::RngCore`] is a `RandomSource`, so a seeded generator such as
/// `StdRng::seed_from_u64(..)` makes seeding reproducible. Implementations carry mutable
/// state: one instance must not be shared between concurrent clustering calls.
pub trait RandomSource {
    /// Permute `indices` in place. The permutation must be unbiased.
    fn shuffle_indices(&mut self, indices: &mut [usize]);
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        indices.shuffle(self);
    }
}

/// Pick `k` distinct observations as starting centroids.
///
/// Shuffles `0..n` and copies the coordinates of the first `k` indices.
pub(crate) fn seed_centroids<R: RandomSource + ?Sized>(
    points: &Points,
    k: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let mut indices: Vec<usize> = (0..points.len()).collect();
    rng.shuffle_indices(&mut indices);
    indices[..k].iter().map(|&i| points.row(i).to_vec()).collect()
}
