//! K-means clustering with Lloyd's iterative relocation.
//!
//! # The Algorithm (Lloyd, 1982)
//!
//! Given `k` starting centroids, repeat:
//!
//! 1. **Assign** every observation to its nearest centroid (Euclidean distance).
//! 2. **Update** every centroid to the mean of the observations assigned to it.
//! 3. **Check** how far the centroids moved. Stop once the largest move is below
//!    the delta threshold, or when the iteration budget runs out.
//!
//! Each round never increases the within-cluster sum of squares
//!
//! ```text
//! J = Σ_j Σ_{x ∈ C_j} ||x - μ_j||²
//! ```
//!
//! so the loop settles in a local optimum. Which optimum depends on the seeds.
//!
//! ## Seeding
//!
//! Starting centroids are `k` distinct observations drawn uniformly without replacement
//! from a caller-supplied [`RandomSource`]. A seeded generator reproduces the same run.
//!
//! ## Details worth knowing
//!
//! - Ties in the assignment step go to the lowest centroid index.
//! - A centroid that loses all of its observations stays where it is. It is not reseeded,
//!   and its cluster may come out empty.
//! - `k == n` and `k == 1` skip iteration: the answer is fixed by construction.
//!
//! ## Complexity
//!
//! - **Time**: O(iterations · n · k · d).
//! - **Space**: O(n · d) for the coordinate snapshot, O(k · d) for centroids.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::init::{seed_centroids, RandomSource};
use super::observation::Observation;
use super::traits::Clustering;
use super::util::{self, Points};
use super::validate::validate;
use crate::error::{Error, Result};

/// K-means clusterer configuration.
///
/// ```rust
/// use lloyd::{Clustering, Kmeans};
///
/// let data = vec![[0.0f64, 0.0], [0.1, 0.1], [10.0, 10.0], [10.1, 10.1]];
/// let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
/// assert_eq!(labels[0], labels[1]);
/// assert_eq!(labels[2], labels[3]);
/// ```
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Stop once no centroid moves this far in one iteration.
    delta_threshold: f64,
    /// Iteration budget.
    max_iter: usize,
    /// Seed for [`Kmeans::fit_seeded`] and [`Clustering::fit_predict`].
    seed: Option<u64>,
}

impl Kmeans {
    /// Create a k-means clusterer for `k` clusters with default thresholds.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            delta_threshold: 1e-4,
            max_iter: 300,
            seed: None,
        }
    }

    /// Set the number of clusters.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Set the convergence threshold on centroid movement.
    pub fn with_delta_threshold(mut self, delta_threshold: f64) -> Self {
        self.delta_threshold = delta_threshold;
        self
    }

    /// Set the maximum number of Lloyd iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Seed the internal generator used when no random source is passed explicitly.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of clusters to fit.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Largest centroid movement that still counts as converged, exclusive.
    pub fn delta_threshold(&self) -> f64 {
        self.delta_threshold
    }

    /// Maximum number of Lloyd iterations.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Seed used by [`Kmeans::fit_seeded`], if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Fit centroids to `data`, drawing seeds from `rng`.
    ///
    /// Passing `None` for `rng` fails with [`Error::MissingRandomSource`]. All errors are
    /// raised before any clustering work starts; once validation passes, fitting cannot fail.
    pub fn fit<T, R>(&self, data: &[T], rng: Option<&mut R>) -> Result<KmeansFit>
    where
        T: Observation,
        R: RandomSource + ?Sized,
    {
        let (dim, rng) = validate(data, self.k, self.delta_threshold, self.max_iter, rng)?;

        let points = Points::collect(data, dim);
        debug!(
            "k-means: n={} k={} dim={} delta={} max_iter={}",
            points.len(),
            self.k,
            dim,
            self.delta_threshold,
            self.max_iter
        );

        if self.k == points.len() {
            debug!("k-means: one cluster per observation, skipping iteration");
            return Ok(KmeansFit::singletons(&points));
        }
        if self.k == 1 {
            debug!("k-means: single cluster, skipping iteration");
            return Ok(KmeansFit::single(&points));
        }

        let centroids = seed_centroids(&points, self.k, rng);
        Ok(self.lloyd(&points, centroids))
    }

    /// Fit using the configured seed, or the thread-local generator when unseeded.
    pub fn fit_seeded<T: Observation>(&self, data: &[T]) -> Result<KmeansFit> {
        match self.seed {
            Some(seed) => self.fit(data, Some(&mut StdRng::seed_from_u64(seed))),
            None => self.fit(data, Some(&mut rand::rng())),
        }
    }

    fn lloyd(&self, points: &Points, mut centroids: Vec<Vec<f64>>) -> KmeansFit {
        let k = centroids.len();
        let dim = points.dim();
        let mut assignment = vec![0usize; points.len()];
        let mut iterations = 0;
        let mut termination = Termination::Exhausted;

        let mut sums = vec![0.0f64; k * dim];
        let mut counts = vec![0usize; k];

        while iterations < self.max_iter {
            iterations += 1;

            // Assignment step.
            for (slot, point) in assignment.iter_mut().zip(points.rows()) {
                *slot = util::nearest(point, &centroids);
            }

            // Update step. Centroids that own nothing keep their position.
            sums.fill(0.0);
            counts.fill(0);
            for (&j, point) in assignment.iter().zip(points.rows()) {
                counts[j] += 1;
                for (s, x) in sums[j * dim..(j + 1) * dim].iter_mut().zip(point) {
                    *s += x;
                }
            }

            let mut max_movement = 0.0f64;
            for (j, centroid) in centroids.iter_mut().enumerate() {
                if counts[j] == 0 {
                    continue;
                }
                #[allow(clippy::cast_precision_loss)]
                let count = counts[j] as f64;
                let updated: Vec<f64> = sums[j * dim..(j + 1) * dim]
                    .iter()
                    .map(|s| s / count)
                    .collect();
                max_movement = max_movement.max(util::euclidean(centroid, &updated));
                *centroid = updated;
            }

            trace!("k-means: iteration {iterations}, max centroid movement {max_movement}");

            if max_movement < self.delta_threshold {
                termination = Termination::Converged;
                break;
            }
        }

        debug!("k-means: {termination:?} after {iterations} iterations");

        KmeansFit {
            centroids,
            assignment,
            iterations,
            termination,
        }
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Clustering for Kmeans {
    fn fit_predict<T: Observation>(&self, data: &[T]) -> Result<Vec<usize>> {
        Ok(self.fit_seeded(data)?.assignment)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Why a k-means run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The largest centroid movement dropped below the delta threshold.
    Converged,
    /// The iteration budget ran out first.
    Exhausted,
    /// `k == 1` or `k == n`; no iteration was needed.
    Shortcut,
}

/// Outcome of a k-means run.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    centroids: Vec<Vec<f64>>,
    assignment: Vec<usize>,
    iterations: usize,
    termination: Termination,
}

impl KmeansFit {
    fn singletons(points: &Points) -> Self {
        Self {
            centroids: points.rows().map(<[f64]>::to_vec).collect(),
            assignment: (0..points.len()).collect(),
            iterations: 0,
            termination: Termination::Shortcut,
        }
    }

    fn single(points: &Points) -> Self {
        let mut mean = vec![0.0f64; points.dim()];
        for point in points.rows() {
            for (m, x) in mean.iter_mut().zip(point) {
                *m += x;
            }
        }
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        mean.iter_mut().for_each(|m| *m /= n);

        Self {
            centroids: vec![mean],
            assignment: vec![0; points.len()],
            iterations: 0,
            termination: Termination::Shortcut,
        }
    }

    /// Final centroid positions, indexed by cluster.
    pub fn centroids(&self) -> &[Vec<f64>] {
        &self.centroids
    }

    /// Cluster index of every observation, in dataset order.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Number of assignment/update rounds performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Why the run stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Number of clusters, equal to the `k` the fit was run with.
    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    /// Group `data` by final assignment.
    ///
    /// `data` must be the dataset this fit was computed from. Returns exactly
    /// [`n_clusters`](Self::n_clusters) groups, each in dataset order; a cluster whose
    /// centroid owns no observation is empty.
    pub fn clusters<'a, T>(&self, data: &'a [T]) -> Vec<Vec<&'a T>> {
        debug_assert_eq!(data.len(), self.assignment.len());
        let mut clusters: Vec<Vec<&'a T>> = vec![Vec::new(); self.centroids.len()];
        for (obs, &j) in data.iter().zip(&self.assignment) {
            clusters[j].push(obs);
        }
        clusters
    }

    /// Index of the centroid nearest to `obs`. Ties go to the lowest index.
    ///
    /// Centroids are not moved.
    pub fn predict<T: Observation + ?Sized>(&self, obs: &T) -> Result<usize> {
        let coords = obs.coordinates();
        let expected = self.centroids.first().map_or(0, Vec::len);
        if coords.len() != expected {
            return Err(Error::InconsistentDimensions {
                expected,
                found: coords.len(),
                index: 0,
            });
        }
        Ok(util::nearest(&coords, &self.centroids))
    }

    /// Within-cluster sum of squared distances for `data` under this fit.
    ///
    /// `data` must be the dataset this fit was computed from.
    pub fn inertia<T: Observation>(&self, data: &[T]) -> f64 {
        data.iter()
            .zip(&self.assignment)
            .map(|(obs, &j)| util::squared_euclidean(&obs.coordinates(), &self.centroids[j]))
            .sum()
    }
}

/// Partition `dataset` into `k` clusters with Lloyd's algorithm.
///
/// Runs until no centroid moves by `delta_threshold` or more in one iteration, or until
/// `iteration_threshold` iterations have run. Returns exactly `k` clusters in centroid
/// order; within a cluster observations keep their dataset order.
///
/// ```rust
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let data = [1.0f64, 1.5, 2.0, 50.0, 51.0];
/// let mut rng = StdRng::seed_from_u64(1);
/// let clusters = lloyd::cluster(&data, 5, 0.01, 100, Some(&mut rng)).unwrap();
/// assert_eq!(clusters.len(), 5);
/// assert!(clusters.iter().all(|c| c.len() == 1));
/// ```
pub fn cluster<'a, T, R>(
    dataset: &'a [T],
    k: usize,
    delta_threshold: f64,
    iteration_threshold: usize,
    random_source: Option<&mut R>,
) -> Result<Vec<Vec<&'a T>>>
where
    T: Observation,
    R: RandomSource + ?Sized,
{
    let fit = Kmeans::new(k)
        .with_delta_threshold(delta_threshold)
        .with_max_iter(iteration_threshold)
        .fit(dataset, random_source)?;
    Ok(fit.clusters(dataset))
}
