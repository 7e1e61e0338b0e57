//! Clustering of observations under Euclidean distance.
//!
//! ## K-means
//!
//! The classic algorithm: assign each point to the nearest centroid, then
//! update centroids to the mean of their points. Repeat until the centroids
//! stop moving or the iteration budget is spent.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use lloyd::cluster::{cluster, Clustering, Kmeans};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let data: Vec<Vec<f64>> = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! // Groups of observations
//! let mut rng = StdRng::seed_from_u64(42);
//! let groups = cluster(&data, 2, 1e-3, 100, Some(&mut rng)).unwrap();
//! assert_eq!(groups.len(), 2);
//!
//! // Labels, seeded internally
//! let labels = Kmeans::new(2).with_seed(42).fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//! ```

mod init;
mod kmeans;
mod observation;
mod traits;
mod util;
mod validate;

pub use init::RandomSource;
pub use kmeans::{cluster, Kmeans, KmeansFit, Termination};
pub use observation::Observation;
pub use traits::Clustering;
