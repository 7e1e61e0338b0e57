//! Generic k-means clustering.
//!
//! `lloyd` partitions any set of point-like values into `k` groups with Lloyd's
//! algorithm. Anything that can report a coordinate vector implements [`Observation`];
//! seeding draws from any [`rand::RngCore`] through the [`RandomSource`] trait.
//!
//! The primary public API is under [`cluster`](mod@cluster), which provides:
//! - [`cluster()`]: partition a dataset into `k` groups of observations
//! - [`Kmeans`]: a configurable clusterer returning centroids and assignments

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    cluster, Clustering, Kmeans, KmeansFit, Observation, RandomSource, Termination,
};
pub use error::{Error, Result};
