use thiserror::Error;

/// Errors returned by [`cluster`](crate::cluster) and [`Kmeans`](crate::Kmeans).
///
/// Every variant is raised during validation, before any clustering work starts.
/// Validation checks run in the order the variants are declared here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The dataset has no observations.
    #[error("empty dataset")]
    EmptyDataset,

    /// Requested cluster count is zero or exceeds the dataset size.
    #[error("invalid cluster count: requested {requested}, but dataset has {n_items} items")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of items in the dataset.
        n_items: usize,
    },

    /// Convergence threshold is not strictly positive.
    #[error("invalid delta threshold {0}: must be positive")]
    InvalidDeltaThreshold(f64),

    /// Iteration budget is zero.
    #[error("invalid iteration threshold {0}: must be at least 1")]
    InvalidIterationThreshold(usize),

    /// No random source was supplied for centroid seeding.
    #[error("missing random source")]
    MissingRandomSource,

    /// An observation reports a coordinate vector of unexpected length.
    #[error("inconsistent dimensions: expected {expected}, found {found} at index {index}")]
    InconsistentDimensions {
        /// Dimensionality of the first observation.
        expected: usize,
        /// Dimensionality of the offending observation.
        found: usize,
        /// Position of the offending observation in the dataset.
        index: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offending_values() {
        let err = Error::InvalidClusterCount {
            requested: 7,
            n_items: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid cluster count: requested 7, but dataset has 3 items"
        );

        let err = Error::InconsistentDimensions {
            expected: 2,
            found: 3,
            index: 4,
        };
        assert!(err.to_string().contains("index 4"));
    }
}
