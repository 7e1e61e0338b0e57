//! Input checks performed before any clustering state is allocated.

use super::observation::Observation;
use crate::error::{Error, Result};

/// Check every k-means precondition.
///
/// Returns the dataset's dimensionality and the unwrapped random source. Checks run in
/// a fixed priority order, so an input violating several rules always reports the same
/// error.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub(crate) fn validate<'r, T, R>(
    dataset: &[T],
    k: usize,
    delta_threshold: f64,
    iteration_threshold: usize,
    random_source: Option<&'r mut R>,
) -> Result<(usize, &'r mut R)>
where
    T: Observation,
    R: ?Sized,
{
    let n = dataset.len();
    if n == 0 {
        return Err(Error::EmptyDataset);
    }

    if k == 0 || k > n {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: n,
        });
    }

    // Written as a negation so NaN is rejected too.
    if !(delta_threshold > 0.0) {
        return Err(Error::InvalidDeltaThreshold(delta_threshold));
    }

    if iteration_threshold == 0 {
        return Err(Error::InvalidIterationThreshold(iteration_threshold));
    }

    let Some(random_source) = random_source else {
        return Err(Error::MissingRandomSource);
    };

    Ok((dimensionality(dataset)?, random_source))
}

/// Common coordinate length of a non-empty dataset.
pub(crate) fn dimensionality<T: Observation>(dataset: &[T]) -> Result<usize> {
    let Some(first) = dataset.first() else {
        return Err(Error::EmptyDataset);
    };
    let expected = first.coordinates().len();
    for (index, obs) in dataset.iter().enumerate().skip(1) {
        let found = obs.coordinates().len();
        if found != expected {
            return Err(Error::InconsistentDimensions {
                expected,
                found,
                index,
            });
        }
    }
    Ok(expected)
}
