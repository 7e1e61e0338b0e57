use super::observation::Observation;

#[inline]
pub(crate) fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance between two coordinate vectors of equal length.
///
/// Callers guarantee equal lengths; mismatches are rejected during validation.
#[inline]
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Row-major snapshot of a dataset's coordinates.
#[derive(Clone, Debug)]
pub(crate) struct Points {
    flat: Vec<f64>,
    dim: usize,
    len: usize,
}

impl Points {
    /// Copy the coordinates of `dataset`, which must already be validated to `dim`.
    pub(crate) fn collect<T: Observation>(dataset: &[T], dim: usize) -> Self {
        let mut flat = Vec::with_capacity(dataset.len() * dim);
        for obs in dataset {
            flat.extend_from_slice(&obs.coordinates());
        }
        Self {
            flat,
            dim,
            len: dataset.len(),
        }
    }

    #[inline]
    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.flat[i * self.dim..(i + 1) * self.dim]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn dim(&self) -> usize {
        self.dim
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.len).map(move |i| self.row(i))
    }
}

/// Index of the nearest centroid. The first strict minimum wins ties.
#[inline]
pub(crate) fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (j, c) in centroids.iter().enumerate() {
        let d = euclidean(point, c);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(euclidean(&[1.5], &[1.5]), 0.0);
        assert_eq!(euclidean(&[], &[]), 0.0);
    }

    #[test]
    fn test_nearest_first_minimum_wins() {
        let centroids = vec![vec![0.0], vec![2.0], vec![1.0]];
        assert_eq!(nearest(&[1.0], &centroids), 2);
        // Equidistant from 0.0 and 2.0: the earlier centroid wins.
        assert_eq!(nearest(&[1.0], &centroids[..2]), 0);
        assert_eq!(nearest(&[5.0], &centroids), 1);
    }

    #[test]
    fn test_points_rows() {
        let data: Vec<[f64; 2]> = vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let points = Points::collect(&data, 2);
        assert_eq!(points.len(), 3);
        assert_eq!(points.dim(), 2);
        assert_eq!(points.row(1), &[3.0, 4.0]);
        assert_eq!(points.rows().count(), 3);
    }
}
