//! Precomputed distance structures for one batch of points.

use std::collections::HashMap;

use crate::models::{Point, PointKey};

use super::rank_by_distance;

/// Ranked distance structures for one batch.
///
/// Holds the batch points ranked by distance from home (which also seeds
/// the walker's first candidate) and, for every batch point, the ranked
/// distances to every other point in the same batch. Building a grid costs
/// O(B²) distance computations and O(B² log B) sorting in the batch size —
/// the reason the planner partitions large point sets instead of gridding
/// them globally.
///
/// # Examples
///
/// ```
/// use charge_tour::distance::BatchGrid;
/// use charge_tour::models::Point;
///
/// let home = Point::new(0.0, 0.0);
/// let batch = [Point::new(2.0, 0.0), Point::new(1.0, 0.0)];
/// let grid = BatchGrid::build(&home, &batch);
///
/// // Nearest-to-home first.
/// assert_eq!(grid.home_ranking()[0].0, batch[1]);
/// // Each point ranks all others in the batch.
/// assert_eq!(grid.neighbors_of(&batch[0]).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct BatchGrid {
    home_ranking: Vec<(Point, f64)>,
    neighbors: HashMap<PointKey, Vec<(Point, f64)>>,
}

impl BatchGrid {
    /// Precomputes the rankings for `batch` around `home`.
    pub fn build(home: &Point, batch: &[Point]) -> Self {
        let home_ranking = rank_by_distance(home, batch);
        let mut neighbors = HashMap::with_capacity(batch.len());
        for p in batch {
            neighbors.insert(p.key(), rank_by_distance(p, batch));
        }
        Self {
            home_ranking,
            neighbors,
        }
    }

    /// Batch points ordered by ascending distance from home.
    pub fn home_ranking(&self) -> &[(Point, f64)] {
        &self.home_ranking
    }

    /// Distance from home to `point`, if it belongs to this batch.
    pub fn home_distance(&self, point: &Point) -> Option<f64> {
        self.home_ranking
            .iter()
            .find(|(p, _)| p.key() == point.key())
            .map(|(_, d)| *d)
    }

    /// The other batch points ordered by ascending distance from `point`.
    ///
    /// Empty for points outside the batch.
    pub fn neighbors_of(&self, point: &Point) -> &[(Point, f64)] {
        self.neighbors
            .get(&point.key())
            .map_or(&[], |ranked| ranked.as_slice())
    }

    /// Number of points in this batch.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if the batch has no points.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_batch() -> (Point, Vec<Point>) {
        let home = Point::new(0.0, 0.0);
        let batch = vec![
            Point::new(3.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        (home, batch)
    }

    #[test]
    fn test_home_ranking_ascending() {
        let (home, batch) = sample_batch();
        let grid = BatchGrid::build(&home, &batch);
        let order: Vec<f64> = grid.home_ranking().iter().map(|(_, d)| *d).collect();
        assert_eq!(order, vec![1.0, 2.0, 3.0]);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let (home, batch) = sample_batch();
        let grid = BatchGrid::build(&home, &batch);
        for p in &batch {
            let ranked = grid.neighbors_of(p);
            assert_eq!(ranked.len(), batch.len() - 1);
            assert!(ranked.iter().all(|(q, _)| q.key() != p.key()));
        }
    }

    #[test]
    fn test_neighbors_nearest_first() {
        let (home, batch) = sample_batch();
        let grid = BatchGrid::build(&home, &batch);
        // From (2,0): (3,0) and (1,0) are both at distance 1; the tie
        // keeps batch order, so (3,0) ranks first.
        let ranked = grid.neighbors_of(&batch[2]);
        assert_eq!(ranked[0].0, batch[0]);
        assert_eq!(ranked[1].0, batch[1]);
        assert!((ranked[0].1 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_home_distance_lookup() {
        let (home, batch) = sample_batch();
        let grid = BatchGrid::build(&home, &batch);
        assert_eq!(grid.home_distance(&batch[0]), Some(3.0));
        assert_eq!(grid.home_distance(&Point::new(9.0, 9.0)), None);
    }

    #[test]
    fn test_unknown_point_has_no_neighbors() {
        let (home, batch) = sample_batch();
        let grid = BatchGrid::build(&home, &batch);
        assert!(grid.neighbors_of(&Point::new(9.0, 9.0)).is_empty());
    }

    #[test]
    fn test_empty_batch() {
        let grid = BatchGrid::build(&Point::new(0.0, 0.0), &[]);
        assert!(grid.is_empty());
        assert!(grid.home_ranking().is_empty());
    }
}
