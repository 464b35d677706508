//! Visited-state tracking across batches.

use std::collections::HashMap;

use super::{Point, PointKey};

/// Tracks which points have been emitted into the tour.
///
/// Seeded once for the full point set (home included) before any batch runs,
/// then threaded by exclusive reference through every batch walk. Target
/// entries flip from unvisited to visited when emitted; the home entry
/// counts recharge arrivals and is never consulted for skipping, since home
/// is always re-visitable.
///
/// # Examples
///
/// ```
/// use charge_tour::models::{Point, VisitLog};
///
/// let home = Point::new(0.0, 0.0);
/// let target = Point::new(1.0, 1.0);
/// let mut log = VisitLog::new(&[home, target]);
///
/// assert!(!log.is_visited(&target));
/// log.mark_visited(&target);
/// assert!(log.is_visited(&target));
///
/// log.record_recharge(&home);
/// log.record_recharge(&home);
/// assert_eq!(log.visit_count(&home), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VisitLog {
    counts: HashMap<PointKey, u32>,
}

impl VisitLog {
    /// Seeds the log with every point of the set marked unvisited.
    pub fn new(points: &[Point]) -> Self {
        let mut counts = HashMap::with_capacity(points.len());
        for p in points {
            counts.insert(p.key(), 0);
        }
        Self { counts }
    }

    /// Returns `true` if `point` has been emitted at least once.
    ///
    /// Points outside the seeded set count as visited, so they are never
    /// selected as targets.
    pub fn is_visited(&self, point: &Point) -> bool {
        self.counts.get(&point.key()).map_or(true, |&c| c > 0)
    }

    /// Marks a target as emitted into the tour.
    pub fn mark_visited(&mut self, point: &Point) {
        if let Some(count) = self.counts.get_mut(&point.key()) {
            *count += 1;
        }
    }

    /// Counts a recharge arrival at the home point.
    pub fn record_recharge(&mut self, home: &Point) {
        self.mark_visited(home);
    }

    /// Number of times `point` has been emitted.
    pub fn visit_count(&self, point: &Point) -> u32 {
        self.counts.get(&point.key()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_unvisited() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)];
        let log = VisitLog::new(&points);
        assert!(!log.is_visited(&points[0]));
        assert!(!log.is_visited(&points[1]));
        assert_eq!(log.visit_count(&points[1]), 0);
    }

    #[test]
    fn test_mark_visited() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)];
        let mut log = VisitLog::new(&points);
        log.mark_visited(&points[1]);
        assert!(log.is_visited(&points[1]));
        assert_eq!(log.visit_count(&points[1]), 1);
        assert!(!log.is_visited(&points[0]));
    }

    #[test]
    fn test_home_counts_recharges() {
        let home = Point::new(0.5, 0.5);
        let mut log = VisitLog::new(&[home]);
        for _ in 0..3 {
            log.record_recharge(&home);
        }
        assert_eq!(log.visit_count(&home), 3);
    }

    #[test]
    fn test_unknown_point_reads_visited() {
        let log = VisitLog::new(&[Point::new(0.0, 0.0)]);
        assert!(log.is_visited(&Point::new(9.0, 9.0)));
        assert_eq!(log.visit_count(&Point::new(9.0, 9.0)), 0);
    }
}
