//! Tour evaluator that replays stop sequences against the charge model.

use crate::distance::euclidean;
use crate::models::{Point, Tour, HOME_INDEX, RESERVE_RATIO};

/// Slack applied to the floor comparison during replay.
const FLOOR_TOLERANCE: f64 = 1e-9;

/// A type of constraint violation found in a tour.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// A leg between two targets left the charge under the reserve floor.
    FloorBreached {
        /// Position of the arrival stop in the tour.
        stop: usize,
        /// Charge level after the leg.
        level: f64,
        /// The reserve floor.
        floor: f64,
    },
    /// A target never appears in the tour.
    MissingTarget {
        /// Index of the absent target.
        index: usize,
    },
    /// A target appears more than once.
    RepeatedTarget {
        /// Index of the repeated target.
        index: usize,
        /// How many times it appears.
        count: usize,
    },
    /// The tour does not start or end at home.
    UnframedEndpoint {
        /// Position of the offending endpoint in the tour.
        stop: usize,
    },
    /// A stop references no point in the set.
    StopOutOfRange {
        /// Position of the stop in the tour.
        stop: usize,
        /// The out-of-range index.
        index: usize,
    },
}

/// A constraint violation in a tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Aggregate figures from replaying a tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourMetrics {
    /// Total distance over every leg, recharge returns included.
    pub total_distance: f64,
    /// Number of forced recharge returns (interior home stops).
    pub recharges: usize,
}

/// Replays tours against a point set and battery model.
///
/// Replay rules match the planner's: the robot departs home at full charge,
/// every arrival at home recharges to capacity, and legs that start or end
/// at home are exempt from the floor check (a return is always permitted).
/// Only a leg from one target to another may breach the reserve.
///
/// # Examples
///
/// ```
/// use charge_tour::evaluation::TourEvaluator;
/// use charge_tour::models::{Point, Tour};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ];
/// let evaluator = TourEvaluator::new(&points, 3.0);
/// let (metrics, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 2, 0]));
///
/// assert!(violations.is_empty());
/// assert!((metrics.total_distance - 4.0).abs() < 1e-10);
/// assert_eq!(metrics.recharges, 0);
/// ```
pub struct TourEvaluator<'a> {
    points: &'a [Point],
    capacity: f64,
    floor: f64,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator for the given point set and battery capacity.
    pub fn new(points: &'a [Point], battery_capacity: f64) -> Self {
        Self {
            points,
            capacity: battery_capacity,
            floor: battery_capacity * RESERVE_RATIO,
        }
    }

    /// Replays `tour`, returning metrics and every violation found.
    ///
    /// A valid planner output yields an empty violation list.
    pub fn evaluate(&self, tour: &Tour) -> (TourMetrics, Vec<Violation>) {
        let stops = tour.stops();
        let mut violations = Vec::new();

        if stops.first() != Some(&HOME_INDEX) {
            violations.push(Violation::new(ViolationType::UnframedEndpoint { stop: 0 }));
        }
        if stops.len() > 1 && stops.last() != Some(&HOME_INDEX) {
            violations.push(Violation::new(ViolationType::UnframedEndpoint {
                stop: stops.len() - 1,
            }));
        }

        let mut seen = vec![0usize; self.points.len()];
        for (i, &s) in stops.iter().enumerate() {
            match seen.get_mut(s) {
                Some(count) => *count += 1,
                None => violations.push(Violation::new(ViolationType::StopOutOfRange {
                    stop: i,
                    index: s,
                })),
            }
        }
        for (index, &count) in seen.iter().enumerate().skip(1) {
            if count == 0 {
                violations.push(Violation::new(ViolationType::MissingTarget { index }));
            } else if count > 1 {
                violations.push(Violation::new(ViolationType::RepeatedTarget {
                    index,
                    count,
                }));
            }
        }

        let mut total_distance = 0.0;
        let mut level = self.capacity;
        for (i, window) in stops.windows(2).enumerate() {
            let (from, to) = (window[0], window[1]);
            if from >= self.points.len() || to >= self.points.len() {
                continue;
            }
            let leg = euclidean(&self.points[from], &self.points[to]);
            total_distance += leg;

            if from == HOME_INDEX {
                level = self.capacity - leg;
            } else {
                level -= leg;
            }

            if to == HOME_INDEX {
                level = self.capacity;
            } else if from != HOME_INDEX && level < self.floor - FLOOR_TOLERANCE {
                violations.push(Violation::new(ViolationType::FloorBreached {
                    stop: i + 1,
                    level,
                    floor: self.floor,
                }));
            }
        }

        let metrics = TourMetrics {
            total_distance,
            recharges: tour.num_recharges(),
        };
        (metrics, violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_clean_tour_passes() {
        let points = sample_points();
        let evaluator = TourEvaluator::new(&points, 3.0);
        let (metrics, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 2, 0, 3, 0]));
        assert!(violations.is_empty());
        // 1 + 1 + 2 + 10 + 10
        assert!((metrics.total_distance - 24.0).abs() < 1e-10);
        assert_eq!(metrics.recharges, 1);
    }

    #[test]
    fn test_floor_breach_between_targets() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, 0.0),
        ];
        let evaluator = TourEvaluator::new(&points, 3.0);
        let (_, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 2, 0]));
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::FloorBreached { stop: 2, .. }
        ));
    }

    #[test]
    fn test_home_legs_exempt_from_floor() {
        let points = vec![Point::new(0.0, 0.0), Point::new(20.0, 0.0)];
        let evaluator = TourEvaluator::new(&points, 3.0);
        // Out and back, both legs far beyond capacity: still no breach,
        // returns are always permitted.
        let (_, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 0]));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_recharge_resets_the_replay() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
        ];
        let evaluator = TourEvaluator::new(&points, 3.0);
        // Without the interior recharge, 1 → 2 → 3 would drain 3.0 - 1.0
        // - 1.0 - 1.0 = 0.0 < 0.75. The recharge makes each half cheap.
        let (metrics, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 2, 0, 3, 0]));
        assert!(violations.is_empty());
        assert_eq!(metrics.recharges, 1);
    }

    #[test]
    fn test_missing_target() {
        let points = sample_points();
        let evaluator = TourEvaluator::new(&points, 3.0);
        let (_, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 2, 0]));
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::MissingTarget { index: 3 })]
        );
    }

    #[test]
    fn test_repeated_target() {
        let points = sample_points();
        let evaluator = TourEvaluator::new(&points, 100.0);
        let (_, violations) = evaluator.evaluate(&Tour::new(vec![0, 1, 1, 2, 3, 0]));
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::RepeatedTarget {
                index: 1,
                count: 2
            })]
        );
    }

    #[test]
    fn test_unframed_endpoints() {
        let points = sample_points();
        let evaluator = TourEvaluator::new(&points, 100.0);
        let (_, violations) = evaluator.evaluate(&Tour::new(vec![1, 2, 3]));
        assert!(violations.contains(&Violation::new(ViolationType::UnframedEndpoint {
            stop: 0
        })));
        assert!(violations.contains(&Violation::new(ViolationType::UnframedEndpoint {
            stop: 2
        })));
    }

    #[test]
    fn test_stop_out_of_range() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let evaluator = TourEvaluator::new(&points, 3.0);
        let (_, violations) = evaluator.evaluate(&Tour::new(vec![0, 7, 1, 0]));
        assert!(violations.contains(&Violation::new(ViolationType::StopOutOfRange {
            stop: 1,
            index: 7
        })));
    }

    #[test]
    fn test_home_only_tour() {
        let points = vec![Point::new(0.0, 0.0)];
        let evaluator = TourEvaluator::new(&points, 3.0);
        let (metrics, violations) = evaluator.evaluate(&Tour::new(vec![0]));
        assert!(violations.is_empty());
        assert_eq!(metrics.total_distance, 0.0);
        assert_eq!(metrics.recharges, 0);
    }
}
