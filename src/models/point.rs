//! Point and coordinate-identity types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A 2-D point with finite coordinates.
///
/// Point 0 of a point set is conventionally the home/charging station.
/// Identity is by coordinate value: the planner reorders points by distance
/// while it works and recovers their original indices afterwards through a
/// [`PointIndex`], so two points with the same coordinates are the same
/// point.
///
/// # Examples
///
/// ```
/// use charge_tour::models::Point;
///
/// let home = Point::new(0.5, 0.5);
/// let target = Point::new(0.123456, 0.7);
/// assert_eq!(target.rounded(4), Point::new(0.1235, 0.7));
/// assert_ne!(home.key(), target.key());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns this point with both coordinates rounded to `decimals`
    /// decimal places.
    ///
    /// Callers that build point sets from noisy sources can round once up
    /// front so that coordinate-value identity is exact from then on.
    pub fn rounded(&self, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            x: (self.x * scale).round() / scale,
            y: (self.y * scale).round() / scale,
        }
    }

    /// Exact-equality hash key for this point's coordinates.
    pub fn key(&self) -> PointKey {
        PointKey(self.x.to_bits(), self.y.to_bits())
    }
}

/// Bit-pattern key identifying a point by its exact coordinate values.
///
/// Built from [`f64::to_bits`], so it is hashable and free of the
/// formatting/parsing round trips that string keys would need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey(u64, u64);

/// Lookup from a point's coordinates back to its index in the original
/// point set.
///
/// Built once per planning run. The batch grid hands points around by
/// value in distance-sorted order; when a point is emitted into the tour,
/// the index map recovers the index the caller knows it by.
///
/// # Examples
///
/// ```
/// use charge_tour::models::{Point, PointIndex};
///
/// let points = vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
/// let index = PointIndex::new(&points);
/// assert_eq!(index.index_of(&points[1]), Some(1));
/// assert_eq!(index.index_of(&Point::new(9.0, 9.0)), None);
/// ```
#[derive(Debug, Clone)]
pub struct PointIndex {
    map: HashMap<PointKey, usize>,
}

impl PointIndex {
    /// Builds the index map for a point set.
    ///
    /// Coordinates are expected to be pairwise distinct; if two points
    /// share coordinates the later index wins.
    pub fn new(points: &[Point]) -> Self {
        let mut map = HashMap::with_capacity(points.len());
        for (i, p) in points.iter().enumerate() {
            map.insert(p.key(), i);
        }
        Self { map }
    }

    /// Returns the original index of `point`, if it belongs to the set.
    pub fn index_of(&self, point: &Point) -> Option<usize> {
        self.map.get(&point.key()).copied()
    }

    /// Number of distinct coordinates indexed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no points are indexed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
