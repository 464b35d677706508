//! The planned tour.

use serde::{Deserialize, Serialize};

/// Index of the home/charging station in every point set.
pub const HOME_INDEX: usize = 0;

/// An ordered sequence of point indices for the robot to visit.
///
/// The first and last stops are always [`HOME_INDEX`]. Interior occurrences
/// of [`HOME_INDEX`] are forced recharge returns; every other index appears
/// exactly once. Renderers consume the stop sequence together with the
/// original point coordinates.
///
/// # Examples
///
/// ```
/// use charge_tour::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 0, 3, 0]);
/// assert_eq!(tour.num_targets(), 3);
/// assert_eq!(tour.num_recharges(), 1);
/// assert!(tour.is_home_framed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a stop sequence.
    pub fn new(stops: Vec<usize>) -> Self {
        Self { stops }
    }

    /// The stop sequence, as indices into the caller's point set.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total number of stops, home visits included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the tour has no stops at all.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of target visits (stops other than home).
    pub fn num_targets(&self) -> usize {
        self.stops.iter().filter(|&&s| s != HOME_INDEX).count()
    }

    /// Number of forced recharge returns (interior home stops).
    pub fn num_recharges(&self) -> usize {
        if self.stops.len() < 2 {
            return 0;
        }
        self.stops[1..self.stops.len() - 1]
            .iter()
            .filter(|&&s| s == HOME_INDEX)
            .count()
    }

    /// Returns `true` if the tour starts and ends at home.
    pub fn is_home_framed(&self) -> bool {
        self.stops.first() == Some(&HOME_INDEX) && self.stops.last() == Some(&HOME_INDEX)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let tour = Tour::new(vec![0, 1, 2, 0, 3, 4, 0]);
        assert_eq!(tour.len(), 7);
        assert_eq!(tour.num_targets(), 4);
        assert_eq!(tour.num_recharges(), 1);
        assert!(tour.is_home_framed());
        assert!(!tour.is_empty());
    }

    #[test]
    fn test_no_interior_recharge() {
        let tour = Tour::new(vec![0, 1, 0]);
        assert_eq!(tour.num_recharges(), 0);
        assert_eq!(tour.num_targets(), 1);
    }

    #[test]
    fn test_degenerate_home_only() {
        let tour = Tour::new(vec![0]);
        assert_eq!(tour.num_targets(), 0);
        assert_eq!(tour.num_recharges(), 0);
        assert!(tour.is_home_framed());
    }

    #[test]
    fn test_unframed() {
        assert!(!Tour::new(vec![1, 0]).is_home_framed());
        assert!(!Tour::new(vec![]).is_home_framed());
    }

    #[test]
    fn test_serializes_for_renderer() {
        let tour = Tour::new(vec![0, 2, 1, 0]);
        let json = serde_json::to_string(&tour).expect("serializes");
        let back: Tour = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(tour, back);
        assert_eq!(Vec::from(back), vec![0, 2, 1, 0]);
    }
}
