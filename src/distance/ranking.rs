//! Euclidean distance and distance-ranked candidate lists.

use crate::models::Point;

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use charge_tour::distance::euclidean;
/// use charge_tour::models::Point;
///
/// let d = euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Ranks `candidates` by ascending distance from `reference`.
///
/// A candidate whose coordinates equal the reference's own is skipped:
/// self-distance is meaningless for routing. Ties keep the candidates'
/// input order (stable sort), so rankings are deterministic.
///
/// # Examples
///
/// ```
/// use charge_tour::distance::rank_by_distance;
/// use charge_tour::models::Point;
///
/// let home = Point::new(0.0, 0.0);
/// let candidates = [Point::new(5.0, 0.0), Point::new(1.0, 0.0)];
/// let ranked = rank_by_distance(&home, &candidates);
///
/// assert_eq!(ranked[0].0, candidates[1]);
/// assert!((ranked[0].1 - 1.0).abs() < 1e-10);
/// assert!((ranked[1].1 - 5.0).abs() < 1e-10);
/// ```
pub fn rank_by_distance(reference: &Point, candidates: &[Point]) -> Vec<(Point, f64)> {
    let mut ranked: Vec<(Point, f64)> = candidates
        .iter()
        .filter(|c| c.key() != reference.key())
        .map(|c| (*c, euclidean(reference, c)))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}
