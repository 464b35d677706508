//! Batch orchestration: input validation, batch splitting, per-batch
//! walking, and stitching the final tour.
//!
//! The point set is split into contiguous near-equal batches no larger than
//! the configured limit, because each batch's distance grid is quadratic in
//! batch size. Batches run strictly in order: every walk reads and updates
//! the one visit log, so a later batch never re-emits a point an earlier
//! batch already covered.

mod walker;

use crate::distance::BatchGrid;
use crate::error::PlanError;
use crate::models::{
    Battery, Point, PointIndex, Tour, VisitLog, DEFAULT_BATTERY_CAPACITY, HOME_INDEX,
};

use walker::BatchWalker;

/// Batch limit used when a config does not set one.
pub const DEFAULT_BATCH_LIMIT: usize = 500;

/// Tunables for tour planning.
///
/// The batch limit bounds how many points share one distance grid, trading
/// grid memory/time against how far the greedy walk can see. The battery
/// capacity bounds how far the robot can travel between recharges.
///
/// # Examples
///
/// ```
/// use charge_tour::planner::PlannerConfig;
///
/// let config = PlannerConfig::new(50).with_battery_capacity(5.0);
/// assert_eq!(config.batch_limit(), 50);
/// assert_eq!(config.battery_capacity(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    batch_limit: usize,
    battery_capacity: f64,
}

impl PlannerConfig {
    /// Creates a config with the given batch limit and the default battery
    /// capacity.
    pub fn new(batch_limit: usize) -> Self {
        Self {
            batch_limit,
            battery_capacity: DEFAULT_BATTERY_CAPACITY,
        }
    }

    /// Sets the battery capacity.
    pub fn with_battery_capacity(mut self, capacity: f64) -> Self {
        self.battery_capacity = capacity;
        self
    }

    /// Maximum number of points per batch.
    pub fn batch_limit(&self) -> usize {
        self.batch_limit
    }

    /// Battery capacity the walk plans against.
    pub fn battery_capacity(&self) -> f64 {
        self.battery_capacity
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_LIMIT)
    }
}

/// Plans a closed tour over `points`, starting and ending at `points[0]`.
///
/// Every target (index 1..N) is visited exactly once; interior returns to
/// index 0 appear wherever the battery forced a recharge. Identical inputs
/// produce identical tours.
///
/// # Errors
///
/// - [`PlanError::EmptyInput`] — fewer than two points (home plus at least
///   one target required)
/// - [`PlanError::InvalidBatchSize`] — batch limit of zero, or larger than
///   the number of targets
///
/// # Examples
///
/// ```
/// use charge_tour::models::Point;
/// use charge_tour::planner::{plan_tour, PlannerConfig};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(10.0, 0.0),
/// ];
/// let tour = plan_tour(&points, &PlannerConfig::new(3)).expect("valid input");
///
/// // The far point is unreachable on the remaining charge, so a recharge
/// // return is inserted before it.
/// assert_eq!(tour.stops(), &[0, 1, 2, 0, 3, 0]);
/// ```
pub fn plan_tour(points: &[Point], config: &PlannerConfig) -> Result<Tour, PlanError> {
    if points.len() < 2 {
        return Err(PlanError::EmptyInput);
    }
    let targets = &points[1..];
    let limit = config.batch_limit();
    if limit == 0 || limit > targets.len() {
        return Err(PlanError::InvalidBatchSize {
            limit,
            targets: targets.len(),
        });
    }

    let home = points[0];
    let index = PointIndex::new(points);
    let mut visits = VisitLog::new(points);
    let mut battery = Battery::new(config.battery_capacity());

    let mut stops = vec![HOME_INDEX];
    for (i, batch) in split_batches(targets, limit).enumerate() {
        log::debug!("planning batch {i}: {} points", batch.len());
        let grid = BatchGrid::build(&home, batch);
        let order =
            BatchWalker::new(home, batch, &grid, &index, &mut visits, &mut battery).walk();
        // Each batch order opens at home; the tour already ends with that
        // stop, so only the tail is appended.
        stops.extend(order.into_iter().skip(1));
    }

    Ok(Tour::new(stops))
}

/// Splits `targets` into `ceil(n / limit)` contiguous chunks whose sizes
/// differ by at most one, none larger than `limit`.
fn split_batches(targets: &[Point], limit: usize) -> impl Iterator<Item = &[Point]> {
    let n = targets.len();
    let num_batches = n.div_ceil(limit);
    let base = n / num_batches;
    let extra = n % num_batches;

    (0..num_batches).scan(0usize, move |start, i| {
        let size = base + usize::from(i < extra);
        let chunk = &targets[*start..*start + size];
        *start += size;
        Some(chunk)
    })
}
