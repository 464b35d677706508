//! Domain model types for charge-constrained tour planning.
//!
//! Provides the core abstractions: 2-D points identified by coordinate
//! value, the robot battery with its safety reserve, the visit log threaded
//! through every batch, and the final tour of point indices.

mod battery;
mod point;
mod tour;
mod visit_log;

pub use battery::{Battery, DEFAULT_BATTERY_CAPACITY, RESERVE_RATIO};
pub use point::{Point, PointIndex, PointKey};
pub use tour::{Tour, HOME_INDEX};
pub use visit_log::VisitLog;
