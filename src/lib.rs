//! # charge-tour
//!
//! Tour planning for a range-limited mobile robot. Given a set of 2-D target
//! points and a fixed home/charging station, produces a single closed tour
//! that visits every target exactly once, returning to the station to
//! recharge whenever the next leg would drain the battery past its safety
//! reserve.
//!
//! Construction is greedy (nearest unvisited neighbor per step) and operates
//! on bounded-size batches of points, because the precomputed distance grid
//! is quadratic in batch size. The result is a fast heuristic tour, not an
//! optimal one.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Battery, Tour, VisitLog)
//! - [`distance`] — Euclidean distance, neighbor ranking, batch grid
//! - [`planner`] — Charge-constrained greedy walker and batch orchestration
//! - [`evaluation`] — Tour replay: metrics and constraint violations
//! - [`error`] — Planning error taxonomy
//!
//! ## Example
//!
//! ```
//! use charge_tour::models::Point;
//! use charge_tour::planner::{plan_tour, PlannerConfig};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0), // home / charging station
//!     Point::new(1.0, 0.0),
//!     Point::new(2.0, 0.0),
//! ];
//! let config = PlannerConfig::new(2);
//! let tour = plan_tour(&points, &config).expect("valid input");
//!
//! assert_eq!(tour.stops().first(), Some(&0));
//! assert_eq!(tour.stops().last(), Some(&0));
//! assert_eq!(tour.num_targets(), 2);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod planner;
