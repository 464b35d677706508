//! Tour replay: metrics and constraint checking.
//!
//! Renderers trust the planner's output; this module is the oracle that
//! earns that trust. [`TourEvaluator`] replays a tour against the point set
//! and charge model, reporting distance and recharge metrics along with any
//! constraint violations.

mod evaluator;

pub use evaluator::{TourEvaluator, TourMetrics, Violation, ViolationType};
