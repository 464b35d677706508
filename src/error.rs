//! Planning error taxonomy.

use std::error::Error;
use std::fmt;

/// Errors reported by the tour planner before any batch work begins.
///
/// Both variants are configuration problems: the planner fails fast and
/// returns no partial tour.
///
/// # Examples
///
/// ```
/// use charge_tour::error::PlanError;
///
/// let err = PlanError::InvalidBatchSize { limit: 0, targets: 10 };
/// assert_eq!(
///     err.to_string(),
///     "invalid batch size 0: must be between 1 and the target count (10)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The point set has no targets (fewer than two points supplied).
    EmptyInput,
    /// The batch limit is zero or larger than the number of targets.
    InvalidBatchSize {
        /// The rejected batch limit.
        limit: usize,
        /// Number of target points in the input.
        targets: usize,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::EmptyInput => {
                write!(f, "point set must contain home and at least one target")
            }
            PlanError::InvalidBatchSize { limit, targets } => write!(
                f,
                "invalid batch size {limit}: must be between 1 and the target count ({targets})"
            ),
        }
    }
}

impl Error for PlanError {}
