use thiserror::Error;

use crate::core::sorter::SortingCriterion;

/// Invalid configuration detected while building filters or the sorter
///
/// These are startup errors: a correctly started process never produces
/// them while serving a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Distance threshold has an invalid value: {0} (must be > 0 km)")]
    InvalidDistanceThreshold(f64),

    #[error("Slot distance has an invalid value: {0} (must be > 0 km)")]
    InvalidSlotDistance(f64),

    #[error("Unknown sorting criterion: {0}")]
    UnknownCriterion(String),

    #[error("Expected exactly {expected} sorting criteria, got {0}", expected = SortingCriterion::ALL.len())]
    CriteriaCount(usize),

    #[error("Sorting criterion listed more than once: {0}")]
    DuplicateCriterion(SortingCriterion),
}
