// Core algorithm exports
pub mod distance;
pub mod error;
pub mod filters;
pub mod priority;
pub mod sorter;
pub mod stats;

pub use distance::haversine_distance;
pub use error::ConfigurationError;
pub use filters::OrderFilter;
pub use priority::{distance_slot, PrioritizedOrder, RankingKey};
pub use sorter::{CriteriaOrder, OrderSorter, SortingCriterion};
pub use stats::calculate_stats;
