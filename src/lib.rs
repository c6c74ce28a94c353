//! Courier Orders - order eligibility and ranking for delivery couriers
//!
//! Given a courier, this library keeps the orders the courier is able to take
//! (box capability, distance to the delivery point) and ranks them by a
//! configurable precedence of criteria.

pub mod config;
pub mod core;
pub mod handlers;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{haversine_distance, ConfigurationError, CriteriaOrder, OrderFilter, OrderSorter, SortingCriterion};
pub use self::models::{Courier, CourierOrdersRequest, Location, Order, OrderView, StatsResponse, Vehicle};
