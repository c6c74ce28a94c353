// Service exports
pub mod couriers;
pub mod json;
pub mod orders;

pub use couriers::{CourierSource, InMemoryCourierSource};
pub use json::SourceError;
pub use orders::{InMemoryOrderSource, OrderSource};
