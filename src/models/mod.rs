// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Courier, Location, Order, Vehicle};
pub use requests::CourierOrdersRequest;
pub use responses::{ErrorResponse, OrderView, StatsResponse};
