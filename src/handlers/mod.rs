// Handler exports
pub mod orders;

pub use orders::{courier_orders, list_orders, stats, AppState, OrdersError};
