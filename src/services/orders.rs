use std::path::Path;

use crate::models::Order;
use crate::services::json::{read_json_file, warn_out_of_domain, SourceError};

/// Upstream source of orders
pub trait OrderSource: Send + Sync {
    fn find_all(&self) -> Result<Vec<Order>, SourceError>;
}

/// Read-only order source backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderSource {
    orders: Vec<Order>,
}

impl InMemoryOrderSource {
    pub fn new(orders: Vec<Order>) -> Self {
        for order in &orders {
            warn_out_of_domain("Order pickup", &order.id, &order.pickup);
            warn_out_of_domain("Order delivery", &order.id, &order.delivery);
        }
        Self { orders }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let orders: Vec<Order> = serde_json::from_str(json)?;
        Ok(Self::new(orders))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let orders: Vec<Order> = read_json_file(&path)?;
        tracing::info!("Loaded {} orders from {}", orders.len(), path.as_ref().display());
        Ok(Self::new(orders))
    }
}

impl OrderSource for InMemoryOrderSource {
    fn find_all(&self) -> Result<Vec<Order>, SourceError> {
        Ok(self.orders.clone())
    }
}
