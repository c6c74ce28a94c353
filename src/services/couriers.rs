use std::path::Path;

use crate::models::Courier;
use crate::services::json::{read_json_file, warn_out_of_domain, SourceError};

/// Upstream source of couriers
pub trait CourierSource: Send + Sync {
    /// `Ok(None)` when no courier has the given identifier
    fn find_by_id(&self, courier_id: &str) -> Result<Option<Courier>, SourceError>;

    fn find_all(&self) -> Result<Vec<Courier>, SourceError>;
}

/// Read-only courier source backed by a vector
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourierSource {
    couriers: Vec<Courier>,
}

impl InMemoryCourierSource {
    pub fn new(couriers: Vec<Courier>) -> Self {
        for courier in &couriers {
            warn_out_of_domain("Courier", &courier.id, &courier.location);
        }
        Self { couriers }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let couriers: Vec<Courier> = read_json_file(&path)?;
        tracing::info!("Loaded {} couriers from {}", couriers.len(), path.as_ref().display());
        Ok(Self::new(couriers))
    }
}

impl CourierSource for InMemoryCourierSource {
    fn find_by_id(&self, courier_id: &str) -> Result<Option<Courier>, SourceError> {
        Ok(self
            .couriers
            .iter()
            .find(|courier| courier.id == courier_id)
            .cloned())
    }

    fn find_all(&self) -> Result<Vec<Courier>, SourceError> {
        Ok(self.couriers.clone())
    }
}
