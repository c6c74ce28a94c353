use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn is_within_domain(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Delivery order as provided by the order source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub food: bool,
    #[serde(default)]
    pub vip: bool,
    pub pickup: Location,
    pub delivery: Location,
}

/// Vehicle used by a courier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vehicle {
    Bicycle,
    Motorcycle,
    ElectricScooter,
}

impl Vehicle {
    /// Motorized vehicles are not bound by the distance threshold
    #[inline]
    pub fn ignores_distance_threshold(self) -> bool {
        matches!(self, Vehicle::Motorcycle | Vehicle::ElectricScooter)
    }
}

/// Courier as provided by the courier source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub id: String,
    pub name: String,
    #[serde(rename = "box", default)]
    pub has_box: bool,
    pub vehicle: Vehicle,
    pub location: Location,
}
