use crate::core::distance::haversine_distance;
use crate::models::{Courier, Order};

/// Derived ranking key of an order for one courier
///
/// Computed per request and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingKey {
    pub distance_to_courier_km: f64,
    /// Distance slot; 0 is the closest one
    pub priority: u64,
}

impl RankingKey {
    /// Derive the key from the order's delivery location
    #[inline]
    pub fn derive(order: &Order, courier: &Courier, slot_distance_km: f64) -> Self {
        let distance_to_courier_km = haversine_distance(&order.delivery, &courier.location);

        Self {
            distance_to_courier_km,
            priority: distance_slot(distance_to_courier_km, slot_distance_km),
        }
    }
}

/// Index of the slot a distance falls into
///
/// Truncating division: a distance exactly on a boundary belongs to the
/// next slot. The cast saturates, which only happens for slot widths far
/// below a millimetre.
#[inline]
pub fn distance_slot(distance_km: f64, slot_distance_km: f64) -> u64 {
    (distance_km / slot_distance_km).floor() as u64
}

/// An order paired with its ranking key for a courier
#[derive(Debug, Clone)]
pub struct PrioritizedOrder {
    pub order: Order,
    pub key: RankingKey,
}

impl PrioritizedOrder {
    pub fn new(order: Order, courier: &Courier, slot_distance_km: f64) -> Self {
        let key = RankingKey::derive(&order, courier, slot_distance_km);
        Self { order, key }
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}
