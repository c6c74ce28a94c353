use serde::{Deserialize, Serialize};
use crate::models::domain::Order;

/// Public view of an order: only identifier and description are exposed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,
    pub description: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            description: order.description,
        }
    }
}

/// Aggregate statistics over all orders and couriers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "numberOfOrders")]
    pub number_of_orders: usize,
    #[serde(rename = "numberOfCouriers")]
    pub number_of_couriers: usize,
    #[serde(rename = "percentageOfNonFoodOrders")]
    pub percentage_of_non_food_orders: f64,
    #[serde(rename = "averageCourierToPickupDistanceInMeters")]
    pub average_courier_to_pickup_distance_in_meters: f64,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
