use crate::core::distance::haversine_distance;
use crate::models::{Courier, Order, StatsResponse};

/// Aggregate statistics over every order and courier
///
/// The average distance is taken over all (courier, order) pairs, from the
/// courier's location to the order's pickup location. Empty inputs yield
/// zeros instead of NaN.
pub fn calculate_stats(orders: &[Order], couriers: &[Courier]) -> StatsResponse {
    let number_of_orders = orders.len();
    let number_of_couriers = couriers.len();

    let non_food_orders = orders.iter().filter(|order| !order.food).count();
    let percentage_of_non_food_orders = if number_of_orders > 0 {
        non_food_orders as f64 / number_of_orders as f64
    } else {
        0.0
    };

    let pairs = number_of_orders * number_of_couriers;
    let total_distance_km: f64 = couriers
        .iter()
        .flat_map(|courier| {
            orders
                .iter()
                .map(move |order| haversine_distance(&courier.location, &order.pickup))
        })
        .sum();

    let average_courier_to_pickup_distance_in_meters = if pairs > 0 {
        total_distance_km / pairs as f64 * 1000.0
    } else {
        0.0
    };

    StatsResponse {
        number_of_orders,
        number_of_couriers,
        percentage_of_non_food_orders,
        average_courier_to_pickup_distance_in_meters,
    }
}
