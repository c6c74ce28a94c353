// Integration tests for Courier Orders

use std::sync::Arc;

use courier_orders::config::Settings;
use courier_orders::core::{CriteriaOrder, OrderFilter, OrderSorter};
use courier_orders::handlers::{self, AppState, OrdersError};
use courier_orders::models::{Courier, CourierOrdersRequest, Location, Order, Vehicle};
use courier_orders::services::{InMemoryCourierSource, InMemoryOrderSource};
use courier_orders::haversine_distance;

fn create_courier() -> Courier {
    Courier {
        id: "courier-1".to_string(),
        name: "Manolo Escobar".to_string(),
        has_box: true,
        vehicle: Vehicle::Motorcycle,
        location: Location::new(41.3965463, 2.1963997), // Barcelona
    }
}

fn create_order(id: &str, vip: bool, food: bool, delivery: Location, distance_km: f64) -> Order {
    // Guard against typos in the fixture coordinates
    let actual = haversine_distance(&create_courier().location, &delivery);
    assert!(
        (actual - distance_km).abs() < 0.001,
        "order {}: expected {}km, got {}km",
        id,
        distance_km,
        actual
    );

    Order {
        id: id.to_string(),
        description: "any description".to_string(),
        food,
        vip,
        pickup: delivery,
        delivery,
    }
}

/// Eleven orders with distinct ranking keys, ids ordered by distance
fn create_orders() -> Vec<Order> {
    vec![
        // 0-500 m -> slot 0
        create_order("1", true, true, Location::new(41.397117, 2.196976), 0.079),
        create_order("2", true, false, Location::new(41.3972496, 2.1960500), 0.083),
        create_order("3", false, true, Location::new(41.3973345, 2.19493746), 0.150),
        create_order("4", false, false, Location::new(41.3966585, 2.19393968), 0.205),
        create_order("5", false, false, Location::new(41.3950086, 2.1942186), 0.249),
        // 500-1000 m -> slot 1
        create_order("6", false, true, Location::new(41.4014394, 2.2030515), 0.777),
        create_order("7", true, false, Location::new(41.402799, 2.202000), 0.837),
        // 1000-1500 m -> slot 2
        create_order("8", false, false, Location::new(41.4034674, 2.2066564), 1.15),
        create_order("9", true, true, Location::new(41.405326, 2.206678), 1.299),
        // further away
        create_order("10", true, true, Location::new(41.4154934, 2.2122804), 2.488),
        create_order("11", true, true, Location::new(41.419637, 2.201211), 2.598),
    ]
}

/// Fixed permutation so the input order never matches any expected output
fn shuffled(orders: Vec<Order>) -> Vec<Order> {
    let positions = [7, 2, 10, 0, 5, 9, 3, 1, 8, 6, 4];
    positions.iter().map(|&i| orders[i].clone()).collect()
}

fn sort_with(criteria: &[&str]) -> Vec<String> {
    let sorter = OrderSorter::new(CriteriaOrder::parse(criteria).unwrap(), 0.5).unwrap();
    sorter
        .sort_orders(shuffled(create_orders()), &create_courier())
        .into_iter()
        .map(|order| order.id)
        .collect()
}

#[test]
fn test_priorities() {
    let sorter = OrderSorter::new(CriteriaOrder::default(), 0.5).unwrap();
    let courier = create_courier();

    let priorities: Vec<u64> = create_orders()
        .into_iter()
        .map(|order| sorter.prioritize(order, &courier).key.priority)
        .collect();

    assert_eq!(priorities, vec![0, 0, 0, 0, 0, 1, 1, 2, 2, 4, 5]);
}

#[test]
fn test_sort_default_criteria() {
    let sorted = sort_with(&["DISTANCE_SLOT", "VIP", "FOOD", "ABSOLUTE_DISTANCE"]);
    assert_eq!(sorted, vec!["1", "2", "3", "4", "5", "7", "6", "9", "8", "10", "11"]);
}

#[test]
fn test_sort_vip_then_food_then_slots_then_distance() {
    let sorted = sort_with(&["VIP", "FOOD", "DISTANCE_SLOT", "ABSOLUTE_DISTANCE"]);
    assert_eq!(sorted, vec!["1", "9", "10", "11", "2", "7", "3", "6", "4", "5", "8"]);
}

#[test]
fn test_sort_food_then_distance_then_slots_then_vip() {
    let sorted = sort_with(&["FOOD", "ABSOLUTE_DISTANCE", "DISTANCE_SLOT", "VIP"]);
    assert_eq!(sorted, vec!["1", "3", "6", "9", "10", "11", "2", "4", "5", "7", "8"]);
}

#[test]
fn test_sort_distance_then_slots_then_food_then_vip() {
    let sorted = sort_with(&["ABSOLUTE_DISTANCE", "DISTANCE_SLOT", "FOOD", "VIP"]);
    assert_eq!(sorted, vec!["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11"]);
}

#[test]
fn test_sort_is_idempotent() {
    let sorter = OrderSorter::new(CriteriaOrder::default(), 0.5).unwrap();
    let courier = create_courier();

    let once = sorter.sort_orders(shuffled(create_orders()), &courier);
    let twice = sorter.sort_orders(once.clone(), &courier);
    assert_eq!(once, twice);
}

#[test]
fn test_sort_empty() {
    let sorter = OrderSorter::new(CriteriaOrder::default(), 0.5).unwrap();
    assert!(sorter.sort_orders(Vec::new(), &create_courier()).is_empty());
}

#[test]
fn test_concurrent_requests_share_configuration() {
    let state = AppState::new(
        Arc::new(InMemoryOrderSource::new(shuffled(create_orders()))),
        Arc::new(InMemoryCourierSource::new(vec![create_courier()])),
        OrderFilter::new("pizza,cake", ",", 5.0),
        OrderSorter::new(CriteriaOrder::default(), 0.5).unwrap(),
    );
    let expected = handlers::courier_orders(&state, &CourierOrdersRequest::new("courier-1")).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                scope.spawn(move || {
                    handlers::courier_orders(&state, &CourierOrdersRequest::new("courier-1")).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn sample_state() -> AppState {
    let root = env!("CARGO_MANIFEST_DIR");
    let settings = Settings::load_from(format!("{}/config/default.toml", root)).unwrap();

    AppState::new(
        Arc::new(InMemoryOrderSource::from_path(format!("{}/{}", root, settings.data.orders_path)).unwrap()),
        Arc::new(InMemoryCourierSource::from_path(format!("{}/{}", root, settings.data.couriers_path)).unwrap()),
        settings.order_filter().unwrap(),
        settings.order_sorter().unwrap(),
    )
}

#[test]
fn test_end_to_end_with_sample_data() {
    let state = sample_state();

    // Motorcycle with a box: everything, ranked
    let views = handlers::courier_orders(&state, &CourierOrdersRequest::new("courier-1")).unwrap();
    let ids: Vec<&str> = views.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids.len(), 7);
    assert_eq!(ids[0], "order-2");
    assert_eq!(ids[6], "order-7");

    // Bicycle without a box: no pizza, cake or flamingo, nothing out of town
    let views = handlers::courier_orders(&state, &CourierOrdersRequest::new("courier-2")).unwrap();
    let ids: Vec<&str> = views.iter().map(|v| v.id.as_str()).collect();
    assert!(!ids.contains(&"order-1"));
    assert!(!ids.contains(&"order-3"));
    assert!(!ids.contains(&"order-5"));
    assert!(!ids.contains(&"order-7"));
    assert_eq!(ids, vec!["order-2", "order-4", "order-6"]);
}

#[test]
fn test_end_to_end_unknown_courier() {
    let state = sample_state();
    let result = handlers::courier_orders(&state, &CourierOrdersRequest::new("courier-404"));
    assert!(matches!(result, Err(OrdersError::CourierNotFound(_))));
}

#[test]
fn test_end_to_end_stats() {
    let state = sample_state();
    let stats = handlers::stats(&state).unwrap();

    assert_eq!(stats.number_of_orders, 7);
    assert_eq!(stats.number_of_couriers, 3);
    assert!((stats.percentage_of_non_food_orders - 3.0 / 7.0).abs() < 1e-9);
    assert!(stats.average_courier_to_pickup_distance_in_meters > 0.0);
}
