use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::core::{calculate_stats, ConfigurationError, OrderFilter, OrderSorter};
use crate::models::{CourierOrdersRequest, ErrorResponse, Order, OrderView, StatsResponse};
use crate::services::{CourierSource, OrderSource, SourceError};

/// Errors surfaced to the caller of a handler
#[derive(Debug, Error)]
pub enum OrdersError {
    #[error("Courier not found: {0}")]
    CourierNotFound(String),

    #[error("Validation failed: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

impl From<&OrdersError> for ErrorResponse {
    fn from(err: &OrdersError) -> Self {
        let (error, status_code) = match err {
            OrdersError::CourierNotFound(_) => ("Courier not found", 404),
            OrdersError::InvalidRequest(_) => ("Validation failed", 400),
            OrdersError::Configuration(_) => ("Invalid configuration", 500),
            OrdersError::Source(_) => ("Failed to read data", 500),
        };

        ErrorResponse {
            error: error.to_string(),
            message: err.to_string(),
            status_code,
        }
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderSource>,
    pub couriers: Arc<dyn CourierSource>,
    pub order_filter: Arc<OrderFilter>,
    pub order_sorter: Arc<OrderSorter>,
}

impl AppState {
    pub fn new(
        orders: Arc<dyn OrderSource>,
        couriers: Arc<dyn CourierSource>,
        order_filter: OrderFilter,
        order_sorter: OrderSorter,
    ) -> Self {
        Self {
            orders,
            couriers,
            order_filter: Arc::new(order_filter),
            order_sorter: Arc::new(order_sorter),
        }
    }
}

/// List every order, unfiltered and in source order
pub fn list_orders(state: &AppState) -> Result<Vec<OrderView>, OrdersError> {
    let orders = state.orders.find_all()?;
    tracing::debug!("Listing {} orders", orders.len());

    Ok(orders.into_iter().map(OrderView::from).collect())
}

/// List the orders a courier may take, best first
///
/// Resolves the courier, keeps the orders accepted by both the box and the
/// distance filters, ranks them and projects them to views.
pub fn courier_orders(
    state: &AppState,
    req: &CourierOrdersRequest,
) -> Result<Vec<OrderView>, OrdersError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for courier_orders request: field_errors={:?}", errors);
        return Err(errors.into());
    }

    let courier_id = &req.courier_id;

    let courier = state
        .couriers
        .find_by_id(courier_id)?
        .ok_or_else(|| OrdersError::CourierNotFound(courier_id.clone()))?;

    let orders = state.orders.find_all()?;
    let total_orders = orders.len();

    let by_box = state.order_filter.filter_by_courier_box(&courier);
    let by_distance = state.order_filter.filter_by_distance_to_courier(&courier)?;

    let eligible: Vec<Order> = orders
        .into_iter()
        .filter(|order| by_box(order))
        .filter(|order| by_distance(order))
        .collect();

    tracing::debug!(
        "{} of {} orders eligible for courier {} (box: {}, vehicle: {:?})",
        eligible.len(),
        total_orders,
        courier_id,
        courier.has_box,
        courier.vehicle
    );

    let views: Vec<OrderView> = state
        .order_sorter
        .sort_orders(eligible, &courier)
        .into_iter()
        .map(OrderView::from)
        .collect();

    tracing::info!(
        "Returning {} orders for courier {} (from {} orders)",
        views.len(),
        courier_id,
        total_orders
    );

    Ok(views)
}

/// Aggregate statistics over all orders and couriers
pub fn stats(state: &AppState) -> Result<StatsResponse, OrdersError> {
    let orders = state.orders.find_all()?;
    let couriers = state.couriers.find_all()?;

    Ok(calculate_stats(&orders, &couriers))
}
