// HTTP handlers for order endpoints

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use crate::error::ApiError;
use crate::orders::{CreateOrderRequest, HistoricalOrder, OrderCreatedResponse, OrderResult};
use crate::AppState;

/// Handler for POST /api/orders
/// Prices and records a new order
///
/// The body is read as raw bytes so every rejection, including an unreadable
/// body, comes back as a JSON `ErrorResponse`. An empty body or a JSON `null`
/// is treated as an order without items.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order recorded", body = OrderCreatedResponse),
        (status = 400, description = "Order rejected or body malformed", body = crate::error::ErrorResponse, example = json!({"error": "No items in order", "error_code": "EMPTY_ITEMS", "timestamp": "2024-05-01T15:45:00+00:00"})),
        (status = 500, description = "Order could not be recorded", body = crate::error::ErrorResponse)
    ),
    tag = "orders"
)]
pub async fn create_order_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OrderCreatedResponse>, ApiError> {
    let request = parse_order_request(&body)?;
    tracing::debug!("Creating order with {} line items", request.items.len());

    let order = state.order_service.create_order(request).await?;

    Ok(Json(order.into()))
}

fn parse_order_request(body: &[u8]) -> Result<CreateOrderRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateOrderRequest::default());
    }

    serde_json::from_slice::<Option<CreateOrderRequest>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::MalformedBody(e.to_string()))
}

/// Handler for GET /api/orders
/// Returns the order history, newest first
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Order history", body = Vec<HistoricalOrder>)
    ),
    tag = "orders"
)]
pub async fn list_orders_handler(State(state): State<AppState>) -> Json<Vec<HistoricalOrder>> {
    let orders = state.order_service.list_orders().await;
    tracing::debug!("Retrieved {} orders", orders.len());
    Json(orders)
}

/// Handler for GET /api/orders/{order_number}
#[utoipa::path(
    get,
    path = "/api/orders/{order_number}",
    params(
        ("order_number" = String, Path, description = "Order number, e.g. ORD001000")
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResult),
        (status = 404, description = "Order not found", body = crate::error::ErrorResponse)
    ),
    tag = "orders"
)]
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(order_number): Path<String>,
) -> Result<Json<OrderResult>, ApiError> {
    let order = state.order_service.get_order(&order_number).await?;
    Ok(Json(order))
}
