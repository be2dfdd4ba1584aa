// HTTP tests for the Alimento API
// Each test builds its own AppState, so tests share nothing and run in parallel

use super::*;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::FixedOffset;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use crate::orders::PricePolicy;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_config() -> AppConfig {
    AppConfig {
        seed_history: false,
        ..AppConfig::default()
    }
}

fn create_test_app(config: AppConfig) -> TestServer {
    let state = AppState::from_config(config).expect("Failed to build state");
    TestServer::new(create_router(state)).unwrap()
}

fn sample_order_payload() -> serde_json::Value {
    json!({
        "customer_name": "Walk-in Customer",
        "items": [
            { "id": 1, "name": "CHORIZO JALAPENO", "price": 200, "quantity": 2 },
            { "id": 4, "name": "TEQUILA SUNRISE", "price": 120, "quantity": 1 }
        ]
    })
}

// ============================================================================
// Catalog (GET /api/catalog, GET /api/menu)
// ============================================================================

#[tokio::test]
async fn test_catalog_lists_menu_in_declaration_order() {
    let server = create_test_app(test_config());

    let response = server.get("/api/catalog").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let items: Vec<MenuItem> = response.json();
    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let nachorizo = MenuItem::new(6, "NACHORIZO", dec!(190), "Side", true);
    assert!(items.contains(&nachorizo));
}

#[tokio::test]
async fn test_catalog_is_stable_and_menu_alias_matches() {
    let server = create_test_app(test_config());

    let first: Vec<MenuItem> = server.get("/api/catalog").await.json();
    let second: Vec<MenuItem> = server.get("/api/catalog").await.json();
    let alias: Vec<MenuItem> = server.get("/api/menu").await.json();

    assert_eq!(first, second);
    assert_eq!(first, alias);
}

#[tokio::test]
async fn test_catalog_prices_are_json_numbers() {
    let server = create_test_app(test_config());

    let body: serde_json::Value = server.get("/api/catalog").await.json();
    assert_eq!(body[0]["price"].as_f64(), Some(200.0));
    assert_eq!(body[0]["available"], true);
}

// ============================================================================
// Order intake (POST /api/orders)
// ============================================================================

#[tokio::test]
async fn test_create_order_computes_total() {
    let server = create_test_app(test_config());

    let response = server.post("/api/orders").json(&sample_order_payload()).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Order successfully placed!");
    assert_eq!(body["total"].as_f64(), Some(520.0));
    assert_eq!(body["status"], "pending");
    assert_eq!(body["customer_name"], "Walk-in Customer");
    assert!(body["order_number"].as_str().unwrap().starts_with("ORD"));
    assert!(body["timestamp"].is_string());

    let order: OrderResult = response.json();
    assert_eq!(order.total, dec!(520));
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].quantity, 2);
}

#[tokio::test]
async fn test_create_order_with_empty_items_rejected() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "customer_name": "Ana", "items": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No items in order");
    assert_eq!(body["error_code"], "EMPTY_ITEMS");
    assert!(body.get("order_number").is_none());
}

#[tokio::test]
async fn test_create_order_without_items_key_rejected() {
    let server = create_test_app(test_config());

    let response = server.post("/api/orders").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No items in order");

    let history: Vec<HistoricalOrder> = server.get("/api/orders").await.json();
    assert!(history.is_empty(), "rejected orders must not be recorded");
}

#[tokio::test]
async fn test_blank_customer_name_becomes_walk_in() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "customer_name": "", "items": [{ "id": 5, "quantity": 1 }] }))
        .await;

    let order: OrderResult = response.json();
    assert_eq!(order.customer_name, "Walk-in Customer");
    assert_eq!(order.total, dec!(120));
}

#[tokio::test]
async fn test_named_customer_passes_through() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "customer_name": "Maria Santos", "items": [{ "id": 2, "quantity": 1 }] }))
        .await;

    let order: OrderResult = response.json();
    assert_eq!(order.customer_name, "Maria Santos");
}

#[tokio::test]
async fn test_rapid_orders_get_distinct_numbers() {
    let server = create_test_app(test_config());

    let first: OrderResult = server.post("/api/orders").json(&sample_order_payload()).await.json();
    let second: OrderResult = server.post("/api/orders").json(&sample_order_payload()).await.json();

    assert_ne!(first.order_number, second.order_number);
}

#[tokio::test]
async fn test_unknown_item_rejected() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "items": [{ "id": 99, "price": 10, "quantity": 1 }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "UNKNOWN_ITEM");
}

#[tokio::test]
async fn test_zero_quantity_rejected() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "items": [{ "id": 1, "quantity": 0 }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "INVALID_QUANTITY");
}

#[tokio::test]
async fn test_negative_quantity_rejected_as_json() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "items": [{ "id": 1, "price": 200, "quantity": -1 }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "INVALID_QUANTITY");

    let history: Vec<HistoricalOrder> = server.get("/api/orders").await.json();
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_null_items_rejected_as_empty_order() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "customer_name": "Ana", "items": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No items in order");
    assert_eq!(body["error_code"], "EMPTY_ITEMS");
}

#[tokio::test]
async fn test_missing_body_rejected_as_empty_order() {
    let server = create_test_app(test_config());

    let response = server.post("/api/orders").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "No items in order");
    assert_eq!(body["error_code"], "EMPTY_ITEMS");
}

#[tokio::test]
async fn test_malformed_body_returns_json_error() {
    let server = create_test_app(test_config());

    let response = server.post("/api/orders").text("{\"items\": [").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "INVALID_BODY");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_tampered_price_uses_catalog_price() {
    let server = create_test_app(test_config());

    let response = server
        .post("/api/orders")
        .json(&json!({ "items": [{ "id": 1, "name": "FREE FOOD", "price": 1, "quantity": 2 }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let order: OrderResult = response.json();
    assert_eq!(order.total, dec!(400));
    assert_eq!(order.items[0].name, "CHORIZO JALAPENO");
}

#[tokio::test]
async fn test_tampered_price_rejected_under_strict_policy() {
    let server = create_test_app(AppConfig {
        price_policy: PricePolicy::RejectMismatch,
        ..test_config()
    });

    let response = server
        .post("/api/orders")
        .json(&json!({ "items": [{ "id": 1, "price": 1, "quantity": 2 }] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "PRICE_MISMATCH");
}

// ============================================================================
// Order history (GET /api/orders, GET /api/orders/:order_number)
// ============================================================================

#[tokio::test]
async fn test_seeded_history_is_served() {
    let server = create_test_app(AppConfig::default());

    let history: Vec<HistoricalOrder> = server.get("/api/orders").await.json();
    let numbers: Vec<&str> = history.iter().map(|row| row.order_number.as_str()).collect();
    assert_eq!(numbers, vec!["ORD125", "ORD124", "ORD123"]);
    assert_eq!(history[2].total, dec!(420));
    assert_eq!(history[2].status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_created_order_tops_history() {
    let server = create_test_app(AppConfig::default());

    let created: OrderResult = server.post("/api/orders").json(&sample_order_payload()).await.json();

    let history: Vec<HistoricalOrder> = server.get("/api/orders").await.json();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].order_number, created.order_number);
    assert_eq!(history[0].total, dec!(520));
    assert_eq!(history[0].status, OrderStatus::Pending);
    assert_eq!(history[0].id, 4);
}

#[tokio::test]
async fn test_get_order_by_number() {
    let server = create_test_app(test_config());

    let created: OrderResult = server.post("/api/orders").json(&sample_order_payload()).await.json();

    let response = server.get(&format!("/api/orders/{}", created.order_number)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: OrderResult = response.json();
    assert_eq!(fetched.order_number, created.order_number);
    assert_eq!(fetched.total, created.total);

    let missing = server.get("/api/orders/ORD000001").await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Forecast, status, fallback
// ============================================================================

#[tokio::test]
async fn test_forecast_is_ranked() {
    let server = create_test_app(test_config());

    let response = server.get("/api/forecast").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let forecast: ForecastSnapshot = response.json();
    assert_eq!(forecast.predicted_sales_tomorrow, Decimal::from(12540));
    assert!(forecast
        .top_items
        .windows(2)
        .all(|pair| pair[0].predicted_qty >= pair[1].predicted_qty));
}

#[tokio::test]
async fn test_status_reports_currency() {
    let server = create_test_app(AppConfig {
        currency: "USD".to_string(),
        ..test_config()
    });

    let status: ServiceStatus = server.get("/api/test").await.json();
    assert_eq!(status.status, "API is fully operational");
    assert_eq!(status.currency, "USD");
}

#[tokio::test]
async fn test_history_times_use_configured_offset() {
    let offset = FixedOffset::east_opt(8 * 3600).unwrap();
    let server = create_test_app(AppConfig {
        display_offset: offset,
        ..test_config()
    });

    let created: OrderResult = server.post("/api/orders").json(&sample_order_payload()).await.json();
    let history: Vec<HistoricalOrder> = server.get("/api/orders").await.json();

    let expected = created.timestamp.with_timezone(&offset).format("%-I:%M %p").to_string();
    assert_eq!(history[0].order_number, created.order_number);
    assert_eq!(history[0].time, expected);
}

#[tokio::test]
async fn test_status_and_openapi_share_one_version() {
    let server = create_test_app(test_config());

    let status: ServiceStatus = server.get("/api/test").await.json();
    let doc: serde_json::Value = server.get("/api-docs/openapi.json").await.json();

    assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = create_test_app(test_config());

    let response = server.get("/api/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error_code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = create_test_app(test_config());

    let response = server.get("/api-docs/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let doc: serde_json::Value = response.json();
    assert!(doc["paths"]["/api/orders"].is_object());
}
