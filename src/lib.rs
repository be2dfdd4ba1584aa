pub mod catalog;
pub mod config;
pub mod error;
pub mod forecast;
pub mod orders;
pub mod system;

use std::sync::Arc;

use axum::{routing::get, Router};
use chrono::Utc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use catalog::{CatalogProvider, MenuItem};
use config::AppConfig;
use error::{ErrorResponse, StartupError};
use forecast::{ForecastItem, ForecastReadModel, ForecastSnapshot};
use orders::{
    CreateOrderRequest, HistoricalOrder, OrderCreatedResponse, OrderLedger,
    OrderLineItem, OrderNumberGenerator, OrderResult, OrderService, OrderStatus, PricedLineItem,
};
use system::ServiceStatus;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::list_menu_items_handler,
        orders::create_order_handler,
        orders::list_orders_handler,
        orders::get_order_handler,
        forecast::get_forecast_handler,
        system::status_handler,
    ),
    components(
        schemas(
            MenuItem,
            OrderLineItem,
            CreateOrderRequest,
            PricedLineItem,
            OrderResult,
            OrderCreatedResponse,
            OrderStatus,
            HistoricalOrder,
            ForecastItem,
            ForecastSnapshot,
            ServiceStatus,
            ErrorResponse
        )
    ),
    tags(
        (name = "catalog", description = "Menu items"),
        (name = "orders", description = "Order intake and history"),
        (name = "forecast", description = "Demand forecast preview"),
        (name = "system", description = "Service status")
    ),
    info(
        title = "Alimento Restaurant API",
        description = "Menu, order intake, order history and demand forecast for the Alimento dashboard. All amounts are in a single configured currency."
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogProvider,
    pub order_service: OrderService,
    pub forecast: ForecastReadModel,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire up the stores described by `config`
    pub fn from_config(config: AppConfig) -> Result<Self, StartupError> {
        let catalog = CatalogProvider::alimento_menu()?;

        let ledger = if config.seed_history {
            OrderLedger::with_entries(config.ledger_write_timeout, orders::sample_history(Utc::now()))?
        } else {
            OrderLedger::new(config.ledger_write_timeout)
        };

        let order_service = OrderService::new(
            catalog.clone(),
            Arc::new(ledger),
            Arc::new(OrderNumberGenerator::new(config.order_number_start)),
            config.price_policy,
            config.display_offset,
        );

        Ok(Self {
            catalog,
            order_service,
            forecast: ForecastReadModel::alimento_preview(),
            config: Arc::new(config),
        })
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/catalog", get(catalog::list_menu_items_handler))
        .route("/menu", get(catalog::list_menu_items_handler))
        .route(
            "/orders",
            get(orders::list_orders_handler).post(orders::create_order_handler),
        )
        .route("/orders/:order_number", get(orders::get_order_handler))
        .route("/forecast", get(forecast::get_forecast_handler))
        .route("/test", get(system::status_handler));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api)
        .fallback(error::route_not_found)
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

#[cfg(test)]
mod tests;
