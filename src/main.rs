use alimento_api::{config::AppConfig, create_router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Alimento API - Starting...");

    let config = AppConfig::from_env().expect("Invalid configuration");
    tracing::info!(
        "Currency {}, price policy {:?}, seed history {}",
        config.currency,
        config.price_policy,
        config.seed_history
    );

    let addr = config.bind_addr();
    let state = AppState::from_config(config).expect("Failed to initialise application state");
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Alimento API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
