// Service status endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// Liveness summary for dashboards and smoke checks
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceStatus {
    #[schema(example = "Alimento Restaurant Management System")]
    pub message: String,
    #[schema(example = "API is fully operational")]
    pub status: String,
    pub version: String,
    /// Currency of every monetary amount served by this API
    #[schema(example = "PHP")]
    pub currency: String,
    #[schema(example = "3:45:12 PM")]
    pub time: String,
}

/// Handler for GET /api/test
#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "Service is up", body = ServiceStatus)
    ),
    tag = "system"
)]
pub async fn status_handler(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        message: "Alimento Restaurant Management System".to_string(),
        status: "API is fully operational".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        currency: state.config.currency.clone(),
        time: Utc::now()
            .with_timezone(&state.config.display_offset)
            .format("%-I:%M:%S %p")
            .to_string(),
    })
}
