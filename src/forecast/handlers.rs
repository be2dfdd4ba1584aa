// HTTP handlers for forecast endpoints

use axum::{extract::State, Json};

use crate::forecast::ForecastSnapshot;
use crate::AppState;

/// Handler for GET /api/forecast
#[utoipa::path(
    get,
    path = "/api/forecast",
    responses(
        (status = 200, description = "Demand forecast snapshot", body = ForecastSnapshot)
    ),
    tag = "forecast"
)]
pub async fn get_forecast_handler(State(state): State<AppState>) -> Json<ForecastSnapshot> {
    Json(state.forecast.get_forecast().clone())
}
