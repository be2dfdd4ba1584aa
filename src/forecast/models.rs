use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Predicted demand for a single menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ForecastItem {
    #[schema(example = "CHORIZO JALAPENO")]
    pub name: String,
    #[schema(example = 42)]
    pub predicted_qty: u32,
}

/// Demand forecast for the next trading day
///
/// `top_items` is ranked by `predicted_qty`, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ForecastSnapshot {
    #[schema(example = "Machine Learning Demand Forecasting Preview")]
    pub message: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 12540)]
    pub predicted_sales_tomorrow: Decimal,
    pub top_items: Vec<ForecastItem>,
    pub note: String,
}
