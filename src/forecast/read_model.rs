use rust_decimal::Decimal;
use std::sync::Arc;

use crate::forecast::{ForecastItem, ForecastSnapshot};

/// Read model serving a precomputed demand forecast
#[derive(Debug, Clone)]
pub struct ForecastReadModel {
    snapshot: Arc<ForecastSnapshot>,
}

impl ForecastReadModel {
    /// Wrap a snapshot, ranking its top items by predicted quantity
    ///
    /// The sort is stable, so items with equal quantities keep their authored order.
    pub fn new(mut snapshot: ForecastSnapshot) -> Self {
        snapshot
            .top_items
            .sort_by(|a, b| b.predicted_qty.cmp(&a.predicted_qty));
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// The dashboard preview forecast
    pub fn alimento_preview() -> Self {
        Self::new(ForecastSnapshot {
            message: "Machine Learning Demand Forecasting Preview".to_string(),
            predicted_sales_tomorrow: Decimal::from(12540),
            top_items: vec![
                ForecastItem {
                    name: "CHORIZO JALAPENO".to_string(),
                    predicted_qty: 42,
                },
                ForecastItem {
                    name: "TEQUILA SUNRISE".to_string(),
                    predicted_qty: 38,
                },
                ForecastItem {
                    name: "CLASSIC CARBONARA".to_string(),
                    predicted_qty: 31,
                },
            ],
            note: "Based on historical sales data using Linear Regression model".to_string(),
        })
    }

    pub fn get_forecast(&self) -> &ForecastSnapshot {
        &self.snapshot
    }
}
