use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A purchasable item on the restaurant menu
///
/// Prices are amounts in the configured currency, serialized as plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    #[schema(example = 6)]
    pub id: i32,
    #[schema(example = "NACHORIZO")]
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 190)]
    pub price: Decimal,
    #[schema(example = "Side")]
    pub category: String,
    #[schema(example = true)]
    pub available: bool,
}

impl MenuItem {
    pub fn new(id: i32, name: &str, price: Decimal, category: &str, available: bool) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            available,
        }
    }
}
