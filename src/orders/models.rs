use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

/// Customer label used when an order arrives without a name
pub const WALK_IN_CUSTOMER: &str = "Walk-in Customer";

/// Confirmation message returned alongside a freshly created order
pub const ORDER_PLACED_MESSAGE: &str = "Order successfully placed!";

/// Order status enum representing the kitchen lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Completed,
}

impl OrderStatus {
    /// Convert status to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How client-supplied prices are treated when pricing an order
///
/// The catalog is always the source of the charged price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PricePolicy {
    /// Ignore client prices, log when they disagree with the catalog
    #[default]
    Catalog,
    /// Refuse the order when a client price disagrees with the catalog
    RejectMismatch,
}

impl FromStr for PricePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "catalog" => Ok(PricePolicy::Catalog),
            "reject_mismatch" => Ok(PricePolicy::RejectMismatch),
            _ => Err(format!("Invalid price policy: {}", s)),
        }
    }
}

/// One line of an incoming order as sent by the client
///
/// `name` and `price` are advisory; the catalog entry for `id` is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderLineItem {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "CHORIZO JALAPENO")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<f64>, example = 200)]
    pub price: Option<Decimal>,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2, minimum = 1)]
    pub quantity: i32,
}

/// Request DTO for creating a new order
///
/// A missing or null `items` key deserializes to an empty list and is rejected by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[serde(default)]
    #[schema(example = "Juan Dela Cruz")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<OrderLineItem>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<OrderLineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<OrderLineItem>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A line item after catalog resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PricedLineItem {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
}

/// An accepted order as recorded in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderResult {
    #[schema(example = "ORD001000")]
    pub order_number: String,
    pub customer_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 520)]
    pub total: Decimal,
    pub items: Vec<PricedLineItem>,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
}

/// Response DTO for POST /api/orders
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCreatedResponse {
    #[schema(example = "Order successfully placed!")]
    pub message: String,
    #[serde(flatten)]
    pub order: OrderResult,
}

impl From<OrderResult> for OrderCreatedResponse {
    fn from(order: OrderResult) -> Self {
        Self {
            message: ORDER_PLACED_MESSAGE.to_string(),
            order,
        }
    }
}

/// Dashboard row for the order history view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoricalOrder {
    /// 1-based position in the ledger
    pub id: usize,
    pub order_number: String,
    pub customer_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 420)]
    pub total: Decimal,
    pub status: OrderStatus,
    /// Clock time for display, e.g. "3:45 PM"
    #[schema(example = "3:45 PM")]
    pub time: String,
    pub created_at: DateTime<Utc>,
}

impl HistoricalOrder {
    /// Project a ledger entry, rendering `time` in the dashboard's UTC offset
    pub fn from_ledger_entry(position: usize, order: &OrderResult, display_offset: FixedOffset) -> Self {
        Self {
            id: position,
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            total: order.total,
            status: order.status,
            time: order
                .timestamp
                .with_timezone(&display_offset)
                .format("%-I:%M %p")
                .to_string(),
            created_at: order.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(OrderStatus::Pending).unwrap(), "pending");
        assert_eq!(serde_json::to_value(OrderStatus::Preparing).unwrap(), "preparing");
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        assert_eq!(OrderStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_price_policy_parsing() {
        assert_eq!("catalog".parse::<PricePolicy>(), Ok(PricePolicy::Catalog));
        assert_eq!("REJECT_MISMATCH".parse::<PricePolicy>(), Ok(PricePolicy::RejectMismatch));
        assert!("trust_client".parse::<PricePolicy>().is_err());
    }

    #[test]
    fn test_request_without_items_key_has_empty_items() {
        let request: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(request.items.is_empty());
        assert!(request.customer_name.is_none());
    }

    #[test]
    fn test_null_items_deserialize_as_empty() {
        let request: CreateOrderRequest =
            serde_json::from_str(r#"{"customer_name":null,"items":null}"#).unwrap();
        assert!(request.items.is_empty());
    }

    #[test]
    fn test_negative_quantity_deserializes_and_fails_validation() {
        let item: OrderLineItem = serde_json::from_str(r#"{"id":1,"quantity":-1}"#).unwrap();
        assert_eq!(item.quantity, -1);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_line_item_deserialization() {
        let json = r#"{"id":1,"name":"CHORIZO JALAPENO","price":200,"quantity":2}"#;
        let item: OrderLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.price, Some(dec!(200)));
        assert_eq!(item.quantity, 2);

        let bare: OrderLineItem = serde_json::from_str(r#"{"id":4,"quantity":1}"#).unwrap();
        assert!(bare.name.is_none());
        assert!(bare.price.is_none());
    }

    #[test]
    fn test_zero_quantity_fails_validation() {
        let item = OrderLineItem {
            id: 1,
            name: None,
            price: None,
            quantity: 0,
        };
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_historical_order_projection() {
        let order = OrderResult {
            order_number: "ORD125".to_string(),
            customer_name: "Online Order".to_string(),
            total: dec!(560),
            items: vec![],
            status: OrderStatus::Pending,
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 7, 45, 0).unwrap(),
        };

        let manila = FixedOffset::east_opt(8 * 3600).unwrap();
        let row = HistoricalOrder::from_ledger_entry(3, &order, manila);
        assert_eq!(row.id, 3);
        assert_eq!(row.time, "3:45 PM");

        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(HistoricalOrder::from_ledger_entry(3, &order, utc).time, "7:45 AM");
        assert_eq!(row.total, dec!(560));
        assert_eq!(row.status, OrderStatus::Pending);
    }

    #[test]
    fn test_created_response_is_flat() {
        let order = OrderResult {
            order_number: "ORD001000".to_string(),
            customer_name: WALK_IN_CUSTOMER.to_string(),
            total: dec!(520),
            items: vec![],
            status: OrderStatus::Pending,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(OrderCreatedResponse::from(order)).unwrap();
        assert_eq!(json["message"], ORDER_PLACED_MESSAGE);
        assert_eq!(json["order_number"], "ORD001000");
        assert_eq!(json["total"].as_f64(), Some(520.0));
        assert_eq!(json["status"], "pending");
    }
}
