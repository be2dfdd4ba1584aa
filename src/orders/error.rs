use rust_decimal::Decimal;
use std::time::Duration;

/// Reasons an order request is refused before anything is recorded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No items in order")]
    EmptyItems,

    #[error("Quantity for item {item_id} must be at least 1, got {quantity}")]
    InvalidQuantity { item_id: i32, quantity: i32 },

    #[error("Menu item {0} does not exist")]
    UnknownItem(i32),

    #[error("Menu item {0} is currently unavailable")]
    ItemUnavailable(i32),

    #[error("Price for item {item_id} is {expected}, got {supplied}")]
    PriceMismatch {
        item_id: i32,
        expected: Decimal,
        supplied: Decimal,
    },

    #[error("Order total exceeds the supported amount range")]
    AmountOverflow,
}

impl ValidationError {
    /// Machine-readable code for error responses
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyItems => "EMPTY_ITEMS",
            ValidationError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            ValidationError::UnknownItem(_) => "UNKNOWN_ITEM",
            ValidationError::ItemUnavailable(_) => "ITEM_UNAVAILABLE",
            ValidationError::PriceMismatch { .. } => "PRICE_MISMATCH",
            ValidationError::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }
}

/// Error types for order operations
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order number already recorded: {0}")]
    DuplicateOrderNumber(String),

    #[error("Timed out after {0:?} waiting for the order ledger")]
    LedgerTimeout(Duration),
}
