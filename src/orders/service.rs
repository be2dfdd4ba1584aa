use chrono::{FixedOffset, Utc};
use std::sync::Arc;

use crate::catalog::CatalogProvider;
use crate::orders::{
    CreateOrderRequest, HistoricalOrder, OrderError, OrderLedger, OrderNumberGenerator, OrderResult,
    OrderStatus, PricePolicy, PriceCalculator, ValidationError, WALK_IN_CUSTOMER,
};

/// Service for order business logic
///
/// Owns its collaborators explicitly; clones share the same ledger and
/// order number sequence.
#[derive(Clone)]
pub struct OrderService {
    catalog: CatalogProvider,
    ledger: Arc<OrderLedger>,
    order_numbers: Arc<OrderNumberGenerator>,
    price_policy: PricePolicy,
    display_offset: FixedOffset,
}

impl OrderService {
    /// Create a new OrderService
    pub fn new(
        catalog: CatalogProvider,
        ledger: Arc<OrderLedger>,
        order_numbers: Arc<OrderNumberGenerator>,
        price_policy: PricePolicy,
        display_offset: FixedOffset,
    ) -> Self {
        Self {
            catalog,
            ledger,
            order_numbers,
            price_policy,
            display_offset,
        }
    }

    /// Create a new order
    ///
    /// # Validation
    /// - The order must contain at least one item
    /// - Every item must exist in the catalog, be available and have quantity >= 1
    /// - Prices are taken from the catalog, never from the request
    ///
    /// The accepted order starts in "pending" status and is appended to the
    /// ledger before it is returned. If the append fails no order is returned.
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<OrderResult, OrderError> {
        if request.items.is_empty() {
            return Err(ValidationError::EmptyItems.into());
        }

        let items = PriceCalculator::price_line_items(&self.catalog, &request.items, self.price_policy)?;
        let subtotals: Vec<_> = items.iter().map(|item| item.subtotal).collect();
        let total = PriceCalculator::calculate_total(&subtotals)?;

        let order = OrderResult {
            order_number: self.order_numbers.next_order_number(),
            customer_name: resolve_customer_name(request.customer_name),
            total,
            items,
            status: OrderStatus::Pending,
            timestamp: Utc::now(),
        };

        self.ledger.append(order.clone()).await?;

        tracing::info!(
            "Recorded order {} for {} totalling {}",
            order.order_number,
            order.customer_name,
            order.total
        );
        Ok(order)
    }

    /// Order history for the dashboard, newest first
    pub async fn list_orders(&self) -> Vec<HistoricalOrder> {
        self.ledger.history(self.display_offset).await
    }

    /// Get a recorded order by its order number
    pub async fn get_order(&self, order_number: &str) -> Result<OrderResult, OrderError> {
        self.ledger
            .find(order_number)
            .await
            .ok_or_else(|| OrderError::NotFound(order_number.to_string()))
    }
}

fn resolve_customer_name(name: Option<String>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => WALK_IN_CUSTOMER.to_string(),
    }
}
