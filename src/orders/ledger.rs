// Order ledger
//
// Append-only, insertion-ordered record of accepted orders, indexed by order
// number. Readers share the lock; appends take it exclusively and either land
// completely or not at all.

use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::orders::{HistoricalOrder, OrderError, OrderResult, OrderStatus, PricedLineItem};

#[derive(Debug, Default)]
struct LedgerInner {
    entries: Vec<OrderResult>,
    index: HashMap<String, usize>,
}

impl LedgerInner {
    fn push(&mut self, order: OrderResult) -> Result<(), OrderError> {
        if self.index.contains_key(&order.order_number) {
            return Err(OrderError::DuplicateOrderNumber(order.order_number));
        }
        self.index.insert(order.order_number.clone(), self.entries.len());
        self.entries.push(order);
        Ok(())
    }
}

/// Shared ledger of accepted orders
#[derive(Debug)]
pub struct OrderLedger {
    inner: RwLock<LedgerInner>,
    write_timeout: Duration,
}

impl OrderLedger {
    /// Create an empty ledger
    ///
    /// `write_timeout` bounds how long an append waits for exclusive access.
    pub fn new(write_timeout: Duration) -> Self {
        Self {
            inner: RwLock::new(LedgerInner::default()),
            write_timeout,
        }
    }

    /// Create a ledger pre-populated with existing orders
    pub fn with_entries(write_timeout: Duration, entries: Vec<OrderResult>) -> Result<Self, OrderError> {
        let mut inner = LedgerInner::default();
        for order in entries {
            inner.push(order)?;
        }
        Ok(Self {
            inner: RwLock::new(inner),
            write_timeout,
        })
    }

    /// Append an accepted order
    ///
    /// # Errors
    /// - `LedgerTimeout` when the write lock is not acquired within the timeout;
    ///   nothing is written in that case
    /// - `DuplicateOrderNumber` when the order number is already recorded
    pub async fn append(&self, order: OrderResult) -> Result<(), OrderError> {
        let mut guard = tokio::time::timeout(self.write_timeout, self.inner.write())
            .await
            .map_err(|_| OrderError::LedgerTimeout(self.write_timeout))?;

        guard.push(order)
    }

    /// Find a recorded order by its order number
    pub async fn find(&self, order_number: &str) -> Option<OrderResult> {
        let guard = self.inner.read().await;
        guard
            .index
            .get(order_number)
            .and_then(|&position| guard.entries.get(position))
            .cloned()
    }

    /// History rows, newest first
    ///
    /// Orders with equal timestamps keep reverse insertion order.
    pub async fn history(&self, display_offset: FixedOffset) -> Vec<HistoricalOrder> {
        let guard = self.inner.read().await;

        let mut rows: Vec<HistoricalOrder> = guard
            .entries
            .iter()
            .enumerate()
            .rev()
            .map(|(position, order)| HistoricalOrder::from_ledger_entry(position + 1, order, display_offset))
            .collect();

        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    /// Number of recorded orders
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// The sample history shown on a fresh dashboard
///
/// Timestamps are placed shortly before `now` so live orders sort above them.
pub fn sample_history(now: DateTime<Utc>) -> Vec<OrderResult> {
    fn line(id: i32, name: &str, price: i64, quantity: u32) -> PricedLineItem {
        let price = Decimal::from(price);
        PricedLineItem {
            id,
            name: name.to_string(),
            price,
            quantity,
            subtotal: price * Decimal::from(quantity),
        }
    }

    fn order(
        order_number: &str,
        customer_name: &str,
        status: OrderStatus,
        timestamp: DateTime<Utc>,
        items: Vec<PricedLineItem>,
    ) -> OrderResult {
        OrderResult {
            order_number: order_number.to_string(),
            customer_name: customer_name.to_string(),
            total: items.iter().map(|item| item.subtotal).sum(),
            items,
            status,
            timestamp,
        }
    }

    vec![
        order(
            "ORD123",
            "Juan Dela Cruz",
            OrderStatus::Completed,
            now - ChronoDuration::minutes(75),
            vec![
                line(1, "CHORIZO JALAPENO", 200, 1),
                line(2, "CLASSIC CARBONARA", 220, 1),
            ],
        ),
        order(
            "ORD124",
            "Maria Santos",
            OrderStatus::Preparing,
            now - ChronoDuration::minutes(30),
            vec![
                line(2, "CLASSIC CARBONARA", 220, 1),
                line(5, "MOJITO", 120, 1),
            ],
        ),
        order(
            "ORD125",
            "Online Order",
            OrderStatus::Pending,
            now - ChronoDuration::minutes(1),
            vec![
                line(1, "CHORIZO JALAPENO", 200, 1),
                line(3, "THICK CUT BACON", 180, 2),
            ],
        ),
    ]
}
