use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out order numbers that are unique for the lifetime of the generator
///
/// Each call takes the next value of an atomic counter, so two callers can
/// never observe the same sequence number.
#[derive(Debug)]
pub struct OrderNumberGenerator {
    next: AtomicU64,
}

impl OrderNumberGenerator {
    pub fn new(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    /// Next order number, formatted as `ORD` followed by a zero-padded sequence
    pub fn next_order_number(&self) -> String {
        let seq = self.next.fetch_add(1, Ordering::Relaxed);
        format!("ORD{:06}", seq)
    }
}
