//! Order entity
//!
//! One trade intent: immutable identity plus the remaining quantity and the
//! price, both of which are mutated while the order is being matched.

use serde::Serialize;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use types::errors::OrderError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{PriceMode, Side};

/// A single order
///
/// `qty` is the remaining quantity and shrinks as the order is consumed.
/// For market orders `price` starts at the placeholder 1 and is overwritten
/// at match time from the counterparty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub side: Side,
    pub price_mode: PriceMode,
    pub price: Price,
    #[serde(rename = "quantity")]
    pub qty: Quantity,
    /// Wall-clock creation time, unix nanoseconds
    pub created_at: i64,
    /// Monotonic creation instant, used for tie-break and expiration
    #[serde(skip)]
    pub(crate) time: Instant,
    /// Position in the containing queue; None once popped
    #[serde(skip)]
    pub(crate) heap_idx: Option<usize>,
}

impl Order {
    /// Create a new unclassified order
    ///
    /// Fails with `BadOrderQty` / `BadOrderPrice` for values below 1; the
    /// quantity check takes precedence when both are invalid.
    pub fn new(side: Side, price: i64, qty: i64) -> Result<Self, OrderError> {
        let qty = Quantity::try_new(qty).ok_or(OrderError::BadOrderQty)?;
        let price = Price::try_new(price).ok_or(OrderError::BadOrderPrice)?;
        Ok(Self {
            id: OrderId::new(),
            side,
            price_mode: PriceMode::Unknown,
            price,
            qty,
            created_at: unix_nanos(),
            time: Instant::now(),
            heap_idx: None,
        })
    }

    /// Monotonic creation instant
    pub fn time(&self) -> Instant {
        self.time
    }
}

fn unix_nanos() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}
