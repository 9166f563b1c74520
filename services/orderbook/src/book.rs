//! Orderbook aggregate
//!
//! Owns the two side queues and the map of completion records, guarded by a
//! single reader-writer lock. Submissions run the full capacity check,
//! construction, crossing, and recording sequence under one exclusive
//! acquisition, so individual requests are serialized.

use crate::matching;
use crate::order::Order;
use crate::queue::OrderQueue;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};
use types::errors::OrderError;
use types::ids::OrderId;
use types::order::{OrderStatus, PriceMode, Side};

/// Per-instance orderbook configuration
#[derive(Debug, Clone)]
pub struct OrderBookConfig {
    /// Per-side capacity limit for resting orders
    pub max_queue_size: usize,
    /// Lifetime of resting orders and completion records
    pub order_expiration: Duration,
    /// Period of the expiration reaper
    pub clean_frequency: Duration,
}

impl Default for OrderBookConfig {
    fn default() -> Self {
        Self {
            max_queue_size: 100,
            order_expiration: Duration::from_secs(86_400),
            clean_frequency: Duration::from_secs(10),
        }
    }
}

impl OrderBookConfig {
    /// Set the per-side capacity limit
    pub fn with_max_queue_size(mut self, max: usize) -> Self {
        self.max_queue_size = max;
        self
    }

    /// Set the resting lifetime used by the reaper
    pub fn with_order_expiration(mut self, expiration: Duration) -> Self {
        self.order_expiration = expiration;
        self
    }

    /// Set the reaper period
    pub fn with_clean_frequency(mut self, frequency: Duration) -> Self {
        self.clean_frequency = frequency;
        self
    }
}

/// Counts of live and completed orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BookSummary {
    pub bids: usize,
    pub asks: usize,
    pub completed: usize,
}

/// In-memory orderbook for a single instrument
pub struct OrderBook {
    config: OrderBookConfig,
    inner: RwLock<Book>,
}

struct Book {
    bids: OrderQueue,
    asks: OrderQueue,
    /// Completion records keyed by order id
    done: HashMap<OrderId, Order>,
}

impl Book {
    fn queue(&self, side: Side) -> &OrderQueue {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn queue_mut(&mut self, side: Side) -> &mut OrderQueue {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Queue an incoming order of this side crosses against
    fn counterparty_queue_mut(&mut self, side: Side) -> &mut OrderQueue {
        self.queue_mut(side.opposite())
    }

    /// Merge a completion record into the done map
    ///
    /// Repeated records for one order sum their quantities; the price is
    /// overwritten by the latest fill.
    fn record_done(&mut self, order: Order) {
        match self.done.entry(order.id) {
            Entry::Occupied(mut occupied) => {
                let record = occupied.get_mut();
                record.price = order.price;
                record.qty = record.qty + order.qty;
            }
            Entry::Vacant(vacant) => {
                vacant.insert(order);
            }
        }
    }
}

impl OrderBook {
    /// Create an orderbook with empty queues pre-sized to the capacity limit
    pub fn new(config: OrderBookConfig) -> Self {
        let max = config.max_queue_size;
        Self {
            inner: RwLock::new(Book {
                bids: OrderQueue::new(Side::Buy, max),
                asks: OrderQueue::new(Side::Sell, max),
                done: HashMap::new(),
            }),
            config,
        }
    }

    /// Configuration this book was constructed with
    pub fn config(&self) -> &OrderBookConfig {
        &self.config
    }

    /// Submit a limit order and return its id
    pub fn process_limit_order(
        &self,
        side: Side,
        price: i64,
        qty: i64,
    ) -> Result<OrderId, OrderError> {
        self.submit(side, PriceMode::Limit, price, qty)
    }

    /// Submit a market order and return its id
    ///
    /// The price starts at the placeholder 1 and is rewritten during
    /// matching from the counterparty.
    pub fn process_market_order(&self, side: Side, qty: i64) -> Result<OrderId, OrderError> {
        self.submit(side, PriceMode::Market, 1, qty)
    }

    fn submit(
        &self,
        side: Side,
        mode: PriceMode,
        price: i64,
        qty: i64,
    ) -> Result<OrderId, OrderError> {
        let mut book = self.inner.write();

        // capacity is checked on the side the order would rest on
        if book.queue(side).len() >= self.config.max_queue_size {
            return Err(OrderError::TooLargeSizeOfQueue);
        }

        let mut order = Order::new(side, price, qty)?;
        order.price_mode = mode;
        let id = order.id;
        let submitted_qty = order.qty;

        let fills = matching::cross(book.counterparty_queue_mut(side), &mut order);
        let fill_count = fills.len();
        for fill in fills {
            book.record_done(fill);
        }

        if order.qty.is_zero() {
            // fully matched: record the original submitted quantity
            order.qty = submitted_qty;
            book.record_done(order);
        } else {
            book.queue_mut(side).push(order);
        }

        debug!(%id, %side, %mode, fills = fill_count, "order processed");
        Ok(id)
    }

    /// Look up an order anywhere in the book
    ///
    /// Returns `Pending` with a copy for a resting order, `Completed` with
    /// the completion record for a fully matched one, and `Canceled` with no
    /// payload for an unknown id.
    pub fn get_order(&self, id: &OrderId) -> (OrderStatus, Option<Order>) {
        let book = self.inner.read();

        if let Some(order) = book.bids.iter().find(|o| o.id == *id) {
            return (OrderStatus::Pending, Some(order.clone()));
        }
        if let Some(order) = book.asks.iter().find(|o| o.id == *id) {
            return (OrderStatus::Pending, Some(order.clone()));
        }
        if let Some(order) = book.done.get(id) {
            return (OrderStatus::Completed, Some(order.clone()));
        }

        (OrderStatus::Canceled, None)
    }

    /// Look up a completion record
    pub fn get_completed_order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.inner
            .read()
            .done
            .get(id)
            .cloned()
            .ok_or(OrderError::DataNotFound)
    }

    /// Snapshot of all completion records
    pub fn get_completed_orders(&self) -> HashMap<OrderId, Order> {
        self.inner.read().done.clone()
    }

    /// Snapshot of resting bids in heap order
    pub fn bids(&self) -> Vec<Order> {
        self.inner.read().bids.iter().cloned().collect()
    }

    /// Snapshot of resting asks in heap order
    pub fn asks(&self) -> Vec<Order> {
        self.inner.read().asks.iter().cloned().collect()
    }

    /// Number of orders resting on one side
    pub fn side_queue_len(&self, side: Side) -> usize {
        self.inner.read().queue(side).len()
    }

    /// Current counts of live and completed orders
    pub fn summary(&self) -> BookSummary {
        let book = self.inner.read();
        BookSummary {
            bids: book.bids.len(),
            asks: book.asks.len(),
            completed: book.done.len(),
        }
    }

    /// Log the current book counts
    pub fn log_summary(&self) {
        let summary = self.summary();
        info!(
            bids = summary.bids,
            asks = summary.asks,
            completed = summary.completed,
            "orderbook summary"
        );
    }

    /// Remove every entry older than the configured lifetime
    ///
    /// Sweeps both queues and the completion map under the exclusive lock.
    /// Returns the number of removed entries.
    pub fn sweep_expired(&self) -> usize {
        let max_age = self.config.order_expiration;
        let mut book = self.inner.write();

        let mut removed = book.bids.remove_older_than(max_age);
        removed += book.asks.remove_older_than(max_age);

        let done_before = book.done.len();
        book.done.retain(|_, order| order.time().elapsed() <= max_age);
        removed + done_before - book.done.len()
    }
}
