//! Price-time priority order matching core
//!
//! An in-memory orderbook for a single instrument. Incoming limit and market
//! orders are crossed against the opposite side's queue; residual quantity
//! rests in a per-side binary heap ordered by price then arrival time, and
//! completed fills accumulate in a map of completion records. A background
//! reaper evicts entries older than the configured lifetime.
//!
//! **Key invariants:**
//! - The top of the bid queue has the maximum price, the top of the ask queue
//!   the minimum, ties broken by earliest arrival
//! - Every resting order's heap back-pointer equals its array position
//! - An order lives in at most one collection: bids, asks, or the completion
//!   map

pub mod book;
pub mod matching;
pub mod order;
pub mod queue;
pub mod reaper;

pub use book::{BookSummary, OrderBook, OrderBookConfig};
pub use order::Order;
pub use queue::OrderQueue;
pub use reaper::auto_clean;
