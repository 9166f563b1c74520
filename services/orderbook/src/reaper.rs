//! Expiration reaper
//!
//! A periodic task that sweeps expired orders out of both queues and the
//! completion map. Cooperatively cancellable through a watch channel; the
//! current sweep always finishes before the task exits.

use crate::book::OrderBook;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Run the expiration sweep every `clean_frequency` until cancelled
///
/// Cancellation is signalled by a value change on `shutdown`, or by the
/// sender being dropped.
pub async fn auto_clean(book: Arc<OrderBook>, mut shutdown: watch::Receiver<bool>) {
    let period = book.config().clean_frequency;
    info!(period_ms = period.as_millis() as u64, "expiration reaper started");

    let start = tokio::time::Instant::now() + period;
    let mut ticker = tokio::time::interval_at(start, period);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = book.sweep_expired();
                if removed > 0 {
                    debug!(removed, "expired entries removed");
                }
            }
            _ = shutdown.changed() => {
                info!("expiration reaper stopped");
                return;
            }
        }
    }
}
