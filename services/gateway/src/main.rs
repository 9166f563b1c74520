mod config;
mod error;
mod handlers;
mod models;
mod router;
mod state;

use clap::Parser;
use config::Args;
use orderbook::{OrderBook, OrderBookConfig};
use router::create_router;
use state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let book_config = OrderBookConfig::default()
        .with_max_queue_size(args.max_queue_size)
        .with_order_expiration(Duration::from_secs(args.order_expired))
        .with_clean_frequency(Duration::from_secs(args.clean_order_freq));

    tracing::info!(
        addr = %args.listen_addr,
        max_queue_size = args.max_queue_size,
        order_expired_secs = args.order_expired,
        clean_order_freq_secs = args.clean_order_freq,
        "starting trader gateway"
    );

    let book = Arc::new(OrderBook::new(book_config));
    book.log_summary();

    // the reaper runs until the shutdown signal flips
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper = tokio::spawn(orderbook::auto_clean(book.clone(), shutdown_rx));

    let app = create_router(AppState::new(book));

    let listener = TcpListener::bind(args.listen_addr).await?;
    tracing::info!("listening on {}", args.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    reaper.await?;

    tracing::info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to install shutdown handler");
    }
}
