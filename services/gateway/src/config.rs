use clap::Parser;
use std::net::SocketAddr;

/// Gateway process arguments
#[derive(Parser, Debug)]
#[command(name = "gateway", version, about = "Order matching gateway")]
pub struct Args {
    /// Address the server listens on
    #[arg(long, default_value = "127.0.0.1:9999")]
    pub listen_addr: SocketAddr,

    /// Frequency of the expiration reaper, in seconds
    #[arg(long, default_value_t = 10)]
    pub clean_order_freq: u64,

    /// Maximum number of resting orders per side
    #[arg(long, default_value_t = 100)]
    pub max_queue_size: usize,

    /// Lifetime of an order before the reaper removes it, in seconds
    #[arg(long, default_value_t = 86_400)]
    pub order_expired: u64,
}
