//! Command-line client for the trader gateway
//!
//! Creates and queries orders over the gateway's HTTP interface and prints
//! the reply as JSON.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use types::order::{PriceMode, Side};

#[derive(Parser, Debug)]
#[command(name = "trader-client", version, about = "Client for the trader gateway")]
struct Cli {
    /// Base URL of the gateway
    #[arg(long, default_value = "http://127.0.0.1:9999")]
    server_addr: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new order
    Create {
        /// Order side [buy|sell]
        #[arg(long)]
        side: Side,

        /// Price mode [limit|market]
        #[arg(long)]
        price_mode: PriceMode,

        /// Limit price; required for limit orders
        #[arg(long)]
        price: Option<i64>,

        /// Order quantity
        #[arg(long)]
        quantity: i64,
    },
    /// Look up an order by id
    Get {
        /// Order id
        order_id: String,
    },
    /// List all completed orders
    Completed,
    /// Show the current book summary
    Book,
}

#[derive(Serialize)]
struct CreateOrderRequest {
    side: Side,
    price_mode: PriceMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<i64>,
    quantity: i64,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.server_addr.trim_end_matches('/');

    let response = match cli.command {
        Command::Create {
            side,
            price_mode,
            price,
            quantity,
        } => {
            if price_mode == PriceMode::Limit && price.is_none() {
                bail!("--price is required for limit orders");
            }
            client
                .post(format!("{base}/v1/orders"))
                .json(&CreateOrderRequest {
                    side,
                    price_mode,
                    price,
                    quantity,
                })
                .send()
                .await
        }
        Command::Get { order_id } => client.get(format!("{base}/v1/orders/{order_id}")).send().await,
        Command::Completed => client.get(format!("{base}/v1/orders/completed")).send().await,
        Command::Book => client.get(format!("{base}/v1/book")).send().await,
    }
    .context("request failed")?;

    let status = response.status();
    let body: serde_json::Value = response.json().await.context("malformed reply")?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        bail!("gateway replied with status {status}");
    }
    Ok(())
}
