use orderbook::Order;
use serde::{Deserialize, Serialize};
use types::ids::OrderId;
use types::order::{OrderStatus, PriceMode, Side};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub side: Side,
    pub price_mode: PriceMode,
    /// Required for limit orders, ignored for market orders
    pub price: Option<i64>,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderReply {
    pub id: OrderId,
    pub side: Side,
    pub price: i64,
    pub price_mode: PriceMode,
    pub status: OrderStatus,
    pub quantity: i64,
    /// Creation time, unix seconds
    pub timestamp: i64,
}

impl OrderReply {
    /// Build a reply from a looked-up order copy
    pub fn from_order(order: &Order, status: OrderStatus) -> Self {
        Self {
            id: order.id,
            side: order.side,
            price: order.price.as_i64(),
            price_mode: order.price_mode,
            status,
            quantity: order.qty.as_i64(),
            timestamp: order.created_at / 1_000_000_000,
        }
    }
}
