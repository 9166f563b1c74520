use orderbook::OrderBook;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub book: Arc<OrderBook>,
}

impl AppState {
    pub fn new(book: Arc<OrderBook>) -> Self {
        Self { book }
    }
}
