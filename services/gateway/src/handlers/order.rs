use crate::error::AppError;
use crate::models::{CreateOrderRequest, OrderReply};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::collections::HashMap;
use types::ids::OrderId;
use types::order::PriceMode;

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<Json<OrderReply>, AppError> {
    let id = match payload.price_mode {
        PriceMode::Limit => {
            let price = payload
                .price
                .ok_or_else(|| AppError::BadRequest("price is required for limit orders".into()))?;
            state
                .book
                .process_limit_order(payload.side, price, payload.quantity)?
        }
        PriceMode::Market => state
            .book
            .process_market_order(payload.side, payload.quantity)?,
        PriceMode::Unknown => {
            return Err(AppError::BadRequest("unknown price mode".into()));
        }
    };

    state.book.log_summary();

    // echo the order back the way a lookup would see it
    let (status, order) = state.book.get_order(&id);
    let order = order
        .ok_or_else(|| AppError::InternalError(anyhow::anyhow!("created order {id} not found")))?;
    Ok(Json(OrderReply::from_order(&order, status)))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderReply>, AppError> {
    let id: OrderId = id
        .parse()
        .map_err(|_| AppError::BadRequest("malformed order id".into()))?;

    let (status, order) = state.book.get_order(&id);
    match order {
        Some(order) => Ok(Json(OrderReply::from_order(&order, status))),
        None => Err(AppError::NotFound(format!("order {id} not found"))),
    }
}

pub async fn list_completed(
    State(state): State<AppState>,
) -> Json<HashMap<OrderId, orderbook::Order>> {
    Json(state.book.get_completed_orders())
}
