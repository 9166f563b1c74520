use crate::state::AppState;
use axum::{extract::State, Json};
use orderbook::BookSummary;

pub async fn summary(State(state): State<AppState>) -> Json<BookSummary> {
    Json(state.book.summary())
}
