use axum::{extract::State, response::IntoResponse, Json};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ApiJson, AppError};
use crate::types::*;
use crate::AppState;

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "limitx-exchange",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
    }))
}

pub async fn init(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<InitRequest>,
) -> Result<Json<InitResponse>, AppError> {
    state.exchange.init(request.mid_price)?;
    Ok(Json(InitResponse {
        status: "initialized".to_string(),
        mid_price: request.mid_price,
    }))
}

pub async fn limit_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LimitOrderRequest>,
) -> Result<Json<LimitOrderResponse>, AppError> {
    let order_id = state
        .exchange
        .place_limit(request.is_buy, request.price, request.qty)?;
    Ok(Json(LimitOrderResponse { order_id }))
}

pub async fn cancel_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CancelOrderRequest>,
) -> Result<Json<CancelOrderResponse>, AppError> {
    state.exchange.cancel(request.id, request.price)?;
    Ok(Json(CancelOrderResponse {
        status: "cancelled".to_string(),
        order_id: request.id,
    }))
}

pub async fn market_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MarketOrderRequest>,
) -> Result<Json<MarketOrderResponse>, AppError> {
    let fill = state.exchange.place_market(request.is_buy, request.qty)?;
    Ok(Json(MarketOrderResponse {
        status: "filled".to_string(),
        qty: fill.quantity,
        price: fill.last_price,
    }))
}

pub async fn get_data(State(state): State<AppState>) -> Json<BookData> {
    Json(state.exchange.book_data())
}
