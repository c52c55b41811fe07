//! Request and response bodies for the REST interface.
//!
//! `type: true` means buy everywhere it appears.

use orderbook::{BookSnapshot, Decimal, LevelView, OrderId};
use serde::{Deserialize, Serialize};

/// Body of `POST /init`.
#[derive(Debug, Serialize, Deserialize)]
pub struct InitRequest {
    pub mid_price: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InitResponse {
    pub status: String,
    pub mid_price: Decimal,
}

/// Body of `POST /limit_order`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LimitOrderRequest {
    #[serde(rename = "type")]
    pub is_buy: bool,
    pub price: Decimal,
    pub qty: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LimitOrderResponse {
    pub order_id: OrderId,
}

/// Body of `POST /cancel_order`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub id: OrderId,
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub status: String,
    pub order_id: OrderId,
}

/// Body of `POST /market_order`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MarketOrderRequest {
    #[serde(rename = "type")]
    pub is_buy: bool,
    pub qty: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarketOrderResponse {
    pub status: String,
    pub qty: Decimal,
    pub price: Decimal, // last traded price after the sweep
}

/// Aggregated volume at one price.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LimitData {
    pub price: Decimal,
    pub volume: Decimal,
}

impl From<LevelView> for LimitData {
    fn from(level: LevelView) -> Self {
        Self {
            price: level.price,
            volume: level.volume,
        }
    }
}

/// Response of `GET /get_data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BookData {
    pub buy_limits: Vec<LimitData>,  // Highest to lowest price
    pub sell_limits: Vec<LimitData>, // Lowest to highest price
    pub price: Decimal,
    pub spread: Decimal,
    pub midprice: Decimal,
}

impl From<BookSnapshot> for BookData {
    fn from(snapshot: BookSnapshot) -> Self {
        Self {
            buy_limits: snapshot.bids.into_iter().map(LimitData::from).collect(),
            sell_limits: snapshot.asks.into_iter().map(LimitData::from).collect(),
            price: snapshot.last_price,
            spread: snapshot.spread,
            // Undefined mid-price goes out as 0, as clients expect a number.
            midprice: snapshot.mid_price.unwrap_or_default(),
        }
    }
}
