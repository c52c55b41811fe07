//! Read-only projections of the book.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated resting quantity at one price.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelView {
    pub price: Decimal,
    pub volume: Decimal,
}

/// Both sides best-first, plus last price and derived metrics,
/// all taken at the same instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<LevelView>, // Highest to lowest price
    pub asks: Vec<LevelView>, // Lowest to highest price
    pub last_price: Decimal,
    pub spread: Decimal,
    /// `None` until both sides have a level.
    pub mid_price: Option<Decimal>,
}

/// Summary of a market order sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub quantity: Decimal,
    pub last_price: Decimal,
}
