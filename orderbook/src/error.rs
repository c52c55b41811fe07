//! Rejections returned by order book operations.
//!
//! Every variant carries the values that caused it. A failed call never
//! mutates the book: validation always runs before the first write.

use crate::types::{OrderId, Side};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    #[error("invalid price {0}: must be positive and at most {max}", max = crate::MAX_PRICE)]
    InvalidPrice(Decimal),

    #[error("invalid quantity {0}: must be positive and keep the side volume representable")]
    InvalidQuantity(Decimal),

    #[error("order book not ready: a side has no price levels")]
    NotReady,

    #[error("{side} limit order at {price} crosses the book (mid-price {mid_price})")]
    CrossesBook {
        side: Side,
        price: Decimal,
        mid_price: Decimal,
    },

    #[error("order {id} not found at price {price}")]
    NotFound { id: OrderId, price: Decimal },

    #[error("insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity {
        requested: Decimal,
        available: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, OrderBookError>;
