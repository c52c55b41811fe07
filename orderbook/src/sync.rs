//! Thread-safe handle over a single order book.
//!
//! One mutex guards both sides and the last price together. Market orders
//! and top-of-book cleanup touch both sides inside one logical operation,
//! so per-side locks would let a reader see a half-applied call.
//! No operation blocks or awaits while holding the lock.

use crate::error::Result;
use crate::snapshot::{BookSnapshot, Fill};
use crate::types::{OrderId, Side};
use crate::OrderBook;
use parking_lot::Mutex;
use rust_decimal::Decimal;

#[derive(Debug, Default)]
pub struct SharedOrderBook {
    inner: Mutex<OrderBook>,
}

impl SharedOrderBook {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(OrderBook::new()),
        }
    }

    pub fn initialize(&self, mid_price: Decimal) -> Result<()> {
        self.inner.lock().initialize(mid_price)
    }

    pub fn place_limit_order(&self, side: Side, price: Decimal, qty: Decimal) -> Result<OrderId> {
        self.inner.lock().place_limit_order(side, price, qty)
    }

    pub fn cancel_limit_order(&self, id: OrderId, price: Decimal) -> Result<()> {
        self.inner.lock().cancel_limit_order(id, price)
    }

    pub fn place_market_order(&self, side: Side, qty: Decimal) -> Result<Fill> {
        self.inner.lock().place_market_order(side, qty)
    }

    pub fn snapshot(&self) -> BookSnapshot {
        self.inner.lock().snapshot()
    }

    /// Runs `f` against the book with the lock held.
    pub fn read<R>(&self, f: impl FnOnce(&OrderBook) -> R) -> R {
        f(&self.inner.lock())
    }
}
