//! Exchange facade over the single shared order book.
//!
//! Translates wire requests into book calls and book results into wire
//! responses. All serialization of concurrent requests happens inside
//! `SharedOrderBook`; nothing here holds a lock across an await.

use orderbook::{Decimal, Fill, OrderBookError, OrderId, SharedOrderBook, Side};
use tracing::info;

use crate::types::BookData;

#[derive(Debug, Default)]
pub struct Exchange {
    book: SharedOrderBook,
}

impl Exchange {
    /// Creates an exchange with an uninitialized book; call `init` first.
    pub fn new() -> Self {
        Self {
            book: SharedOrderBook::new(),
        }
    }

    /// Resets the book around `mid_price`.
    pub fn init(&self, mid_price: Decimal) -> Result<(), OrderBookError> {
        self.book.initialize(mid_price)?;
        info!(%mid_price, "order book initialized");
        Ok(())
    }

    pub fn place_limit(&self, is_buy: bool, price: Decimal, qty: Decimal) -> Result<OrderId, OrderBookError> {
        let side = Side::from_is_buy(is_buy);
        let id = self.book.place_limit_order(side, price, qty)?;
        info!(%id, %side, %price, %qty, "limit order resting");
        Ok(id)
    }

    pub fn cancel(&self, id: OrderId, price: Decimal) -> Result<(), OrderBookError> {
        self.book.cancel_limit_order(id, price)?;
        info!(%id, %price, "limit order cancelled");
        Ok(())
    }

    pub fn place_market(&self, is_buy: bool, qty: Decimal) -> Result<Fill, OrderBookError> {
        let side = Side::from_is_buy(is_buy);
        let fill = self.book.place_market_order(side, qty)?;
        info!(%side, qty = %fill.quantity, last_price = %fill.last_price, "market order filled");
        Ok(fill)
    }

    /// Both sides, last price, spread and mid-price from one lock acquisition.
    pub fn book_data(&self) -> BookData {
        self.book.snapshot().into()
    }
}
