//! Single-instrument limit order book with price-time priority.
//!
//! Core features:
//! - Maker-only limit orders, validated against the current mid-price
//! - Market orders sweep the opposite side best price first, then FIFO
//! - Each side keeps at least one level once initialized, so the
//!   mid-price is always defined
//! - Empty top-of-book levels are cleaned up lazily, on the next placement
//!   or cancellation that touches that side
//!
//! `OrderBook` itself is a plain state machine. Share it across threads
//! through [`SharedOrderBook`], which serializes every call.

pub mod error;
pub mod level;
pub mod price_levels;
pub mod queue;
pub mod snapshot;
pub mod sync;
pub mod types;

pub use error::{OrderBookError, Result};
pub use level::PriceLevel;
pub use price_levels::PriceLevels;
pub use queue::OrderQueue;
pub use snapshot::{BookSnapshot, Fill, LevelView};
pub use sync::SharedOrderBook;
pub use types::{Order, OrderId, Side};

pub use rust_decimal::Decimal;

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, trace};

/// Highest accepted price: two of them still add up without overflowing,
/// so the mid-price of any two resting levels is always representable.
pub const MAX_PRICE: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, i32::MAX as u32, false, 0);

fn validate_price(price: Decimal) -> Result<()> {
    if price <= Decimal::ZERO || price > MAX_PRICE {
        return Err(OrderBookError::InvalidPrice(price));
    }
    Ok(())
}

/// Central limit order book with separate bid/ask sides.
///
/// Call [`OrderBook::initialize`] before trading: it seeds both sides with a
/// zero-volume level at the mid-price.
#[derive(Clone, Debug)]
pub struct OrderBook {
    /// Buy orders, highest price first
    bids: PriceLevels,
    /// Sell orders, lowest price first
    asks: PriceLevels,
    /// Price of the level the last execution happened at, zero before any.
    last_price: Decimal,
    last_ts_ns: u128,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Creates an empty, uninitialized order book.
    pub fn new() -> Self {
        Self {
            bids: PriceLevels::new(Side::Bid),
            asks: PriceLevels::new(Side::Ask),
            last_price: Decimal::ZERO,
            last_ts_ns: 0,
        }
    }

    /// Drops every level and order on both sides and forgets the last price.
    pub fn reset(&mut self) {
        self.bids.clear();
        self.asks.clear();
        self.last_price = Decimal::ZERO;
    }

    /// Wipes the book and seeds each side with one zero-quantity order at
    /// `mid_price`. Safe to call again at any time as a full reset.
    pub fn initialize(&mut self, mid_price: Decimal) -> Result<()> {
        validate_price(mid_price)?;

        self.reset();
        for side in [Side::Bid, Side::Ask] {
            let order = Order::new(Decimal::ZERO, self.next_ts());
            self.levels_mut(side).upsert_level(mid_price).add_order(order)?;
        }
        debug!(%mid_price, "order book initialized");
        Ok(())
    }

    /// Average of best bid and best ask.
    pub fn mid_price(&self) -> Result<Decimal> {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => Ok((bid + ask) / Decimal::TWO),
            _ => Err(OrderBookError::NotReady),
        }
    }

    /// Best ask minus best bid, or zero when either side is empty.
    ///
    /// Unlike `mid_price` this never fails.
    pub fn spread(&self) -> Decimal {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => ask - bid,
            _ => Decimal::ZERO,
        }
    }

    /// Rests a new order at `price` on `side` and returns its id.
    ///
    /// Limit orders never trade on entry: a buy above the mid-price or a
    /// sell below it is rejected with `CrossesBook`. A quantity that would
    /// push the side's total volume past `Decimal::MAX` is rejected with
    /// `InvalidQuantity`.
    pub fn place_limit_order(&mut self, side: Side, price: Decimal, qty: Decimal) -> Result<OrderId> {
        validate_price(price)?;
        if qty <= Decimal::ZERO || self.levels(side).total_volume().checked_add(qty).is_none() {
            return Err(OrderBookError::InvalidQuantity(qty));
        }
        let mid_price = self.mid_price()?;
        let crosses = match side {
            Side::Bid => price > mid_price,
            Side::Ask => price < mid_price,
        };
        if crosses {
            return Err(OrderBookError::CrossesBook {
                side,
                price,
                mid_price,
            });
        }

        let order = Order::new(qty, self.next_ts());
        let id = order.id;
        self.levels_mut(side).upsert_level(price).add_order(order)?;
        debug!(%id, %side, %price, %qty, "limit order placed");

        self.clean_top(Side::Bid);
        self.clean_top(Side::Ask);
        Ok(id)
    }

    /// Removes a resting order.
    ///
    /// The side is inferred from `price` against the current mid-price:
    /// below it means bids, otherwise asks. If the mid-price has moved past
    /// the order's price since placement, the wrong side is searched and the
    /// call fails with `NotFound` although the order still rests.
    pub fn cancel_limit_order(&mut self, id: OrderId, price: Decimal) -> Result<()> {
        let mid_price = self.mid_price()?;
        let side = if price < mid_price { Side::Bid } else { Side::Ask };

        let levels = self.levels_mut(side);
        let level = levels
            .get_mut(price)
            .ok_or(OrderBookError::NotFound { id, price })?;
        level
            .remove_order(id)
            .ok_or(OrderBookError::NotFound { id, price })?;
        let emptied = level.is_empty();

        if emptied && levels.can_remove_level() {
            levels.remove_level(price);
        }
        debug!(%id, %side, %price, "limit order cancelled");

        self.clean_top(side);
        Ok(())
    }

    /// Executes `qty` against the opposite side, best price first.
    ///
    /// `qty` must be strictly below the opposite side's total volume, so a
    /// market order can never empty a side.
    pub fn place_market_order(&mut self, side: Side, qty: Decimal) -> Result<Fill> {
        if qty <= Decimal::ZERO {
            return Err(OrderBookError::InvalidQuantity(qty));
        }
        let book_side = side.opposite();
        let available = self.levels(book_side).total_volume();
        if qty >= available {
            return Err(OrderBookError::InsufficientLiquidity {
                requested: qty,
                available,
            });
        }

        if let Some(price) = sweep(self.levels_mut(book_side), qty) {
            self.last_price = price;
        }
        debug!(%side, %qty, last_price = %self.last_price, "market order executed");

        Ok(Fill {
            quantity: qty,
            last_price: self.last_price,
        })
    }

    /// Consistent projection of both sides and the derived metrics.
    pub fn snapshot(&self) -> BookSnapshot {
        let view = |levels: &PriceLevels| -> Vec<LevelView> {
            levels
                .iter_best_first()
                .map(|l| LevelView {
                    price: l.price(),
                    volume: l.volume(),
                })
                .collect()
        };

        BookSnapshot {
            bids: view(&self.bids),
            asks: view(&self.asks),
            last_price: self.last_price,
            spread: self.spread(),
            mid_price: self.mid_price().ok(),
        }
    }

    pub fn levels(&self, side: Side) -> &PriceLevels {
        match side {
            Side::Bid => &self.bids,
            Side::Ask => &self.asks,
        }
    }

    pub fn last_price(&self) -> Decimal {
        self.last_price
    }

    /// Returns current best bid price (highest buy price).
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.best_price()
    }

    /// Returns current best ask price (lowest sell price).
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.best_price()
    }

    fn levels_mut(&mut self, side: Side) -> &mut PriceLevels {
        match side {
            Side::Bid => &mut self.bids,
            Side::Ask => &mut self.asks,
        }
    }

    /// Drops the top-of-book level on `side` if it holds no volume and is
    /// not the last level left.
    fn clean_top(&mut self, side: Side) {
        let levels = self.levels_mut(side);
        if !levels.can_remove_level() {
            return;
        }
        let stale = levels
            .best_level()
            .filter(|l| l.is_empty())
            .map(PriceLevel::price);
        if let Some(price) = stale {
            levels.remove_level(price);
            debug!(%side, %price, "removed empty top-of-book level");
        }
    }

    /// Wall clock in ns, bumped so it never repeats within this book.
    fn next_ts(&mut self) -> u128 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        self.last_ts_ns = now.max(self.last_ts_ns + 1);
        self.last_ts_ns
    }
}

/// Consumes `qty` from `levels`, returning the price of the last level that
/// actually filled. Caller guarantees `qty` is below the side's total volume.
fn sweep(levels: &mut PriceLevels, mut qty: Decimal) -> Option<Decimal> {
    let mut last_price = None;

    // Whole levels
    while let Some((price, volume)) = levels.best_level().map(|l| (l.price(), l.volume())) {
        if qty < volume {
            break;
        }
        qty -= volume;
        levels.remove_level(price);
        // An empty level is dropped, not traded against.
        if !volume.is_zero() {
            last_price = Some(price);
            trace!(%price, %volume, "level swept");
        }
    }

    let Some(level) = levels.best_level_mut() else {
        return last_price;
    };

    // Whole orders at the new best level
    while let Some(front_qty) = level.front().map(|o| o.qty) {
        if qty < front_qty {
            break;
        }
        level.pop_front();
        qty -= front_qty;
        if !front_qty.is_zero() {
            last_price = Some(level.price());
            trace!(price = %level.price(), qty = %front_qty, "order filled");
        }
    }

    // Partial fill of the new head
    if qty > Decimal::ZERO {
        level.reduce_front(qty);
        last_price = Some(level.price());
        trace!(price = %level.price(), %qty, "order partially filled");
    }

    last_price
}

impl fmt::Display for OrderBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ORDER BOOK")?;
        writeln!(f, "ASKS")?;
        for level in self.asks.iter_best_first().collect::<Vec<_>>().into_iter().rev() {
            writeln!(f, "  {}", level)?;
        }
        writeln!(f, "BIDS")?;
        for level in self.bids.iter_best_first() {
            writeln!(f, "  {}", level)?;
        }
        write!(f, "LAST {}", self.last_price)
    }
}
