use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    /// Maps the wire convention (`type: true` is a buy) onto a book side.
    pub fn from_is_buy(is_buy: bool) -> Self {
        if is_buy {
            Side::Bid
        } else {
            Side::Ask
        }
    }

    pub fn is_buy(self) -> bool {
        matches!(self, Side::Bid)
    }

    /// The side a market order on this side executes against.
    pub fn opposite(self) -> Self {
        match self {
            Side::Bid => Side::Ask,
            Side::Ask => Side::Bid,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("buy"),
            Side::Ask => f.write_str("sell"),
        }
    }
}

/// 128-bit order identifier, generated from a random UUID and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Uuid", into = "Uuid")]
pub struct OrderId(pub u128);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id.as_u128())
    }
}

impl From<OrderId> for Uuid {
    fn from(id: OrderId) -> Self {
        Uuid::from_u128(id.0)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self::from)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_u128(self.0).hyphenated())
    }
}

/// A resting order. Identity and timestamp are fixed at creation,
/// only `qty` shrinks as the order is consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub qty: Decimal,
    pub ts_ns: u128, // event time in ns, FIFO tie-break only
}

impl Order {
    pub fn new(qty: Decimal, ts_ns: u128) -> Self {
        Self {
            id: OrderId::new(),
            qty,
            ts_ns,
        }
    }
}
