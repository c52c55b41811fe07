use crate::error::{OrderBookError, Result};
use crate::queue::OrderQueue;
use crate::types::{Order, OrderId};
use rust_decimal::Decimal;
use std::fmt;

/// All orders resting at one price, plus their cached total quantity.
///
/// `volume` is kept equal to the queue's quantity sum by every mutator.
/// A level at zero volume is logically empty but is only dropped from its
/// side when the order book decides to (see `OrderBook`).
#[derive(Clone, Debug)]
pub struct PriceLevel {
    price: Decimal,
    volume: Decimal,
    orders: OrderQueue,
}

impl PriceLevel {
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            volume: Decimal::ZERO,
            orders: OrderQueue::new(),
        }
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn volume(&self) -> Decimal {
        self.volume
    }

    pub fn is_empty(&self) -> bool {
        self.volume.is_zero()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Appends `order` at the back of the queue. Fails without touching the
    /// level if the new volume is not representable.
    pub fn add_order(&mut self, order: Order) -> Result<()> {
        self.volume = self
            .volume
            .checked_add(order.qty)
            .ok_or(OrderBookError::InvalidQuantity(order.qty))?;
        self.orders.push_back(order);
        Ok(())
    }

    /// Removes a resident order by id, returning it.
    pub fn remove_order(&mut self, id: OrderId) -> Option<Order> {
        let order = self.orders.remove(id)?;
        self.volume -= order.qty;
        Some(order)
    }

    /// Fully consumes the head order.
    pub fn pop_front(&mut self) -> Option<Order> {
        let order = self.orders.pop_front()?;
        self.volume -= order.qty;
        Some(order)
    }

    /// Partially consumes the head order; `qty` must be below its remaining quantity.
    pub fn reduce_front(&mut self, qty: Decimal) {
        self.orders.reduce_front(qty);
        self.volume -= qty;
    }

    /// True when the cached volume matches the queue contents.
    pub fn volume_is_consistent(&self) -> bool {
        self.volume == self.orders.total_qty()
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{price {} vol {} orders [", self.price, self.volume)?;
        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", order.qty)?;
        }
        f.write_str("]}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    #[test]
    fn volume_tracks_adds_and_removes() {
        let mut level = PriceLevel::new(d(100));
        let a = Order::new(d(5), 1);
        let b = Order::new(d(3), 2);
        let ida = a.id;
        level.add_order(a).expect("volume fits");
        level.add_order(b).expect("volume fits");
        assert_eq!(level.volume(), d(8));
        assert_eq!(level.order_count(), 2);

        let removed = level.remove_order(ida).expect("resident");
        assert_eq!(removed.qty, d(5));
        assert_eq!(level.volume(), d(3));
        assert!(level.volume_is_consistent());
    }

    #[test]
    fn remove_missing_leaves_volume_alone() {
        let mut level = PriceLevel::new(d(100));
        level.add_order(Order::new(d(4), 1)).expect("volume fits");
        assert!(level.remove_order(OrderId::new()).is_none());
        assert_eq!(level.volume(), d(4));
    }

    #[test]
    fn consuming_front_updates_volume() {
        let mut level = PriceLevel::new(d(101));
        level.add_order(Order::new(d(4), 1)).expect("volume fits");
        level.add_order(Order::new(d(6), 2)).expect("volume fits");

        level.reduce_front(d(1));
        assert_eq!(level.volume(), d(9));
        assert_eq!(level.front().map(|o| o.qty), Some(d(3)));

        let popped = level.pop_front().expect("head exists");
        assert_eq!(popped.qty, d(3));
        assert_eq!(level.volume(), d(6));
        assert!(level.volume_is_consistent());
    }

    #[test]
    fn zero_quantity_order_leaves_level_empty() {
        let mut level = PriceLevel::new(d(100));
        level.add_order(Order::new(Decimal::ZERO, 1)).expect("volume fits");
        assert!(level.is_empty());
        assert_eq!(level.order_count(), 1);
    }

    #[test]
    fn display_lists_resident_quantities() {
        let mut level = PriceLevel::new(d(99));
        level.add_order(Order::new(d(2), 1)).expect("volume fits");
        level.add_order(Order::new(d(3), 2)).expect("volume fits");
        assert_eq!(level.to_string(), "{price 99 vol 5 orders [2 3]}");
    }

    #[test]
    fn overflowing_add_is_rejected_untouched() {
        let mut level = PriceLevel::new(d(99));
        level.add_order(Order::new(Decimal::MAX, 1)).expect("volume fits");

        let err = level.add_order(Order::new(d(1), 2));
        assert_eq!(err, Err(OrderBookError::InvalidQuantity(d(1))));
        assert_eq!(level.volume(), Decimal::MAX);
        assert_eq!(level.order_count(), 1);
    }
}
