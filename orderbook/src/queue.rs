use crate::types::{Order, OrderId};
use rust_decimal::Decimal;
use std::collections::VecDeque;

/// FIFO queue of orders resting at one price.
/// Oldest order at the front, matched first.
#[derive(Clone, Debug, Default)]
pub struct OrderQueue {
    orders: VecDeque<Order>,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self {
            orders: VecDeque::new(),
        }
    }

    /// Adds an order at the tail, O(1).
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Scans from the head and splices out the order with this id,
    /// keeping the relative order of the rest.
    pub fn remove(&mut self, id: OrderId) -> Option<Order> {
        let pos = self.orders.iter().position(|o| o.id == id)?;
        self.orders.remove(pos)
    }

    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Takes `qty` off the head order without removing it.
    ///
    /// Callers bound `qty` by the head's remaining quantity; reducing
    /// it to zero or below is a contract violation.
    pub fn reduce_front(&mut self, qty: Decimal) {
        if let Some(front) = self.orders.front_mut() {
            debug_assert!(qty < front.qty, "partial fill must leave the head order alive");
            front.qty -= qty;
        }
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    /// Sum of resident quantities, recomputed from scratch.
    pub fn total_qty(&self) -> Decimal {
        self.orders.iter().map(|o| o.qty).sum()
    }
}
