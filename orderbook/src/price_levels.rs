use crate::level::PriceLevel;
use crate::types::Side;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

// One side of the book, price levels keyed by price in a BTreeMap.
// Side determines which end of the map is the best:
// - Asks: lowest price is best (front of map)
// - Bids: highest price is best (back of map)
// The map is both the ordered collection and the price index, so inserts
// and removals are O(log n) and lookup by price needs no second structure.
#[derive(Clone, Debug)]
pub struct PriceLevels {
    /// Bid or ask?
    side: Side,
    levels: BTreeMap<Decimal, PriceLevel>,
}

impl PriceLevels {
    /// Creates empty price levels for given side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// Returns the level at `price`, creating and indexing an empty one if needed.
    pub fn upsert_level(&mut self, price: Decimal) -> &mut PriceLevel {
        self.levels
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
    }

    pub fn get(&self, price: Decimal) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub fn get_mut(&mut self, price: Decimal) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    /// Unindexes and drops the level at `price`.
    ///
    /// Does not guard the one-level floor: callers check `can_remove_level`
    /// first wherever the floor applies.
    pub fn remove_level(&mut self, price: Decimal) -> Option<PriceLevel> {
        self.levels.remove(&price)
    }

    /// A side must keep at least one level once the book is initialized.
    pub fn can_remove_level(&self) -> bool {
        self.levels.len() > 1
    }

    /// Returns the best price for the side without removing anything
    /// For asks: the lowest price (whatever is first in the BTree)
    /// For bids: the highest price (whatever is last in the BTree)
    /// Returns None if no price levels currently exist
    pub fn best_price(&self) -> Option<Decimal> {
        self.best_level().map(PriceLevel::price)
    }

    pub fn best_level(&self) -> Option<&PriceLevel> {
        match self.side {
            Side::Ask => self.levels.first_key_value().map(|(_, l)| l),
            Side::Bid => self.levels.last_key_value().map(|(_, l)| l),
        }
    }

    pub fn best_level_mut(&mut self) -> Option<&mut PriceLevel> {
        match self.side {
            Side::Ask => self.levels.values_mut().next(),
            Side::Bid => self.levels.values_mut().next_back(),
        }
    }

    /// Levels in priority order: descending price for bids, ascending for asks.
    pub fn iter_best_first(&self) -> Box<dyn Iterator<Item = &PriceLevel> + '_> {
        match self.side {
            Side::Ask => Box::new(self.levels.values()),
            Side::Bid => Box::new(self.levels.values().rev()),
        }
    }

    /// Sum of every level's cached volume, saturating at `Decimal::MAX`.
    pub fn total_volume(&self) -> Decimal {
        self.levels
            .values()
            .try_fold(Decimal::ZERO, |acc, l| acc.checked_add(l.volume()))
            .unwrap_or(Decimal::MAX)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
