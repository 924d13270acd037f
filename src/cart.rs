//! Cart Aggregation
//!
//! Client-side cart held by the catalog view: one line per item id.

use std::collections::HashMap;

use crate::models::{Item, ItemRef, OrderLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub item_id: u32,
    pub quantity: u32,
}

/// Ordered set of cart lines, unique by item id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, item_id: u32) -> Option<u32> {
        self.lines.iter().find(|l| l.item_id == item_id).map(|l| l.quantity)
    }

    /// Add one unit: bump an existing line or append a new one
    pub fn add(&mut self, item: &Item) {
        match self.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine { item_id: item.id, quantity: 1 }),
        }
    }

    /// Replace a line's quantity, clamped to at least 1.
    ///
    /// Lines are never removed here; use [`Cart::remove`] for that.
    pub fn set_quantity(&mut self, item_id: u32, requested: i64) {
        let quantity = requested.clamp(1, i64::from(u32::MAX)) as u32;
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, item_id: u32) {
        self.lines.retain(|l| l.item_id != item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantity × price; lines for unknown items count as zero
    pub fn total(&self, items: &[Item]) -> f64 {
        let prices: HashMap<u32, f64> = items.iter().map(|i| (i.id, i.price)).collect();
        self.lines
            .iter()
            .map(|l| prices.get(&l.item_id).copied().unwrap_or(0.0) * f64::from(l.quantity))
            .sum()
    }

    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|l| OrderLine { item: ItemRef { id: l.item_id }, quantity: l.quantity })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: f64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            description: None,
            price,
            category: None,
            image: None,
        }
    }

    #[test]
    fn test_repeated_adds_merge_by_id() {
        let (a, b, c) = (item(1, 1.0), item(2, 1.0), item(3, 1.0));
        let mut cart = Cart::new();
        for it in [&a, &b, &a, &c, &a, &b] {
            cart.add(it);
        }

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.quantity_of(1), Some(3));
        assert_eq!(cart.quantity_of(2), Some(2));
        assert_eq!(cart.quantity_of(3), Some(1));
        // First-add order is kept
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.item_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_total_scenario() {
        let items = vec![item(1, 10.0), item(2, 5.0)];
        let mut cart = Cart::new();
        cart.add(&items[0]);
        cart.add(&items[1]);
        cart.add(&items[1]);
        assert_eq!(cart.total(&items), 20.0);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        assert_eq!(Cart::new().total(&[item(1, 99.0)]), 0.0);
    }

    #[test]
    fn test_total_follows_every_mutation() {
        let items = vec![item(1, 2.5), item(2, 4.0)];
        let mut cart = Cart::new();
        cart.add(&items[0]);
        assert_eq!(cart.total(&items), 2.5);
        cart.set_quantity(1, 4);
        assert_eq!(cart.total(&items), 10.0);
        cart.add(&items[1]);
        assert_eq!(cart.total(&items), 14.0);
        cart.remove(1);
        assert_eq!(cart.total(&items), 4.0);
    }

    #[test]
    fn test_set_quantity_below_one_clamps_and_keeps_line() {
        let mut cart = Cart::new();
        cart.add(&item(5, 1.0));
        cart.add(&item(5, 1.0));

        cart.set_quantity(5, 0);
        assert_eq!(cart.quantity_of(5), Some(1));

        cart.set_quantity(5, -7);
        assert_eq!(cart.quantity_of(5), Some(1));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&item(1, 1.0));
        cart.set_quantity(42, 3);
        assert_eq!(cart.lines(), &[CartLine { item_id: 1, quantity: 1 }]);
    }

    #[test]
    fn test_unknown_item_contributes_nothing() {
        let mut cart = Cart::new();
        cart.add(&item(9, 100.0));
        assert_eq!(cart.total(&[item(1, 3.0)]), 0.0);
    }

    #[test]
    fn test_order_lines_copy_cart() {
        let mut cart = Cart::new();
        cart.add(&item(2, 1.0));
        cart.set_quantity(2, 6);
        let lines = cart.order_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].item.id, 2);
        assert_eq!(lines[0].quantity, 6);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(lines[0].quantity, 6);
    }
}
