//! Shopping cart arithmetic.
//!
//! A cart belongs to one user and one restaurant. Lines carry the name and unit
//! price captured when the item was added; totals are always computed from the
//! lines, never stored.

use crate::model::{MenuItem, MenuItemId, RestaurantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One menu item in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: MenuItemId,
    pub name: String,
    pub unit_price: Decimal,
    /// Always at least 1; a line at 0 is removed.
    pub quantity: u32,
}

impl CartLine {
    /// Saturates at `Decimal::MAX`; checkout prices with checked arithmetic instead.
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Pending line items for a single restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub restaurant_id: RestaurantId,
    pub lines: Vec<CartLine>,
    /// Copy of the owner's cart revision at the last change; checkout uses it
    /// to detect edits made between pricing and discarding the cart.
    pub revision: u64,
}

impl Cart {
    pub fn new(restaurant_id: RestaurantId) -> Self {
        Self {
            restaurant_id,
            lines: Vec::new(),
            revision: 0,
        }
    }

    /// Adds `quantity` of `item`, merging with an existing line.
    ///
    /// An existing line keeps the price it was first added at.
    pub fn add_item(&mut self, item: &MenuItem, quantity: u32) {
        match self.line_mut(item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                menu_item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
            }),
        }
    }

    /// Sets a line's quantity; 0 removes it. Returns `false` if the item is not in the cart.
    pub fn set_quantity(&mut self, menu_item_id: MenuItemId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(menu_item_id);
        }
        match self.line_mut(menu_item_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Removes a line. Returns `false` if the item is not in the cart.
    pub fn remove(&mut self, menu_item_id: MenuItemId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.menu_item_id != menu_item_id);
        self.lines.len() != before
    }

    /// Sum of quantity × captured unit price, saturating at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()))
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, menu_item_id: MenuItemId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(id: u32, cents: i64) -> MenuItem {
        MenuItem {
            id: MenuItemId(id),
            restaurant_id: RestaurantId(1),
            name: format!("dish {id}"),
            description: None,
            category: None,
            price: Decimal::new(cents, 2),
            available: true,
        }
    }

    #[test]
    fn test_subtotal_sums_quantity_times_price() {
        let mut cart = Cart::new(RestaurantId(1));
        cart.add_item(&dish(1, 1250), 2);
        cart.add_item(&dish(2, 399), 3);

        assert_eq!(cart.subtotal(), Decimal::new(3697, 2));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_adding_same_item_merges_and_keeps_first_price() {
        let mut cart = Cart::new(RestaurantId(1));
        cart.add_item(&dish(1, 1000), 1);

        let mut repriced = dish(1, 1500);
        repriced.name = "renamed".into();
        cart.add_item(&repriced, 2);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.lines[0].unit_price, Decimal::new(1000, 2));
        assert_eq!(cart.subtotal(), Decimal::new(3000, 2));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new(RestaurantId(1));
        cart.add_item(&dish(1, 500), 2);
        cart.add_item(&dish(2, 700), 1);

        assert!(cart.set_quantity(MenuItemId(1), 5));
        assert_eq!(cart.subtotal(), Decimal::new(3200, 2));

        assert!(cart.set_quantity(MenuItemId(1), 0));
        assert_eq!(cart.lines.len(), 1);
        assert!(!cart.set_quantity(MenuItemId(9), 1));
    }

    #[test]
    fn test_huge_lines_saturate_instead_of_panicking() {
        let mut cart = Cart::new(RestaurantId(1));
        let mut expensive = dish(1, 0);
        expensive.price = Decimal::MAX;
        cart.add_item(&expensive, u32::MAX);
        cart.add_item(&dish(2, 100), u32::MAX);

        assert_eq!(cart.subtotal(), Decimal::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_remove_last_line_empties_cart() {
        let mut cart = Cart::new(RestaurantId(1));
        cart.add_item(&dish(1, 500), 1);

        assert!(!cart.remove(MenuItemId(2)));
        assert!(cart.remove(MenuItemId(1)));
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }
}
