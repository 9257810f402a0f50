use crate::model::RestaurantId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for menu items.
    MenuItemId,
    "menu_item"
);

/// A dish on a restaurant's menu.
///
/// The price here is the *current* price. Carts and orders copy it when an
/// item is added, so later edits never reach an order already placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
    pub available: bool,
}

/// Payload for adding a dish to a menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Decimal,
}

/// Menu edits; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub available: Option<bool>,
}
