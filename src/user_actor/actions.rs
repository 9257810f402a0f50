//! Cart operations on a [`User`](crate::model::User).
//!
//! Every successful mutation bumps the user's cart revision. Checkout relies on
//! that: it prices a snapshot, then discards the cart with
//! [`UserAction::ClearCart`] carrying the snapshot's revision, which fails if
//! anything changed in between.

use crate::model::{Cart, MenuItemId, RestaurantId};

/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Adds an item, merging with its existing line.
    ///
    /// An item from another restaurant replaces the whole cart.
    AddToCart {
        menu_item_id: MenuItemId,
        quantity: u32,
    },
    /// Overwrites a line's quantity. 0 removes the line.
    SetQuantity {
        menu_item_id: MenuItemId,
        quantity: u32,
    },
    RemoveFromCart { menu_item_id: MenuItemId },
    ViewCart,
    /// Discards the cart only if it is still at `revision`.
    ClearCart { revision: u64 },
    /// Discards the cart unconditionally.
    DiscardCart,
}

/// Results from [`UserAction`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// The cart after an add. `replaced` names the restaurant whose cart was discarded.
    Added {
        cart: Cart,
        replaced: Option<RestaurantId>,
    },
    /// The cart after a view, quantity change or removal. `None` once empty.
    Cart(Option<Cart>),
    Cleared,
}
