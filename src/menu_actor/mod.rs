//! # Menu Item Actor
//!
//! Owns every restaurant's menu. Items are validated against the restaurant
//! actor on creation; price and availability are edited through updates.
//! Price edits never reach carts or orders, which keep the price they
//! captured. Carts only take items that pass [`MenuItemAction::CheckOrderable`],
//! so an item whose restaurant was deleted cannot be ordered.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuItemClient;
use crate::framework::ResourceActor;
use crate::model::MenuItem;

/// Custom actions for MenuItem entities.
#[derive(Debug, Clone)]
pub enum MenuItemAction {
    /// Returns the item if it can go into a cart: it is available and its
    /// restaurant still exists.
    CheckOrderable,
}

/// Creates a new MenuItem actor and its client.
///
/// Run it with a [`RestaurantClient`](crate::clients::RestaurantClient) as context.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, MenuItemClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, MenuItemClient::new(generic_client))
}
