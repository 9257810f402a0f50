//! Error types for the User actor.

use crate::menu_actor::MenuItemError;
use crate::model::MenuItemId;
use thiserror::Error;

/// Errors that can occur during user and cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The user data failed validation.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// Cart quantities start at 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The menu item does not exist or is switched off.
    #[error("Menu item unavailable: {0}")]
    MenuItemUnavailable(MenuItemId),

    /// The item has no line in the cart.
    #[error("Item not in cart: {0}")]
    NotInCart(MenuItemId),

    /// The cart was edited after the caller last read it.
    #[error("Cart changed: expected revision {expected}, found {actual}")]
    CartChanged { expected: u64, actual: u64 },

    /// Looking up the menu item failed.
    #[error(transparent)]
    MenuItem(#[from] MenuItemError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for UserError {
    fn from(msg: String) -> Self {
        UserError::ActorCommunicationError(msg)
    }
}
