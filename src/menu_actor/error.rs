//! Error types for the MenuItem actor.

use crate::model::{MenuItemId, RestaurantId};
use crate::restaurant_actor::RestaurantError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuItemError {
    /// The requested menu item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// A required field is missing or malformed.
    #[error("Menu item validation error: {0}")]
    ValidationError(String),

    /// Prices cannot be negative.
    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    /// The item is switched off.
    #[error("Menu item unavailable: {0}")]
    Unavailable(MenuItemId),

    /// The restaurant the item belongs to does not exist.
    #[error("Invalid restaurant: {0}")]
    InvalidRestaurant(RestaurantId),

    /// Looking up the restaurant failed.
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for MenuItemError {
    fn from(msg: String) -> Self {
        MenuItemError::ActorCommunicationError(msg)
    }
}
