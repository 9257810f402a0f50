//! Error types for the Order actor.

use crate::model::{RestaurantId, StatusError, UserId};
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during checkout and order tracking.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The user placing or acting on the order does not exist.
    #[error("Invalid user: {0}")]
    InvalidUser(UserId),

    /// The cart points at a restaurant that does not exist.
    #[error("Invalid restaurant: {0}")]
    InvalidRestaurant(RestaurantId),

    #[error("Cart is empty")]
    EmptyCart,

    /// Subtotal plus delivery fee must be greater than zero.
    #[error("Order total must be positive, got {0}")]
    NonPositiveTotal(Decimal),

    /// A line or the order total does not fit in a `Decimal`.
    #[error("Order amount is too large")]
    AmountOverflow,

    /// Unknown method name, or one the marketplace does not accept.
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// Neither the request nor the user's profile has an address.
    #[error("Delivery address is required")]
    MissingDeliveryAddress,

    /// The acting user may not perform this operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Rejected by the status state machine.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Looking up the user or discarding the cart failed.
    #[error(transparent)]
    User(#[from] UserError),

    /// Looking up the restaurant failed.
    #[error(transparent)]
    Restaurant(#[from] RestaurantError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
