//! Status changes on a placed [`Order`](crate::model::Order).

use crate::model::{OrderStatus, UserId};

/// Custom actions for Order entities.
///
/// Both carry the acting user. The result is the
/// [`Transition`](crate::model::Transition) the state machine accepted.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Cancels a pending order. Allowed for the customer and admins.
    Cancel { by: UserId },
    /// Moves the order along the fulfilment sequence. Allowed for the
    /// restaurant's owner and admins.
    SetStatus { status: OrderStatus, by: UserId },
}
