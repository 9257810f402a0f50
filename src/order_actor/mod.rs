//! # Order Actor
//!
//! Owns placed orders. Checkout runs inside the create hook, so the order
//! actor's sequential processing is what makes it all-or-nothing.
//!
//! ```text
//!            ┌────────────┐
//!            │ OrderActor │
//!            └─────┬──────┘
//!        ┌─────────┴─────────┐
//!        ▼                   ▼
//!   UserClient        RestaurantClient
//!  (cart, profile)    (delivery fee, owner)
//! ```

mod actions;
pub mod checkout;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{OrderClient, RestaurantClient, UserClient};
use crate::framework::ResourceActor;
use crate::model::{Order, PaymentMethod};

/// Dependencies of the order actor, injected at `run()`.
#[derive(Clone)]
pub struct OrderContext {
    pub users: UserClient,
    pub restaurants: RestaurantClient,
    /// Subset of [`PaymentMethod::ALL`] this marketplace takes.
    pub accepted_payments: Vec<PaymentMethod>,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
