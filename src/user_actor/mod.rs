//! # User Actor
//!
//! Owns accounts and their carts. Cart edits are [`UserAction`]s; the order
//! actor calls [`UserAction::ClearCart`] at the end of a checkout.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
///
/// Run it with a [`MenuItemClient`](crate::clients::MenuItemClient) as context.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
