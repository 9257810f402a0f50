//! # Restaurant Actor
//!
//! Owns restaurant listings: name, address, owner and the flat delivery fee
//! checkout adds to every order. No dependencies, CRUD only.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;

/// Restaurants expose no operations beyond CRUD.
#[derive(Debug, Clone)]
pub enum RestaurantAction {}

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
