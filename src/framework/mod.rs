//! Generic resource-actor plumbing used by every marketplace resource.
//!
//! - [`ActorEntity`] - implemented by users, restaurants, menu items and orders
//! - [`ResourceActor`] - the task owning one resource store
//! - [`ResourceClient`] - typed handle for sending requests
//! - [`FrameworkError`] - transport errors and boxed entity errors
//!
//! See [`mock`] for testing clients and actors without spawning their dependencies.

pub mod core;
pub mod mock;

pub use self::core::*;
