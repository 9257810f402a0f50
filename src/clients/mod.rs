//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](crate::framework::FrameworkError)s back
//! to its actor's error type and adds the resource's own operations.

#[macro_use]
mod macros;

pub mod actor_client;
pub mod menu_client;
pub mod order_client;
pub mod restaurant_client;
pub mod user_client;

pub use actor_client::*;
pub use menu_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use user_client::*;
