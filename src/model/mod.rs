//! Plain records and payloads managed by the resource actors.
//!
//! Identifiers are typed newtypes over the `u32` the actors allocate, so a
//! `MenuItemId` can never be passed where a `RestaurantId` is expected.

/// Declares a typed identifier displayed as `<prefix>_<n>`.
macro_rules! resource_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub mod cart;
pub mod menu_item;
pub mod order;
pub mod order_status;
pub mod restaurant;
pub mod user;

pub use cart::*;
pub use menu_item::*;
pub use order::*;
pub use order_status::*;
pub use restaurant::*;
pub use user::*;
