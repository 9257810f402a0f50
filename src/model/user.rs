use crate::model::Cart;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for users.
    UserId,
    "user"
);

/// A registered account: a customer, a restaurant owner, or an admin.
///
/// # Actor Framework
/// Managed by the user actor, which also owns the account's cart. See
/// [`UserAction`](crate::user_actor::UserAction) for the cart operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_restaurant: bool,
    pub is_admin: bool,
    /// At most one cart, always for a single restaurant.
    pub cart: Option<Cart>,
    /// Bumped on every cart change, including discards.
    pub cart_revision: u64,
}

impl User {
    /// A plain customer account with no address on file.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: None,
            phone: None,
            is_restaurant: false,
            is_admin: false,
            cart: None,
            cart_revision: 0,
        }
    }

    /// The profile address, if one is set and not blank.
    pub fn delivery_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }
}

/// Payload for registering a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub is_restaurant: bool,
    #[serde(default)]
    pub is_admin: bool,
}

/// Profile changes; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}
