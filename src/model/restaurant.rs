use crate::model::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for restaurants.
    RestaurantId,
    "restaurant"
);

/// A restaurant listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub owner_id: UserId,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    /// Flat fee added to every order, never negative.
    pub delivery_fee: Decimal,
    pub delivery_time_minutes: Option<u32>,
    pub rating: f32,
}

impl Restaurant {
    /// Whether `user_id` may manage this restaurant's orders and menu.
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Case-insensitive substring match on name, category and address.
    /// A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [Some(self.name.as_str()), self.category.as_deref(), Some(self.address.as_str())]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Payload for listing a new restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub owner_id: UserId,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub delivery_fee: Decimal,
    pub delivery_time_minutes: Option<u32>,
}

/// Restaurant edits; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub delivery_fee: Option<Decimal>,
    pub delivery_time_minutes: Option<u32>,
}
