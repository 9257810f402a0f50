//! [`ActorEntity`] implementation for [`MenuItem`].
//!
//! The context is the [`RestaurantClient`]: an item can only be created for a
//! restaurant that exists.

use super::{MenuItemAction, MenuItemError};
use crate::clients::{ActorClient, RestaurantClient};
use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

fn check_price(price: Decimal) -> Result<Decimal, MenuItemError> {
    if price < Decimal::ZERO {
        return Err(MenuItemError::NegativePrice(price));
    }
    Ok(price)
}

fn check_name(name: &str) -> Result<String, MenuItemError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MenuItemError::ValidationError("name is required".into()));
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuItemAction;
    type ActionResult = MenuItem;
    type Context = RestaurantClient;
    type Error = MenuItemError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: check_name(&params.name)?,
            description: params.description,
            category: params.category,
            price: check_price(params.price)?,
            available: true,
        })
    }

    async fn on_create(&mut self, restaurants: &RestaurantClient) -> Result<(), Self::Error> {
        debug!(restaurant_id = %self.restaurant_id, "Checking restaurant");
        match restaurants.get(self.restaurant_id).await? {
            Some(_) => Ok(()),
            None => Err(MenuItemError::InvalidRestaurant(self.restaurant_id)),
        }
    }

    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        _ctx: &RestaurantClient,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = check_name(&name)?;
        }
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.category.is_some() {
            self.category = update.category;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuItemAction,
        restaurants: &RestaurantClient,
    ) -> Result<MenuItem, Self::Error> {
        match action {
            MenuItemAction::CheckOrderable => {
                if !self.available {
                    return Err(MenuItemError::Unavailable(self.id));
                }
                match restaurants.get(self.restaurant_id).await? {
                    Some(_) => Ok(self.clone()),
                    None => Err(MenuItemError::InvalidRestaurant(self.restaurant_id)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RestaurantId;

    fn params(price: Decimal) -> MenuItemCreate {
        MenuItemCreate {
            restaurant_id: RestaurantId(1),
            name: "Coxinha".into(),
            description: None,
            category: Some("snacks".into()),
            price,
        }
    }

    #[test]
    fn test_new_items_start_available() {
        let item = MenuItem::from_create_params(MenuItemId(1), params(Decimal::new(650, 2))).unwrap();
        assert!(item.available);
        assert_eq!(item.price, Decimal::new(650, 2));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(1), params(Decimal::new(-1, 2))),
            Err(MenuItemError::NegativePrice(Decimal::new(-1, 2)))
        );
    }
}
