//! [`ActorEntity`] implementation for [`User`].
//!
//! The user actor owns carts, so its context is the [`MenuItemClient`] used to
//! check an item is orderable, and capture its name and price, when it is added.

use super::{UserAction, UserActionResult, UserError};
use crate::clients::MenuItemClient;
use crate::menu_actor::MenuItemError;
use crate::framework::ActorEntity;
use crate::model::{Cart, MenuItemId, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use tracing::{debug, info};

fn check_name(name: &str) -> Result<String, UserError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(UserError::ValidationError("name is required".into()));
    }
    Ok(name.to_string())
}

fn check_email(email: &str) -> Result<String, UserError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(UserError::ValidationError(format!("invalid email: {email:?}")));
    }
    Ok(email.to_string())
}

impl User {
    /// Stores `cart` as the new cart state and bumps the revision.
    fn store_cart(&mut self, mut cart: Cart) -> Cart {
        self.cart_revision += 1;
        cart.revision = self.cart_revision;
        self.cart = Some(cart.clone());
        cart
    }

    fn drop_cart(&mut self) {
        self.cart_revision += 1;
        self.cart = None;
    }

    /// Stores the cart after an edit, deleting it once the last line is gone.
    fn settle_cart(&mut self, cart: Cart) -> Option<Cart> {
        if cart.is_empty() {
            self.drop_cart();
            None
        } else {
            Some(self.store_cart(cart))
        }
    }

    fn cart_for_edit(&self, menu_item_id: MenuItemId) -> Result<Cart, UserError> {
        self.cart
            .clone()
            .ok_or(UserError::NotInCart(menu_item_id))
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Context = MenuItemClient;
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let mut user = User::new(id, check_name(&params.name)?, check_email(&params.email)?);
        user.address = params.address;
        user.phone = params.phone;
        user.is_restaurant = params.is_restaurant;
        user.is_admin = params.is_admin;
        Ok(user)
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &MenuItemClient) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = check_name(&name)?;
        }
        if let Some(email) = update.email {
            self.email = check_email(&email)?;
        }
        if update.address.is_some() {
            self.address = update.address;
        }
        if update.phone.is_some() {
            self.phone = update.phone;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        menu: &MenuItemClient,
    ) -> Result<UserActionResult, Self::Error> {
        match action {
            UserAction::AddToCart {
                menu_item_id,
                quantity,
            } => {
                if quantity == 0 {
                    return Err(UserError::InvalidQuantity(quantity));
                }
                let item = match menu.orderable(menu_item_id).await {
                    Ok(item) => item,
                    Err(
                        MenuItemError::NotFound(_)
                        | MenuItemError::Unavailable(_)
                        | MenuItemError::InvalidRestaurant(_),
                    ) => return Err(UserError::MenuItemUnavailable(menu_item_id)),
                    Err(e) => return Err(e.into()),
                };

                let (mut cart, replaced) = match self.cart.take() {
                    Some(cart) if cart.restaurant_id == item.restaurant_id => (cart, None),
                    Some(other) => {
                        info!(user_id = %self.id, from = %other.restaurant_id, to = %item.restaurant_id, "Replacing cart");
                        (Cart::new(item.restaurant_id), Some(other.restaurant_id))
                    }
                    None => (Cart::new(item.restaurant_id), None),
                };
                cart.add_item(&item, quantity);
                debug!(user_id = %self.id, %menu_item_id, quantity, "Added to cart");
                Ok(UserActionResult::Added {
                    cart: self.store_cart(cart),
                    replaced,
                })
            }
            UserAction::SetQuantity {
                menu_item_id,
                quantity,
            } => {
                let mut cart = self.cart_for_edit(menu_item_id)?;
                if !cart.set_quantity(menu_item_id, quantity) {
                    return Err(UserError::NotInCart(menu_item_id));
                }
                Ok(UserActionResult::Cart(self.settle_cart(cart)))
            }
            UserAction::RemoveFromCart { menu_item_id } => {
                let mut cart = self.cart_for_edit(menu_item_id)?;
                if !cart.remove(menu_item_id) {
                    return Err(UserError::NotInCart(menu_item_id));
                }
                Ok(UserActionResult::Cart(self.settle_cart(cart)))
            }
            UserAction::ViewCart => Ok(UserActionResult::Cart(self.cart.clone())),
            UserAction::ClearCart { revision } => {
                if revision != self.cart_revision {
                    return Err(UserError::CartChanged {
                        expected: revision,
                        actual: self.cart_revision,
                    });
                }
                self.drop_cart();
                Ok(UserActionResult::Cleared)
            }
            UserAction::DiscardCart => {
                self.drop_cart();
                Ok(UserActionResult::Cleared)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, email: &str) -> Result<User, UserError> {
        User::from_create_params(
            UserId(1),
            UserCreate {
                name: name.into(),
                email: email.into(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_create_validates_name_and_email() {
        let user = create(" Ana ", "ana@example.com").unwrap();
        assert_eq!(user.name, "Ana");
        assert!(user.cart.is_none());

        assert!(matches!(create("", "ana@example.com"), Err(UserError::ValidationError(_))));
        assert!(matches!(create("Ana", "not-an-email"), Err(UserError::ValidationError(_))));
    }

    #[test]
    fn test_cart_revision_bumps_on_store_and_drop() {
        let mut user = create("Ana", "ana@example.com").unwrap();
        let stored = user.store_cart(Cart::new(crate::model::RestaurantId(1)));
        assert_eq!(stored.revision, 1);
        assert_eq!(user.cart.as_ref().map(|c| c.revision), Some(1));

        user.drop_cart();
        assert_eq!(user.cart_revision, 2);
        assert!(user.cart.is_none());
    }
}
