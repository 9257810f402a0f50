use crate::clients::ActorClient;
use crate::model::{Cart, MenuItemId, RestaurantId, User, UserId};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use tracing::{debug, instrument};

impl_resource_client!(
    /// Client for interacting with the User actor, carts included.
    UserClient,
    User,
    UserError,
    user
);

impl UserClient {
    async fn act(&self, id: UserId, action: UserAction) -> Result<UserActionResult, UserError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }

    /// Adds an item to the user's cart.
    ///
    /// Returns the updated cart and, if the item came from a different
    /// restaurant, the restaurant whose cart was discarded.
    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        id: UserId,
        menu_item_id: MenuItemId,
        quantity: u32,
    ) -> Result<(Cart, Option<RestaurantId>), UserError> {
        match self
            .act(id, UserAction::AddToCart { menu_item_id, quantity })
            .await?
        {
            UserActionResult::Added { cart, replaced } => Ok((cart, replaced)),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        id: UserId,
        menu_item_id: MenuItemId,
        quantity: u32,
    ) -> Result<Option<Cart>, UserError> {
        self.cart_result(id, UserAction::SetQuantity { menu_item_id, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(&self, id: UserId, menu_item_id: MenuItemId) -> Result<Option<Cart>, UserError> {
        self.cart_result(id, UserAction::RemoveFromCart { menu_item_id })
            .await
    }

    #[instrument(skip(self))]
    pub async fn view_cart(&self, id: UserId) -> Result<Option<Cart>, UserError> {
        self.cart_result(id, UserAction::ViewCart).await
    }

    /// Discards the cart if it is still at `revision`.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self, id: UserId, revision: u64) -> Result<(), UserError> {
        self.act(id, UserAction::ClearCart { revision }).await.map(drop)
    }

    #[instrument(skip(self))]
    pub async fn discard_cart(&self, id: UserId) -> Result<(), UserError> {
        self.act(id, UserAction::DiscardCart).await.map(drop)
    }

    async fn cart_result(&self, id: UserId, action: UserAction) -> Result<Option<Cart>, UserError> {
        match self.act(id, action).await? {
            UserActionResult::Cart(cart) => Ok(cart),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: UserActionResult) -> UserError {
    UserError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}
