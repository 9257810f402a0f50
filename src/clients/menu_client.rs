use crate::clients::ActorClient;
use crate::menu_actor::{MenuItemAction, MenuItemError};
use crate::model::{MenuItem, MenuItemId, RestaurantId};
use tracing::instrument;

impl_resource_client!(
    /// Client for interacting with the MenuItem actor.
    MenuItemClient,
    MenuItem,
    MenuItemError,
    menu_item
);

impl MenuItemClient {
    /// A restaurant's menu, sorted by id. Includes unavailable items.
    #[instrument(skip(self))]
    pub async fn menu_for(&self, restaurant_id: RestaurantId) -> Result<Vec<MenuItem>, MenuItemError> {
        let mut items: Vec<MenuItem> = self
            .list()
            .await?
            .into_iter()
            .filter(|item| item.restaurant_id == restaurant_id)
            .collect();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    /// The item as it can be put in a cart right now.
    ///
    /// Fails with `Unavailable` when switched off and `InvalidRestaurant`
    /// when its restaurant is gone.
    #[instrument(skip(self))]
    pub async fn orderable(&self, id: MenuItemId) -> Result<MenuItem, MenuItemError> {
        self.inner
            .perform_action(id, MenuItemAction::CheckOrderable)
            .await
            .map_err(Self::map_error)
    }

    /// Deletes a restaurant's whole menu. Returns how many items were removed.
    #[instrument(skip(self))]
    pub async fn delete_menu_for(&self, restaurant_id: RestaurantId) -> Result<usize, MenuItemError> {
        let items = self.menu_for(restaurant_id).await?;
        for item in &items {
            self.delete(item.id).await?;
        }
        Ok(items.len())
    }
}
