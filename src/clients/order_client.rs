use crate::clients::ActorClient;
use crate::model::{CheckoutRequest, Order, OrderId, OrderStatus, RestaurantId, Transition, UserId};
use crate::order_actor::{OrderAction, OrderError};
use tracing::{info, instrument};

impl_resource_client!(
    /// Client for interacting with the Order actor.
    ///
    /// Orchestration (cart pricing, payment and address checks, discarding the
    /// cart) happens in the Order actor's `on_create` hook.
    OrderClient,
    Order,
    OrderError,
    order
);

impl OrderClient {
    /// Turns the user's cart into an order.
    ///
    /// On any error no order exists and the cart is left as it was.
    #[instrument(skip(self))]
    pub async fn checkout(&self, request: CheckoutRequest) -> Result<OrderId, OrderError> {
        info!("Sending checkout to actor");
        self.create_order(request).await
    }

    /// Cancels a pending order on behalf of `by`.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId, by: UserId) -> Result<Transition, OrderError> {
        self.inner
            .perform_action(id, OrderAction::Cancel { by })
            .await
            .map_err(Self::map_error)
    }

    /// Requests a status change on behalf of `by`.
    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        by: UserId,
    ) -> Result<Transition, OrderError> {
        self.inner
            .perform_action(id, OrderAction::SetStatus { status, by })
            .await
            .map_err(Self::map_error)
    }

    /// A customer's orders, newest first.
    #[instrument(skip(self))]
    pub async fn orders_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        self.newest_first(|order| order.user_id == user_id).await
    }

    /// A restaurant's orders, newest first.
    #[instrument(skip(self))]
    pub async fn orders_for_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Order>, OrderError> {
        self.newest_first(|order| order.restaurant_id == restaurant_id)
            .await
    }

    async fn newest_first(&self, keep: impl Fn(&Order) -> bool) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self.list().await?.into_iter().filter(|o| keep(o)).collect();
        // ids are allocated in creation order
        orders.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(orders)
    }
}
