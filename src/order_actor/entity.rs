//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creating an order *is* the checkout: `from_create_params` builds a draft
//! from the [`CheckoutRequest`], and `on_create` prices the user's cart,
//! validates payment and address, then discards the cart. The draft is stored
//! only if every step succeeds.

use super::checkout::{ensure_accepted, price_cart, resolve_address};
use super::{OrderAction, OrderContext, OrderError};
use crate::clients::ActorClient;
use crate::framework::ActorEntity;
use crate::model::{CheckoutRequest, Order, OrderId, OrderStatus, PaymentMethod, Transition, UserId};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

impl Order {
    /// Customers may cancel their own orders; admins may cancel any.
    async fn authorize_cancel(&self, by: UserId, ctx: &OrderContext) -> Result<(), OrderError> {
        if by == self.user_id || is_admin(by, ctx).await? {
            return Ok(());
        }
        Err(OrderError::Forbidden(format!("{by} cannot cancel {}", self.id)))
    }

    /// Only the restaurant's owner or an admin moves an order along.
    async fn authorize_fulfilment(&self, by: UserId, ctx: &OrderContext) -> Result<(), OrderError> {
        let owns_restaurant = ctx
            .restaurants
            .get(self.restaurant_id)
            .await?
            .is_some_and(|restaurant| restaurant.is_owned_by(by));
        if owns_restaurant || is_admin(by, ctx).await? {
            return Ok(());
        }
        Err(OrderError::Forbidden(format!("{by} cannot update {}", self.id)))
    }
}

async fn is_admin(user_id: UserId, ctx: &OrderContext) -> Result<bool, OrderError> {
    match ctx.users.get(user_id).await? {
        Some(user) => Ok(user.is_admin),
        None => Err(OrderError::InvalidUser(user_id)),
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = CheckoutRequest;
    type Update = OrderStatus;
    type Action = OrderAction;
    type ActionResult = Transition;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: CheckoutRequest) -> Result<Self, Self::Error> {
        let payment_method: PaymentMethod = params
            .payment_method
            .parse()
            .map_err(OrderError::InvalidPaymentMethod)?;
        let mut order = Order::draft(id, params.user_id, payment_method);
        order.delivery_address = params.delivery_address.unwrap_or_default();
        Ok(order)
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let user = ctx
            .users
            .get(self.user_id)
            .await?
            .ok_or(OrderError::InvalidUser(self.user_id))?;
        let cart = user
            .cart
            .clone()
            .filter(|cart| !cart.is_empty())
            .ok_or(OrderError::EmptyCart)?;
        let restaurant = ctx
            .restaurants
            .get(cart.restaurant_id)
            .await?
            .ok_or(OrderError::InvalidRestaurant(cart.restaurant_id))?;

        let quote = price_cart(&cart, restaurant.delivery_fee)?;
        ensure_accepted(self.payment_method, &ctx.accepted_payments)?;
        let address = resolve_address(&self.delivery_address, user.delivery_address())?;
        debug!(order_id = %self.id, total = %quote.total, "Checkout validated");

        // Last step that can fail; nothing has been written before it.
        ctx.users.clear_cart(self.user_id, cart.revision).await?;

        self.restaurant_id = restaurant.id;
        self.status = OrderStatus::Pending;
        self.items = quote.items;
        self.subtotal = quote.subtotal;
        self.delivery_fee = quote.delivery_fee;
        self.total = quote.total;
        self.delivery_address = address;
        self.created_at = Utc::now();
        info!(order_id = %self.id, user_id = %self.user_id, restaurant_id = %self.restaurant_id, total = %self.total, "Order placed");
        Ok(())
    }

    /// Internal status change, bypassing authorisation but not the state machine.
    async fn on_update(&mut self, status: OrderStatus, _ctx: &OrderContext) -> Result<(), Self::Error> {
        self.apply_status(status)?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Transition, Self::Error> {
        let (requested, by) = match action {
            OrderAction::Cancel { by } => {
                self.authorize_cancel(by, ctx).await?;
                (OrderStatus::Cancelled, by)
            }
            OrderAction::SetStatus { status, by } => {
                self.authorize_fulfilment(by, ctx).await?;
                (status, by)
            }
        };
        let from = self.status;
        let transition = self.apply_status(requested)?;
        info!(order_id = %self.id, %by, %from, to = %requested, ?transition, "Status request accepted");
        Ok(transition)
    }
}
