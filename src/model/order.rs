use crate::model::{MenuItemId, OrderStatus, RestaurantId, StatusError, Transition, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

resource_id!(
    /// Type-safe identifier for orders.
    OrderId,
    "order"
);

/// Payment methods the marketplace knows how to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Pix,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Pix,
        PaymentMethod::Cash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::DebitCard => "debit_card",
            PaymentMethod::Pix => "pix",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| s.to_string())
    }
}

/// A line of a placed order. Never changes after checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub name: String,
    /// At least 1.
    pub quantity: u32,
    /// Price at checkout time, independent of later menu edits.
    pub unit_price: Decimal,
}

impl OrderItem {
    /// `None` if quantity × unit price does not fit in a `Decimal`.
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// A placed order.
///
/// # Actor Framework
/// Created by the order actor from a [`CheckoutRequest`]; the checkout itself
/// runs in the actor's `on_create` hook. Afterwards only `status` changes, and
/// only through [`Order::apply_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    /// `subtotal + delivery_fee`, fixed at checkout.
    pub total: Decimal,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// An order that has not been through checkout yet.
    ///
    /// Restaurant, items, amounts and address are filled in by checkout; the
    /// draft is never stored as is.
    pub fn draft(id: OrderId, user_id: UserId, payment_method: PaymentMethod) -> Self {
        Self {
            id,
            user_id,
            restaurant_id: RestaurantId::default(),
            status: OrderStatus::Pending,
            items: Vec::new(),
            subtotal: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            total: Decimal::ZERO,
            delivery_address: String::new(),
            payment_method,
            created_at: Utc::now(),
        }
    }

    /// Moves the order to `requested` if the state machine allows it.
    pub fn apply_status(&mut self, requested: OrderStatus) -> Result<Transition, StatusError> {
        let transition = self.status.validate_transition(requested)?;
        self.status = requested;
        Ok(transition)
    }

    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }
}

/// Payload for turning a user's cart into an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub user_id: UserId,
    /// Falls back to the address on the user's profile.
    pub delivery_address: Option<String>,
    /// Raw method name as submitted, e.g. `"pix"`.
    pub payment_method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_names() {
        assert_eq!("pix".parse::<PaymentMethod>(), Ok(PaymentMethod::Pix));
        assert_eq!(
            " Credit_Card".parse::<PaymentMethod>(),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!("bitcoin".parse::<PaymentMethod>(), Err("bitcoin".to_string()));
    }

    #[test]
    fn test_rejected_status_leaves_order_unchanged() {
        let mut order = Order::draft(OrderId(1), UserId(1), PaymentMethod::Cash);

        assert!(order.apply_status(OrderStatus::Delivered).is_err());
        assert_eq!(order.status, OrderStatus::Pending);

        assert_eq!(order.apply_status(OrderStatus::Preparing), Ok(Transition::Advanced));
        assert!(order.apply_status(OrderStatus::Cancelled).is_err());
        assert_eq!(order.status, OrderStatus::Preparing);
    }
}
