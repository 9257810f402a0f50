//! Pure pricing and validation steps of a checkout.
//!
//! None of these touch another actor. The order entity's `on_create` hook loads
//! the user and restaurant, runs these checks, and only then discards the cart.

use super::OrderError;
use crate::model::{Cart, OrderItem, PaymentMethod};
use rust_decimal::Decimal;

/// Amounts and captured lines for a priced cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutQuote {
    pub items: Vec<OrderItem>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

/// Prices `cart` with the restaurant's flat `delivery_fee`.
///
/// # Errors
/// `EmptyCart` when there are no lines, `AmountOverflow` when a line or the
/// total does not fit in a `Decimal`, `NonPositiveTotal` when
/// `subtotal + delivery_fee <= 0`.
pub fn price_cart(cart: &Cart, delivery_fee: Decimal) -> Result<CheckoutQuote, OrderError> {
    if cart.is_empty() {
        return Err(OrderError::EmptyCart);
    }
    let items: Vec<OrderItem> = cart
        .lines
        .iter()
        .map(|line| OrderItem {
            menu_item_id: line.menu_item_id,
            name: line.name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
        })
        .collect();
    let subtotal = items.iter().try_fold(Decimal::ZERO, |acc, item| {
        item.checked_line_total()
            .and_then(|line_total| acc.checked_add(line_total))
            .ok_or(OrderError::AmountOverflow)
    })?;
    let total = subtotal
        .checked_add(delivery_fee)
        .ok_or(OrderError::AmountOverflow)?;
    if total <= Decimal::ZERO {
        return Err(OrderError::NonPositiveTotal(total));
    }
    Ok(CheckoutQuote {
        items,
        subtotal,
        delivery_fee,
        total,
    })
}

pub fn ensure_accepted(method: PaymentMethod, accepted: &[PaymentMethod]) -> Result<(), OrderError> {
    if accepted.contains(&method) {
        Ok(())
    } else {
        Err(OrderError::InvalidPaymentMethod(method.to_string()))
    }
}

/// The requested address if it is not blank, else the profile address.
pub fn resolve_address(requested: &str, profile: Option<&str>) -> Result<String, OrderError> {
    let requested = requested.trim();
    if !requested.is_empty() {
        return Ok(requested.to_string());
    }
    profile
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(str::to_string)
        .ok_or(OrderError::MissingDeliveryAddress)
}
