//! [`ActorEntity`] implementation for [`Restaurant`].
//!
//! Restaurants have no dependencies (`Context = ()`) and no custom actions.

use super::{RestaurantAction, RestaurantError};
use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use async_trait::async_trait;
use rust_decimal::Decimal;

fn required(field: &str, value: &str) -> Result<String, RestaurantError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RestaurantError::ValidationError(format!("{field} is required")));
    }
    Ok(value.to_string())
}

fn check_fee(fee: Decimal) -> Result<Decimal, RestaurantError> {
    if fee < Decimal::ZERO {
        return Err(RestaurantError::NegativeDeliveryFee(fee));
    }
    Ok(fee)
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = ();
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            owner_id: params.owner_id,
            name: required("name", &params.name)?,
            address: required("address", &params.address)?,
            description: params.description,
            category: params.category,
            phone: params.phone,
            delivery_fee: check_fee(params.delivery_fee)?,
            delivery_time_minutes: params.delivery_time_minutes,
            rating: 0.0,
        })
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = required("name", &name)?;
        }
        if let Some(address) = update.address {
            self.address = required("address", &address)?;
        }
        if let Some(fee) = update.delivery_fee {
            self.delivery_fee = check_fee(fee)?;
        }
        if update.description.is_some() {
            self.description = update.description;
        }
        if update.category.is_some() {
            self.category = update.category;
        }
        if update.phone.is_some() {
            self.phone = update.phone;
        }
        if update.delivery_time_minutes.is_some() {
            self.delivery_time_minutes = update.delivery_time_minutes;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RestaurantAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn params() -> RestaurantCreate {
        RestaurantCreate {
            owner_id: UserId(1),
            name: " Cantina ".into(),
            address: "Rua A, 10".into(),
            description: None,
            category: Some("mexican".into()),
            phone: None,
            delivery_fee: Decimal::new(599, 2),
            delivery_time_minutes: Some(30),
        }
    }

    #[test]
    fn test_create_trims_and_keeps_fee() {
        let restaurant = Restaurant::from_create_params(RestaurantId(1), params()).unwrap();
        assert_eq!(restaurant.name, "Cantina");
        assert_eq!(restaurant.delivery_fee, Decimal::new(599, 2));
        assert!(restaurant.is_owned_by(UserId(1)));
    }

    #[test]
    fn test_create_rejects_negative_fee_and_blank_name() {
        let mut negative = params();
        negative.delivery_fee = Decimal::new(-1, 0);
        assert_eq!(
            Restaurant::from_create_params(RestaurantId(1), negative),
            Err(RestaurantError::NegativeDeliveryFee(Decimal::new(-1, 0)))
        );

        let mut blank = params();
        blank.name = "  ".into();
        assert!(matches!(
            Restaurant::from_create_params(RestaurantId(1), blank),
            Err(RestaurantError::ValidationError(_))
        ));
    }
}
