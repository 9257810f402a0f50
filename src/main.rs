//! Demo binary: seeds a restaurant and a customer, checks out a cart and walks
//! the order through fulfilment.

use clap::Parser;
use food_delivery::config::Config;
use food_delivery::lifecycle::{setup_tracing, MarketplaceSystem};
use food_delivery::model::{
    CheckoutRequest, MenuItemCreate, OrderStatus, RestaurantCreate, UserCreate,
};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::{error, info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "food_delivery", about = "Food delivery marketplace demo")]
struct Args {
    /// TOML configuration file; defaults apply when omitted.
    #[arg(short, long, env = "FOOD_DELIVERY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path).map_err(|e| e.to_string())?,
        None => Config::default(),
    };
    setup_tracing(&config.logging.filter).map_err(|e| e.to_string())?;

    info!(config = ?args.config, "Starting marketplace");
    let system = MarketplaceSystem::new(&config);

    let result = run_demo(&system).await;
    if let Err(e) = &result {
        error!(error = %e, "Demo failed");
    }

    system.shutdown().await?;
    result
}

async fn run_demo(system: &MarketplaceSystem) -> Result<(), String> {
    let span = tracing::info_span!("seeding");
    let (owner, restaurant, dishes) = async {
        let owner = system
            .users
            .create_user(UserCreate {
                name: "Marta".into(),
                email: "marta@cantina.example".into(),
                is_restaurant: true,
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())?;
        let restaurant = system
            .restaurants
            .create_restaurant(RestaurantCreate {
                owner_id: owner,
                name: "Cantina da Marta".into(),
                address: "Rua das Flores, 12".into(),
                description: Some("Home cooking".into()),
                category: Some("brazilian".into()),
                phone: None,
                delivery_fee: Decimal::new(599, 2),
                delivery_time_minutes: Some(40),
            })
            .await
            .map_err(|e| e.to_string())?;

        let mut dishes = Vec::new();
        for (name, cents) in [("Feijoada", 4290), ("Pão de queijo", 1250)] {
            let id = system
                .menu
                .create_menu_item(MenuItemCreate {
                    restaurant_id: restaurant,
                    name: name.into(),
                    description: None,
                    category: None,
                    price: Decimal::new(cents, 2),
                })
                .await
                .map_err(|e| e.to_string())?;
            dishes.push(id);
        }
        Ok::<_, String>((owner, restaurant, dishes))
    }
    .instrument(span)
    .await?;
    info!(%owner, %restaurant, dishes = dishes.len(), "Seeded");

    let customer = system
        .users
        .create_user(UserCreate {
            name: "João".into(),
            email: "joao@example.com".into(),
            address: Some("Av. Paulista, 1000".into()),
            ..Default::default()
        })
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("checkout", %customer);
    let order_id = async {
        system
            .users
            .add_to_cart(customer, dishes[0], 1)
            .await
            .map_err(|e| e.to_string())?;
        let (cart, _) = system
            .users
            .add_to_cart(customer, dishes[1], 2)
            .await
            .map_err(|e| e.to_string())?;
        info!(items = cart.item_count(), subtotal = %cart.subtotal(), "Cart ready");

        system
            .orders
            .checkout(CheckoutRequest {
                user_id: customer,
                delivery_address: None,
                payment_method: "pix".into(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("fulfilment", %order_id);
    async {
        for status in [OrderStatus::Preparing, OrderStatus::Delivering, OrderStatus::Delivered] {
            system
                .orders
                .update_status(order_id, status, owner)
                .await
                .map_err(|e| e.to_string())?;
            info!(%status, "Order advanced");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    for order in system
        .orders
        .orders_for_user(customer)
        .await
        .map_err(|e| e.to_string())?
    {
        info!(
            order_id = %order.id,
            status = %order.status,
            subtotal = %order.subtotal,
            delivery_fee = %order.delivery_fee,
            total = %order.total,
            "Order summary"
        );
    }
    Ok(())
}
