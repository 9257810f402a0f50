use crate::clients::{ActorClient, MenuItemClient, OrderClient, RestaurantClient, UserClient};
use crate::menu_actor::MenuItemError;
use crate::model::RestaurantId;
use crate::config::Config;
use crate::order_actor::OrderContext;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for the marketplace.
///
/// Spawns the four resource actors and injects their contexts along an acyclic
/// graph:
///
/// ```text
/// order ──► user ──► menu item ──► restaurant
///   └──────────────────────────────────┘
/// ```
///
/// Because no actor holds a client of an actor that depends on it, dropping
/// the public clients lets every actor drain and stop.
///
/// # Example
///
/// ```ignore
/// let system = MarketplaceSystem::new(&Config::default());
/// let owner = system.users.create_user(owner_params).await?;
/// let restaurant = system.restaurants.create_restaurant(restaurant_params).await?;
/// // ...
/// system.shutdown().await?;
/// ```
pub struct MarketplaceSystem {
    pub users: UserClient,
    pub restaurants: RestaurantClient,
    pub menu: MenuItemClient,
    pub orders: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl MarketplaceSystem {
    /// Creates all actors and spawns them on the current Tokio runtime.
    pub fn new(config: &Config) -> Self {
        let capacity = config.actors.channel_capacity;

        let (restaurant_actor, restaurants) = crate::restaurant_actor::new(capacity);
        let (menu_actor, menu) = crate::menu_actor::new(capacity);
        let (user_actor, users) = crate::user_actor::new(capacity);
        let (order_actor, orders) = crate::order_actor::new(capacity);

        let order_context = OrderContext {
            users: users.clone(),
            restaurants: restaurants.clone(),
            accepted_payments: config.checkout.accepted_payment_methods.clone(),
        };

        let handles = vec![
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(menu_actor.run(restaurants.clone())),
            tokio::spawn(user_actor.run(menu.clone())),
            tokio::spawn(order_actor.run(order_context)),
        ];
        info!(capacity, "Marketplace started");

        Self {
            users,
            restaurants,
            menu,
            orders,
            handles,
        }
    }

    /// Deletes a restaurant together with its menu.
    ///
    /// The restaurant goes first so no new item can be added to it while the
    /// menu is swept. Returns how many menu items were removed.
    pub async fn delete_restaurant(&self, id: RestaurantId) -> Result<usize, MenuItemError> {
        self.restaurants.delete(id).await?;
        let removed = self.menu.delete_menu_for(id).await?;
        info!(restaurant_id = %id, removed, "Restaurant deleted");
        Ok(removed)
    }

    /// Drops the clients and waits for every actor to stop.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so drop
    /// them first or this never returns.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down marketplace...");

        drop(self.orders);
        drop(self.users);
        drop(self.menu);
        drop(self.restaurants);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Marketplace shutdown complete.");
        Ok(())
    }
}
