//! # Food Delivery Marketplace
//!
//! Customers browse restaurants and menus, fill a cart, check out and track
//! their orders; restaurant owners manage menus and move orders through
//! fulfilment.
//!
//! Every resource lives in its own Tokio task as a [`ResourceActor`](framework::ResourceActor).
//! Nothing is shared: actors talk through typed clients, and each one handles
//! its messages one at a time, so no locks guard the stores.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` / `ResourceClient<T>` pair, the
//! [`ActorEntity`](framework::ActorEntity) trait, and [`framework::mock`] for
//! testing clients and actors in isolation.
//!
//! ### 2. The Records ([`model`])
//! Users, restaurants, menu items, carts and orders, plus the
//! [order status state machine](model::OrderStatus).
//!
//! ### 3. The Actors
//! - [`restaurant_actor`]: listings and delivery fees.
//! - [`menu_actor`]: dishes and prices.
//! - [`user_actor`]: accounts and their carts.
//! - [`order_actor`]: checkout and status tracking.
//!
//! ### 4. The Interface ([`clients`])
//! Domain clients wrapping the generic client; the only API callers use.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`MarketplaceSystem`](lifecycle::MarketplaceSystem) spins the actors up from
//! a [`Config`](config::Config) and shuts them down.
//!
//! ## Checkout
//!
//! ```text
//! OrderClient::checkout
//!   └─► Order::on_create
//!         ├─ UserClient::get          user + cart snapshot
//!         ├─ RestaurantClient::get    delivery fee
//!         ├─ price, payment, address  (pure, order_actor::checkout)
//!         └─ UserClient::clear_cart   fails if the cart moved
//! ```
//!
//! Any failure leaves the cart untouched and stores no order.

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod restaurant_actor;
pub mod user_actor;
