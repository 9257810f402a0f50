//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter without
//! module paths; actors log an `entity_type` field instead.
//!
//! `RUST_LOG` wins when set. Otherwise the filter from the `[logging]` config
//! section applies.
//!
//! ```bash
//! RUST_LOG=debug cargo run -- --config marketplace.toml
//! ```
//!
//! At `info` a checkout reads roughly:
//!
//! ```text
//! INFO Sending checkout to actor
//! INFO Action ok entity_type="User" id=user_2
//! INFO Order placed order_id=order_1 user_id=user_2 restaurant_id=restaurant_1 total=57.90
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! At `debug` the actors also log every request payload (`?params`, `?action`).

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Fails if one is already installed.
pub fn setup_tracing(default_filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
}
