//! Starting, wiring and stopping the actors.

pub mod marketplace;
pub mod tracing;

pub use marketplace::*;
pub use self::tracing::setup_tracing;
