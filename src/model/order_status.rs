//! # Order Status State Machine
//!
//! ```text
//! pending ──► preparing ──► delivering ──► delivered
//!    │
//!    └──► cancelled
//! ```
//!
//! Orders move forward exactly one step at a time. `cancelled` is only reachable
//! from `pending`. `delivered` and `cancelled` are terminal. Validation is a pure
//! function of (current, requested); a rejected request leaves the order as it was.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Delivering,
    Delivered,
    Cancelled,
}

/// Outcome of an accepted status request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The order moved to the requested status.
    Advanced,
    /// The order was already in the requested status.
    Unchanged,
}

/// Reasons a status request is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatusError {
    #[error("only pending orders can be cancelled (order is {0})")]
    NotCancellable(OrderStatus),

    #[error("status transition {from} -> {to} is not allowed")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("unknown order status: {0}")]
    UnknownStatus(String),
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Delivering,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// The next step of the fulfilment sequence, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Delivering),
            OrderStatus::Delivering => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Checks whether an order in `self` may move to `requested`.
    pub fn validate_transition(self, requested: OrderStatus) -> Result<Transition, StatusError> {
        if requested == self {
            return Ok(Transition::Unchanged);
        }
        if requested == OrderStatus::Cancelled {
            return match self {
                OrderStatus::Pending => Ok(Transition::Advanced),
                other => Err(StatusError::NotCancellable(other)),
            };
        }
        if self.next() == Some(requested) {
            Ok(Transition::Advanced)
        } else {
            Err(StatusError::InvalidTransition {
                from: self,
                to: requested,
            })
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatusError::UnknownStatus(s.to_string()))
    }
}
