//! Order status enumeration and its transition rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an order.
///
/// Transitions are monotonic: once an order leaves `Pending` it never
/// returns there. Wire and database labels keep the Italian values shown
/// to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status")]
pub enum OrderStatus {
    /// Awaiting fulfillment; the only editable/cancellable status.
    #[sqlx(rename = "in attesa")]
    #[serde(rename = "in attesa")]
    Pending,
    /// Out for delivery.
    #[sqlx(rename = "in consegna")]
    #[serde(rename = "in consegna")]
    OutForDelivery,
    /// Delivered.
    #[sqlx(rename = "completato")]
    #[serde(rename = "completato")]
    Completed,
    /// Cancelled by the customer.
    #[sqlx(rename = "cancellato")]
    #[serde(rename = "cancellato")]
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::OutForDelivery,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Whether the order is still awaiting fulfillment.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Whether a transition to `next` is allowed.
    ///
    /// `Pending` may move to any later status; `OutForDelivery` only to
    /// `Completed`; `Completed` and `Cancelled` are terminal.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        match self {
            Self::Pending => next != Self::Pending,
            Self::OutForDelivery => next == Self::Completed,
            Self::Completed | Self::Cancelled => false,
        }
    }

    /// Return the wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "in attesa",
            Self::OutForDelivery => "in consegna",
            Self::Completed => "completato",
            Self::Cancelled => "cancellato",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ghiaccio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in attesa" => Ok(Self::Pending),
            "in consegna" => Ok(Self::OutForDelivery),
            "completato" => Ok(Self::Completed),
            "cancellato" => Ok(Self::Cancelled),
            _ => Err(ghiaccio_core::AppError::validation(format!(
                "Invalid order status: '{s}'"
            ))),
        }
    }
}
