//! Sort and filter parameters for order list views.

use serde::{Deserialize, Serialize};

use ghiaccio_core::types::SortDirection;

use super::ice_type::IceType;
use super::status::OrderStatus;

/// Columns an order list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSortKey {
    /// When the order was submitted.
    RequestedAt,
    /// Ordered quantity.
    Quantity,
    /// Kind of ice.
    IceType,
    /// Delivery address.
    Address,
    /// Lifecycle status.
    Status,
    /// How soon the delivery is due.
    TimeToDelivery,
}

impl Default for OrderSortKey {
    fn default() -> Self {
        Self::RequestedAt
    }
}

impl OrderSortKey {
    /// The SQL expression this key sorts on. Keys are a fixed whitelist so
    /// the expression can be interpolated into ORDER BY safely.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::RequestedAt => "requested_at",
            Self::Quantity => "quantity_kg",
            Self::IceType => "ice_type",
            Self::Address => "delivery_address",
            Self::Status => "status",
            Self::TimeToDelivery => "(delivery_date + delivery_hour)",
        }
    }

    /// Direction used when the caller does not specify one: request
    /// recency lists newest first, everything else ascending.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::RequestedAt => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }
}

/// Filter and sort parameters for order listings.
///
/// Cancelled orders are hidden unless `include_cancelled` is set or the
/// status filter asks for them explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderListQuery {
    /// Sort key.
    #[serde(default)]
    pub sort: OrderSortKey,
    /// Sort direction (defaults per sort key).
    pub direction: Option<SortDirection>,
    /// Only orders with this status.
    pub status: Option<OrderStatus>,
    /// Only orders of this ice type.
    pub ice_type: Option<IceType>,
    /// Show cancelled orders in unfiltered listings.
    #[serde(default)]
    pub include_cancelled: bool,
}

impl OrderListQuery {
    /// The effective sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction.unwrap_or_else(|| self.sort.default_direction())
    }

    /// Whether cancelled orders should appear in the result.
    pub fn shows_cancelled(&self) -> bool {
        self.include_cancelled || self.status == Some(OrderStatus::Cancelled)
    }
}
