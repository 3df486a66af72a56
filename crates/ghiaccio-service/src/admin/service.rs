//! Read-only rollups over orders and freezer inventory.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use ghiaccio_core::result::AppResult;
use ghiaccio_core::types::pagination::{PageRequest, PageResponse};
use ghiaccio_database::repositories::freezer::FreezerRepository;
use ghiaccio_database::repositories::order::OrderRepository;
use ghiaccio_entity::freezer::{Freezer, IceBag};
use ghiaccio_entity::order::{Order, OrderListQuery, OrderStatus};

/// Order counts keyed by status. All statuses are always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCounts {
    /// Count per status wire label.
    pub by_status: BTreeMap<String, i64>,
}

/// Aggregate ice availability across all freezers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IceSummary {
    /// Kilograms of ice currently stored.
    pub total_kg: f64,
    /// Number of bags across all freezers.
    pub total_bags: i64,
    /// Total capacity in kilograms.
    pub total_capacity_kg: f64,
    /// Rounded percentage of capacity in use; 0 when capacity is 0.
    pub usage_percent: i64,
}

/// The admin dashboard summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Order rollup.
    pub order_counts: OrderCounts,
    /// Inventory rollup.
    pub ice: IceSummary,
}

/// A freezer together with the bags it holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezerInventory {
    /// The freezer.
    #[serde(flatten)]
    pub freezer: Freezer,
    /// Bags stored in it.
    pub bags: Vec<IceBag>,
}

/// Read-only aggregate views for administrators. Never mutates anything.
#[derive(Debug, Clone)]
pub struct AdminService {
    orders: Arc<OrderRepository>,
    freezers: Arc<FreezerRepository>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(orders: Arc<OrderRepository>, freezers: Arc<FreezerRepository>) -> Self {
        Self { orders, freezers }
    }

    /// Builds the dashboard summary: order counts by status plus ice
    /// availability.
    pub async fn summary(&self) -> AppResult<Summary> {
        let counts = self.orders.count_by_status().await?;
        let totals = self.freezers.ice_totals().await?;

        let mut by_status: BTreeMap<String, i64> = OrderStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), 0))
            .collect();
        for (status, count) in counts {
            by_status.insert(status.as_str().to_string(), count);
        }

        Ok(Summary {
            order_counts: OrderCounts { by_status },
            ice: IceSummary {
                total_kg: totals.total_kg,
                total_bags: totals.total_bags,
                total_capacity_kg: totals.total_capacity_kg,
                usage_percent: usage_percent(totals.total_kg, totals.total_capacity_kg),
            },
        })
    }

    /// Lists every order, paginated.
    pub async fn list_orders(
        &self,
        page: &PageRequest,
        query: &OrderListQuery,
    ) -> AppResult<PageResponse<Order>> {
        self.orders.find_all(page, query).await
    }

    /// Lists every freezer with its bags.
    pub async fn list_freezers(&self) -> AppResult<Vec<FreezerInventory>> {
        let freezers = self.freezers.find_all().await?;
        let mut inventory = Vec::with_capacity(freezers.len());
        for freezer in freezers {
            let bags = self.freezers.find_bags(freezer.id).await?;
            inventory.push(FreezerInventory { freezer, bags });
        }
        Ok(inventory)
    }
}

/// Percentage of capacity in use, rounded to the nearest integer.
fn usage_percent(total_kg: f64, total_capacity_kg: f64) -> i64 {
    if total_capacity_kg <= 0.0 {
        return 0;
    }
    (total_kg / total_capacity_kg * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_percent() {
        assert_eq!(usage_percent(190.0, 450.0), 42);
        assert_eq!(usage_percent(50.0, 100.0), 50);
        assert_eq!(usage_percent(1.0, 3.0), 33);
        assert_eq!(usage_percent(2.0, 3.0), 67);
    }

    #[test]
    fn test_usage_percent_zero_capacity() {
        assert_eq!(usage_percent(10.0, 0.0), 0);
    }
}
