//! Freezer inventory repository implementation.
//!
//! Read-only from the ordering flow; only the admin views consume it.

use sqlx::PgPool;
use uuid::Uuid;

use ghiaccio_core::error::{AppError, ErrorKind};
use ghiaccio_core::result::AppResult;
use ghiaccio_entity::freezer::{Freezer, IceBag};

/// Aggregate ice totals across all freezers.
#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub struct IceTotals {
    /// Kilograms of ice currently stored.
    pub total_kg: f64,
    /// Total capacity in kilograms.
    pub total_capacity_kg: f64,
    /// Number of bags across all freezers.
    pub total_bags: i64,
}

/// Repository for freezer and ice bag queries.
#[derive(Debug, Clone)]
pub struct FreezerRepository {
    pool: PgPool,
}

impl FreezerRepository {
    /// Create a new freezer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all freezers.
    pub async fn find_all(&self) -> AppResult<Vec<Freezer>> {
        sqlx::query_as::<_, Freezer>("SELECT * FROM freezers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list freezers", e))
    }

    /// List the bags stored in one freezer.
    pub async fn find_bags(&self, freezer_id: Uuid) -> AppResult<Vec<IceBag>> {
        sqlx::query_as::<_, IceBag>("SELECT * FROM ice_bags WHERE freezer_id = $1")
            .bind(freezer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list ice bags", e))
    }

    /// Aggregate current kilograms, capacity, and bag counts over the
    /// whole inventory.
    pub async fn ice_totals(&self) -> AppResult<IceTotals> {
        sqlx::query_as::<_, IceTotals>(
            "SELECT COALESCE(SUM(f.current_kg), 0)::DOUBLE PRECISION AS total_kg, \
                    COALESCE(SUM(f.capacity_kg), 0)::DOUBLE PRECISION AS total_capacity_kg, \
                    (SELECT COUNT(*) FROM ice_bags) AS total_bags \
             FROM freezers f",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to aggregate ice totals", e)
        })
    }
}
