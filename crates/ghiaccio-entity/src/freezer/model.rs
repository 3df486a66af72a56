//! Freezer and ice bag inventory models.
//!
//! Inventory is read-only from the ordering flow; it only feeds the admin
//! summary and the freezer listing.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A freezer holding ice stock.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Freezer {
    /// Unique freezer identifier.
    pub id: Uuid,
    /// Display name ("Freezer A").
    pub name: String,
    /// Kilograms of ice currently stored.
    pub current_kg: f64,
    /// Maximum capacity in kilograms.
    pub capacity_kg: f64,
}

/// A single bag of ice stored in a freezer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IceBag {
    /// Unique bag identifier.
    pub id: Uuid,
    /// The freezer this bag sits in.
    pub freezer_id: Uuid,
    /// Bag weight in kilograms.
    pub weight_kg: f64,
}
