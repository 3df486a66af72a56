//! Admin read-only views.

pub mod service;

pub use service::{AdminService, FreezerInventory, IceSummary, OrderCounts, Summary};
