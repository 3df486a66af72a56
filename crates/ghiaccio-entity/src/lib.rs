//! # ghiaccio-entity
//!
//! Domain entity models for Ghiaccio. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow` alongside `Serialize`/`Deserialize`.

pub mod freezer;
pub mod order;
pub mod session;
pub mod user;
