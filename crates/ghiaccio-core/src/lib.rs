//! # ghiaccio-core
//!
//! Core crate for the Ghiaccio order-management server. Contains the
//! configuration schemas, shared list/response types, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Ghiaccio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
