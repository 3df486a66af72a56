//! # ghiaccio-api
//!
//! HTTP API layer for Ghiaccio built on Axum.
//!
//! Provides the REST endpoints, cookie-session extractors, DTOs with
//! their validation schemas, and the router.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
