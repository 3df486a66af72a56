//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use ghiaccio_auth::session::SessionManager;
use ghiaccio_core::config::AppConfig;
use ghiaccio_database::repositories::freezer::FreezerRepository;
use ghiaccio_database::repositories::order::OrderRepository;
use ghiaccio_database::repositories::user::UserRepository;
use ghiaccio_service::admin::AdminService;
use ghiaccio_service::auth::AuthService;
use ghiaccio_service::order::OrderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,

    /// Session lifecycle manager.
    pub session_manager: Arc<SessionManager>,

    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Order repository.
    pub order_repo: Arc<OrderRepository>,
    /// Freezer repository.
    pub freezer_repo: Arc<FreezerRepository>,

    /// Authentication service.
    pub auth_service: Arc<AuthService>,
    /// Order lifecycle service.
    pub order_service: Arc<OrderService>,
    /// Admin aggregate service.
    pub admin_service: Arc<AdminService>,
}
