//! Ghiaccio Server — order management for an ice-delivery business.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use ghiaccio_core::config::AppConfig;
use ghiaccio_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("GHIACCIO_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Ghiaccio v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = ghiaccio_database::connection::create_pool(&config.database).await?;
    ghiaccio_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(ghiaccio_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let order_repo = Arc::new(ghiaccio_database::repositories::order::OrderRepository::new(
        db_pool.clone(),
    ));
    let freezer_repo = Arc::new(
        ghiaccio_database::repositories::freezer::FreezerRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth system ──────────────────────────────────────
    let password_hasher = Arc::new(ghiaccio_auth::password::PasswordHasher::new(&config.auth)?);
    let session_store = Arc::new(ghiaccio_auth::session::MemorySessionStore::new());
    let session_manager = Arc::new(ghiaccio_auth::session::SessionManager::new(
        session_store,
        config.session.clone(),
    ));

    // ── Step 4: Services ─────────────────────────────────────────
    let auth_service = Arc::new(ghiaccio_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&session_manager),
    ));
    let order_service = Arc::new(ghiaccio_service::order::OrderService::new(
        Arc::clone(&order_repo),
        Arc::clone(&user_repo),
    ));
    let admin_service = Arc::new(ghiaccio_service::admin::AdminService::new(
        Arc::clone(&order_repo),
        Arc::clone(&freezer_repo),
    ));

    // ── Step 5: HTTP server ──────────────────────────────────────
    let app_state = ghiaccio_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        session_manager,
        user_repo,
        order_repo,
        freezer_repo,
        auth_service,
        order_service,
        admin_service,
    };

    let app = ghiaccio_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Ghiaccio server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Ghiaccio server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
