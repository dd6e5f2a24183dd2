//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use murmur_common::{AppConfig, AppError};
use murmur_db::{connect, ensure_indexes, MongoThoughtRepository, MongoUserRepository, StoreConfig};
use murmur_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// An unreachable store fails this function; the caller treats that as
/// fatal rather than serving traffic without a store connection.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to MongoDB...");
    let store_config = StoreConfig {
        uri: config.database.uri.clone(),
        database: config.database.database.clone(),
        app_name: config.app.name.clone(),
    };
    let db = connect(&store_config)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;
    info!("MongoDB connection established");

    ensure_indexes(&db)
        .await
        .map_err(|e| AppError::Store(e.to_string()))?;

    // Create repositories
    let user_repo = Arc::new(MongoUserRepository::new(&db));
    let thought_repo = Arc::new(MongoThoughtRepository::new(&db));

    // Build service context
    let service_context = ServiceContext::new(user_repo, thought_repo);

    Ok(AppState::new(service_context, config, db))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
