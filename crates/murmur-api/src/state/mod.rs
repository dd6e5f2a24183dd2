//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the store handle (for readiness checks), and configuration.

use std::sync::Arc;

use murmur_common::AppConfig;
use murmur_db::Database;
use murmur_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing the repositories
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Store handle, used only by the readiness probe
    store: Database,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig, store: Database) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            store,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the store handle
    pub fn store(&self) -> &Database {
        &self.store
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("store", &"Database")
            .finish()
    }
}
