//! Application configuration structs
//!
//! Loads configuration from environment variables. Every variable has a
//! documented fallback default, so a bare `AppConfig::from_env()` works on a
//! developer machine with a local store:
//!
//! | Variable               | Default                      |
//! |------------------------|------------------------------|
//! | `APP_NAME`             | `murmur`                     |
//! | `APP_ENV`              | `development`                |
//! | `HOST`                 | `127.0.0.1`                  |
//! | `PORT`                 | `3001`                       |
//! | `MONGODB_URI`          | `mongodb://127.0.0.1:27017`  |
//! | `MONGODB_DATABASE`     | `murmur`                     |
//! | `CORS_ALLOWED_ORIGINS` | (empty)                      |

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: StoreSettings,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_uri")]
    pub uri: String,
    #[serde(default = "default_store_database")]
    pub database: String,
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "murmur".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_store_uri() -> String {
    "mongodb://127.0.0.1:27017".to_string()
}

fn default_store_database() -> String {
    "murmur".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error when a set variable fails to parse; unset variables
    /// fall back to their documented defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| default_host()),
                port: match env::var("PORT") {
                    Ok(raw) => raw
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("PORT", raw))?,
                    Err(_) => default_port(),
                },
            },
            database: StoreSettings {
                uri: env::var("MONGODB_URI").unwrap_or_else(|_| default_store_uri()),
                database: env::var("MONGODB_DATABASE")
                    .unwrap_or_else(|_| default_store_database()),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "murmur");
        assert_eq!(default_host(), "127.0.0.1");
        assert_eq!(default_port(), 3001);
        assert_eq!(default_store_uri(), "mongodb://127.0.0.1:27017");
        assert_eq!(default_store_database(), "murmur");
    }
}
