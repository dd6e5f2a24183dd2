//! MongoDB connection bootstrap
//!
//! Connecting issues a `ping` so a dead store fails fast at startup instead
//! of on the first request.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use crate::models::UserDocument;

/// Document store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Application name reported to the server
    pub app_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: String::from("mongodb://127.0.0.1:27017"),
            database: String::from("murmur"),
            app_name: String::from("murmur"),
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            uri: std::env::var("MONGODB_URI").unwrap_or(defaults.uri),
            database: std::env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
            app_name: defaults.app_name,
        }
    }
}

/// Connect to the document store and verify the connection with a ping
pub async fn connect(config: &StoreConfig) -> Result<Database, mongodb::error::Error> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(config.app_name.clone());

    let client = Client::with_options(options)?;
    let db = client.database(&config.database);

    // Fail fast: the driver connects lazily, so force a round-trip here
    db.run_command(doc! { "ping": 1 }).await?;

    Ok(db)
}

/// Connect using the MONGODB_URI / MONGODB_DATABASE environment variables
pub async fn connect_from_env() -> Result<Database, mongodb::error::Error> {
    let config = StoreConfig::from_env();
    connect(&config).await
}

/// Check store connectivity with a ping
pub async fn ping(db: &Database) -> bool {
    db.run_command(doc! { "ping": 1 }).await.is_ok()
}

/// Create the unique indexes the data model relies on
///
/// Username and email uniqueness is enforced here, at the store layer;
/// repositories translate the resulting duplicate-key errors.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    let users = db.collection::<UserDocument>(UserDocument::COLLECTION);

    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    users
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
        )
        .await?;

    Ok(())
}
