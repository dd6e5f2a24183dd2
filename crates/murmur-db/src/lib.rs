//! # murmur-db
//!
//! Persistence layer implementing the repository traits with MongoDB.
//!
//! ## Overview
//!
//! This crate provides MongoDB implementations for the repository traits
//! defined in `murmur-core`. It handles:
//!
//! - Client bootstrap (connect, ping, index creation)
//! - Document models with serde derives
//! - Entity ↔ document mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use murmur_core::UserRepository;
//! use murmur_db::{connect, StoreConfig, MongoUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StoreConfig::from_env();
//!     let db = connect(&config).await?;
//!     let user_repo = MongoUserRepository::new(&db);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod mappers;
pub mod models;
pub mod repositories;

// Re-export commonly used types
pub use client::{connect, connect_from_env, ensure_indexes, ping, StoreConfig};
pub use repositories::{MongoThoughtRepository, MongoUserRepository};

// Re-export the database handle type for convenience
pub use mongodb::Database;
