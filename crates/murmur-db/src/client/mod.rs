//! MongoDB client bootstrap

mod mongo;

pub use mongo::{connect, connect_from_env, ensure_indexes, ping, StoreConfig};
