//! Business logic services
//!
//! Services orchestrate repository calls, including the multi-step
//! relationship maintenance between users and thoughts.

pub mod context;
pub mod error;
pub mod thought;
pub mod user;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use thought::ThoughtService;
pub use user::UserService;
