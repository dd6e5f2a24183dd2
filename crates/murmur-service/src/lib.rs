//! # murmur-service
//!
//! Application layer containing business logic, services, and DTOs.
//! The multi-step relationship maintenance (cascade delete, reference
//! push/pull, reaction set semantics) is orchestrated here; repositories
//! stay single-query.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CreateReactionRequest, CreateThoughtRequest, CreateUserRequest, HealthChecks, HealthResponse,
    MessageResponse, ReactionResponse, ReadinessResponse, ThoughtResponse, UpdateThoughtRequest,
    UpdateUserRequest, UserProfileResponse, UserResponse,
};
pub use services::{ServiceContext, ServiceError, ServiceResult, ThoughtService, UserService};
