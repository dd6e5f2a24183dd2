//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Identifier fields use `DocumentId`, so a malformed id in a
//! body is rejected during deserialization.

use murmur_core::DocumentId;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// User Requests
// ============================================================================

/// Create user request (signup)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Update user request; omitted fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

// ============================================================================
// Thought Requests
// ============================================================================

/// Create thought request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThoughtRequest {
    #[validate(length(min = 1, max = 280, message = "Thought text must be 1-280 characters"))]
    pub text: String,

    /// Identifier of the owning user
    pub user_id: DocumentId,
}

/// Update thought request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateThoughtRequest {
    #[validate(length(min = 1, max = 280, message = "Thought text must be 1-280 characters"))]
    pub text: Option<String>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Add reaction request
///
/// The identifier is optional: callers may supply their own reaction id (the
/// key for the add-if-absent semantics), otherwise one is assigned before
/// insertion.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReactionRequest {
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 280, message = "Reaction body must be 1-280 characters"))]
    pub body: String,

    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,
}
