//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::DocumentId;

/// Domain layer errors
///
/// Uniqueness violations are classified as validation errors: the store
/// enforces them on write, and the API surfaces them as 400s.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(DocumentId),

    #[error("Thought not found: {0}")]
    ThoughtNotFound(DocumentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Username already in use")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ThoughtNotFound(_) => "UNKNOWN_THOUGHT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Infrastructure
            Self::StoreError(_) => "STORE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::ThoughtNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::UsernameTaken
                | Self::EmailTaken
                | Self::ContentTooLong { .. }
        )
    }
}
