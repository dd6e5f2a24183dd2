//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Document ids
//! are serialized as hex strings.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// ============================================================================
// Common Response Types
// ============================================================================

/// Confirmation body for delete endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// User with unresolved references (create/update/friend endpoints)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Thought ids in insertion order
    pub thoughts: Vec<String>,
    /// Friend ids (directed edges)
    pub friends: Vec<String>,
    pub friend_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User with thought and friend references resolved to full documents
/// (single-user and list reads)
///
/// Friends are rendered with their own references unresolved; resolution is
/// one level deep.
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub thoughts: Vec<ThoughtResponse>,
    pub friends: Vec<UserResponse>,
    pub friend_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Thought Responses
// ============================================================================

/// Thought with embedded reactions
#[derive(Debug, Clone, Serialize)]
pub struct ThoughtResponse {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub reactions: Vec<ReactionResponse>,
    pub reaction_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Embedded reaction
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: Uuid,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: bool,
}

impl ReadinessResponse {
    pub fn new(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "unavailable" },
            checks: HealthChecks { database },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.checks.database
    }
}
