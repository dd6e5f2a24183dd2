//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Usernames and emails
//! carry a process-unique suffix so runs against a shared test database
//! never collide.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()
}

// ============================================================================
// Request bodies
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserBody {
    pub username: String,
    pub email: String,
}

impl CreateUserBody {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user_{suffix}"),
            email: format!("{suffix}@example.com"),
        }
    }
}

/// Update user request
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Create thought request
#[derive(Debug, Serialize)]
pub struct CreateThoughtBody {
    pub text: String,
    pub user_id: String,
}

impl CreateThoughtBody {
    pub fn new(user_id: &str, text: &str) -> Self {
        Self {
            text: text.to_string(),
            user_id: user_id.to_string(),
        }
    }
}

/// Update thought request
#[derive(Debug, Serialize)]
pub struct UpdateThoughtBody {
    pub text: String,
}

/// Add reaction request
#[derive(Debug, Clone, Serialize)]
pub struct ReactionBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub body: String,
    pub username: String,
}

impl ReactionBody {
    pub fn new(username: &str, body: &str) -> Self {
        Self {
            id: None,
            body: body.to_string(),
            username: username.to_string(),
        }
    }

    /// Pin the reaction identity so re-sends carry the same id
    pub fn with_id(mut self) -> Self {
        self.id = Some(Uuid::new_v4().to_string());
        self
    }
}

// ============================================================================
// Response bodies
// ============================================================================

/// User response (reference fields are ids or embedded documents depending
/// on the endpoint, so they are kept as raw values)
#[derive(Debug, Deserialize)]
pub struct UserJson {
    pub id: String,
    pub username: String,
    pub email: String,
    pub thoughts: Vec<serde_json::Value>,
    pub friends: Vec<serde_json::Value>,
    pub friend_count: usize,
}

/// Thought response
#[derive(Debug, Deserialize)]
pub struct ThoughtJson {
    pub id: String,
    pub text: String,
    pub user_id: String,
    pub reactions: Vec<ReactionJson>,
    pub reaction_count: usize,
}

/// Embedded reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionJson {
    pub id: String,
    pub body: String,
    pub username: String,
}

/// Delete confirmation response
#[derive(Debug, Deserialize)]
pub struct MessageJson {
    pub message: String,
}
