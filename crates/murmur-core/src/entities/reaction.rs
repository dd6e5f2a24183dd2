//! Reaction entity - a reply embedded inside a thought

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum length of a reaction's body
pub const MAX_BODY_LEN: usize = 280;

/// Reaction entity
///
/// Reactions carry their own UUID, assigned before insertion and independent
/// of the store's document id scheme. Set semantics on a thought's reaction
/// list are keyed on this id, not on content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: Uuid,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction with a fresh identifier
    pub fn new(body: String, username: String) -> Self {
        Self::with_id(Uuid::new_v4(), body, username)
    }

    /// Create a Reaction with a caller-supplied identifier
    pub fn with_id(id: Uuid, body: String, username: String) -> Self {
        Self {
            id,
            body,
            username,
            created_at: Utc::now(),
        }
    }
}
