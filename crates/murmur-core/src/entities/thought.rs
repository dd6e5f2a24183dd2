//! Thought entity - a short post owned by a user

use chrono::{DateTime, Utc};

use crate::entities::Reaction;
use crate::value_objects::DocumentId;
use uuid::Uuid;

/// Maximum length of a thought's text
pub const MAX_TEXT_LEN: usize = 280;

/// Thought entity
///
/// `created_at` is set once at creation and never updated. Reactions are
/// embedded: they live and die with their containing thought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thought {
    pub id: DocumentId,
    pub text: String,
    pub user_id: DocumentId,
    pub reactions: Vec<Reaction>,
    pub created_at: DateTime<Utc>,
}

impl Thought {
    /// Create a new Thought with no reactions
    pub fn new(id: DocumentId, text: String, user_id: DocumentId) -> Self {
        Self {
            id,
            text,
            user_id,
            reactions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Number of embedded reactions (derived, never stored)
    #[inline]
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    /// Look up an embedded reaction by its identifier
    pub fn reaction(&self, reaction_id: Uuid) -> Option<&Reaction> {
        self.reactions.iter().find(|r| r.id == reaction_id)
    }

    /// Check whether a reaction with this identifier is already embedded
    #[inline]
    pub fn has_reaction(&self, reaction_id: Uuid) -> bool {
        self.reaction(reaction_id).is_some()
    }
}
