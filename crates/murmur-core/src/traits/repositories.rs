//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every operation is a single store query;
//! multi-step orchestration (cascade delete, reference push/pull) belongs
//! to the service layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{Reaction, Thought, User};
use crate::error::DomainError;
use crate::value_objects::DocumentId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// Partial update of a user; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// True when the patch touches nothing
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, unfiltered
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Find user by id
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<User>>;

    /// Find users whose id appears in `ids`; missing ids are skipped
    async fn find_by_ids(&self, ids: &[DocumentId]) -> RepoResult<Vec<User>>;

    /// Create a new user; the store enforces username/email uniqueness
    async fn create(&self, data: NewUser) -> RepoResult<User>;

    /// Apply a partial update, re-running uniqueness checks on touched fields
    async fn update(&self, id: &DocumentId, patch: UserPatch) -> RepoResult<Option<User>>;

    /// Delete a user, returning the deleted document so the caller can cascade
    async fn delete(&self, id: &DocumentId) -> RepoResult<Option<User>>;

    /// Add `friend_id` to the user's friend set; no-op if already present
    async fn add_friend(
        &self,
        user_id: &DocumentId,
        friend_id: &DocumentId,
    ) -> RepoResult<Option<User>>;

    /// Remove `friend_id` from the user's friend set; no-op if absent
    async fn remove_friend(
        &self,
        user_id: &DocumentId,
        friend_id: &DocumentId,
    ) -> RepoResult<Option<User>>;

    /// Append a thought reference to the user's list
    async fn push_thought(
        &self,
        user_id: &DocumentId,
        thought_id: &DocumentId,
    ) -> RepoResult<Option<User>>;

    /// Remove a thought reference from whichever user's list contains it,
    /// found by scanning rather than a stored back-reference. Returns the
    /// updated owner, or `None` when no user references the thought.
    async fn pull_thought(&self, thought_id: &DocumentId) -> RepoResult<Option<User>>;
}

// ============================================================================
// Thought Repository
// ============================================================================

/// Fields required to create a thought
#[derive(Debug, Clone)]
pub struct NewThought {
    pub text: String,
    pub user_id: DocumentId,
}

/// Partial update of a thought; the creation timestamp is never touched
#[derive(Debug, Clone, Default)]
pub struct ThoughtPatch {
    pub text: Option<String>,
}

impl ThoughtPatch {
    /// True when the patch touches nothing
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
    }
}

#[async_trait]
pub trait ThoughtRepository: Send + Sync {
    /// List all thoughts, unfiltered, reactions embedded
    async fn find_all(&self) -> RepoResult<Vec<Thought>>;

    /// Find thought by id
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Thought>>;

    /// Find thoughts whose id appears in `ids`; missing ids are skipped
    async fn find_by_ids(&self, ids: &[DocumentId]) -> RepoResult<Vec<Thought>>;

    /// Create a new thought with no reactions
    async fn create(&self, data: NewThought) -> RepoResult<Thought>;

    /// Apply a partial update
    async fn update(&self, id: &DocumentId, patch: ThoughtPatch) -> RepoResult<Option<Thought>>;

    /// Delete a thought, returning the deleted document
    async fn delete(&self, id: &DocumentId) -> RepoResult<Option<Thought>>;

    /// Delete every thought whose id appears in `ids`, returning the count
    async fn delete_many(&self, ids: &[DocumentId]) -> RepoResult<u64>;

    /// Embed a reaction unless one with the same id is already present
    /// (set semantics keyed on the reaction id, not content). Returns the
    /// thought after the operation, or `None` when the thought is absent.
    async fn add_reaction(
        &self,
        thought_id: &DocumentId,
        reaction: &Reaction,
    ) -> RepoResult<Option<Thought>>;

    /// Remove the embedded reaction matching `reaction_id`; no-op without a
    /// match. Returns the thought after the operation, or `None` when the
    /// thought is absent.
    async fn remove_reaction(
        &self,
        thought_id: &DocumentId,
        reaction_id: Uuid,
    ) -> RepoResult<Option<Thought>>;
}
