//! Thought service
//!
//! Handles thought CRUD, the owner-reference push/pull, and embedded
//! reaction maintenance.

use murmur_core::entities::Reaction;
use murmur_core::traits::{NewThought, ThoughtPatch};
use murmur_core::DocumentId;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    CreateReactionRequest, CreateThoughtRequest, MessageResponse, ThoughtResponse,
    UpdateThoughtRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Thought service
pub struct ThoughtService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThoughtService<'a> {
    /// Create a new ThoughtService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all thoughts, reactions embedded
    #[instrument(skip(self))]
    pub async fn list_thoughts(&self) -> ServiceResult<Vec<ThoughtResponse>> {
        let thoughts = self.ctx.thought_repo().find_all().await?;
        Ok(thoughts.iter().map(ThoughtResponse::from).collect())
    }

    /// Get a single thought
    #[instrument(skip(self))]
    pub async fn get_thought(&self, thought_id: &DocumentId) -> ServiceResult<ThoughtResponse> {
        let thought = self
            .ctx
            .thought_repo()
            .find_by_id(thought_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thought", thought_id.to_string()))?;

        Ok(ThoughtResponse::from(thought))
    }

    /// Create a thought and append its id to the owner's list
    ///
    /// Two separate store operations. When the reference push fails (owner
    /// missing, or a store error), the just-created thought is rolled back
    /// with a best-effort compensating delete instead of leaving a silent
    /// orphan.
    #[instrument(skip(self, request))]
    pub async fn create_thought(
        &self,
        request: CreateThoughtRequest,
    ) -> ServiceResult<ThoughtResponse> {
        let owner_id = request.user_id.clone();

        let thought = self
            .ctx
            .thought_repo()
            .create(NewThought {
                text: request.text,
                user_id: owner_id.clone(),
            })
            .await?;

        match self.ctx.user_repo().push_thought(&owner_id, &thought.id).await {
            Ok(Some(_)) => {
                info!(thought_id = %thought.id, user_id = %owner_id, "Thought created");
                Ok(ThoughtResponse::from(thought))
            }
            Ok(None) => {
                self.roll_back_orphan(&thought.id).await;
                Err(ServiceError::not_found("User", owner_id.to_string()))
            }
            Err(e) => {
                self.roll_back_orphan(&thought.id).await;
                Err(e.into())
            }
        }
    }

    /// Apply a partial update; the creation timestamp is never touched
    #[instrument(skip(self, request))]
    pub async fn update_thought(
        &self,
        thought_id: &DocumentId,
        request: UpdateThoughtRequest,
    ) -> ServiceResult<ThoughtResponse> {
        let thought = self
            .ctx
            .thought_repo()
            .update(thought_id, ThoughtPatch { text: request.text })
            .await?
            .ok_or_else(|| ServiceError::not_found("Thought", thought_id.to_string()))?;

        info!(thought_id = %thought_id, "Thought updated");
        Ok(ThoughtResponse::from(thought))
    }

    /// Delete a thought, then pull its reference from whichever user's list
    /// contains it
    ///
    /// The owner is found by scanning for the reference, and the two steps
    /// are not atomic.
    #[instrument(skip(self))]
    pub async fn delete_thought(&self, thought_id: &DocumentId) -> ServiceResult<MessageResponse> {
        self.ctx
            .thought_repo()
            .delete(thought_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thought", thought_id.to_string()))?;

        match self.ctx.user_repo().pull_thought(thought_id).await? {
            Some(owner) => {
                info!(thought_id = %thought_id, user_id = %owner.id, "Thought deleted");
            }
            None => {
                // The thought was an orphan; nothing referenced it
                warn!(thought_id = %thought_id, "Deleted thought had no referencing user");
            }
        }

        Ok(MessageResponse::new("Thought deleted"))
    }

    /// Embed a reaction with add-if-absent semantics keyed on its id
    ///
    /// Calling twice with the same identity leaves a single occurrence;
    /// identical content under a fresh id is a distinct reaction.
    #[instrument(skip(self, request))]
    pub async fn add_reaction(
        &self,
        thought_id: &DocumentId,
        request: CreateReactionRequest,
    ) -> ServiceResult<ThoughtResponse> {
        let reaction = match request.id {
            Some(id) => Reaction::with_id(id, request.body, request.username),
            None => Reaction::new(request.body, request.username),
        };

        let thought = self
            .ctx
            .thought_repo()
            .add_reaction(thought_id, &reaction)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thought", thought_id.to_string()))?;

        info!(thought_id = %thought_id, reaction_id = %reaction.id, "Reaction added");
        Ok(ThoughtResponse::from(thought))
    }

    /// Remove the embedded reaction matching `reaction_id`; a miss is a no-op
    #[instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        thought_id: &DocumentId,
        reaction_id: Uuid,
    ) -> ServiceResult<ThoughtResponse> {
        let thought = self
            .ctx
            .thought_repo()
            .remove_reaction(thought_id, reaction_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Thought", thought_id.to_string()))?;

        info!(thought_id = %thought_id, reaction_id = %reaction_id, "Reaction removed");
        Ok(ThoughtResponse::from(thought))
    }

    /// Best-effort compensating delete after a failed reference push; a
    /// failure here reproduces the documented orphan gap
    async fn roll_back_orphan(&self, thought_id: &DocumentId) {
        if let Err(e) = self.ctx.thought_repo().delete(thought_id).await {
            warn!(thought_id = %thought_id, error = %e, "Failed to roll back orphaned thought");
        }
    }
}
