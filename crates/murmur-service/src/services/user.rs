//! User service
//!
//! Handles user CRUD, friend-edge maintenance, and the cascade delete of a
//! user's thoughts.

use std::collections::HashMap;

use murmur_core::entities::{Thought, User};
use murmur_core::traits::{NewUser, UserPatch};
use murmur_core::DocumentId;
use tracing::{info, instrument, warn};

use crate::dto::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, UserProfileResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users with thought and friend references resolved
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserProfileResponse>> {
        let users = self.ctx.user_repo().find_all().await?;

        let mut profiles = Vec::with_capacity(users.len());
        for user in users {
            profiles.push(self.populate(user).await?);
        }

        Ok(profiles)
    }

    /// Get a single user with references resolved
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: &DocumentId) -> ServiceResult<UserProfileResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        self.populate(user).await
    }

    /// Create a user; uniqueness of username and email is enforced by the
    /// store and surfaces as a validation error
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let username = request.username.trim().to_string();
        if username.is_empty() {
            return Err(ServiceError::validation("Username must not be blank"));
        }

        let user = self
            .ctx
            .user_repo()
            .create(NewUser {
                username,
                email: request.email,
            })
            .await?;

        info!(user_id = %user.id, "User created");
        Ok(UserResponse::from(user))
    }

    /// Apply a partial update, re-running validation on touched fields
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: &DocumentId,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let username = match request.username {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    return Err(ServiceError::validation("Username must not be blank"));
                }
                Some(trimmed)
            }
            None => None,
        };

        let user = self
            .ctx
            .user_repo()
            .update(
                user_id,
                UserPatch {
                    username,
                    email: request.email,
                },
            )
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = %user_id, "User updated");
        Ok(UserResponse::from(user))
    }

    /// Delete a user and cascade to every thought it owns
    ///
    /// The cascade is a second, non-transactional step: a failure between
    /// the two operations leaves orphaned thoughts behind.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &DocumentId) -> ServiceResult<MessageResponse> {
        let user = self
            .ctx
            .user_repo()
            .delete(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if !user.thoughts.is_empty() {
            let removed = self.ctx.thought_repo().delete_many(&user.thoughts).await?;
            if removed < user.thoughts.len() as u64 {
                warn!(
                    user_id = %user_id,
                    expected = user.thoughts.len(),
                    removed,
                    "Cascade removed fewer thoughts than referenced"
                );
            }
        }

        info!(user_id = %user_id, thoughts = user.thoughts.len(), "User deleted");
        Ok(MessageResponse::new("User and associated thoughts deleted"))
    }

    /// Add a directed friend edge; adding an existing friend is a no-op
    ///
    /// The friend id is not checked for existence (a dangling edge is
    /// possible and dropped at resolution time), and no reciprocal edge is
    /// created.
    #[instrument(skip(self))]
    pub async fn add_friend(
        &self,
        user_id: &DocumentId,
        friend_id: &DocumentId,
    ) -> ServiceResult<UserResponse> {
        if user_id == friend_id {
            return Err(ServiceError::validation("Cannot add yourself as a friend"));
        }

        let user = self
            .ctx
            .user_repo()
            .add_friend(user_id, friend_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = %user_id, friend_id = %friend_id, "Friend added");
        Ok(UserResponse::from(user))
    }

    /// Remove a friend edge; removing a non-friend is a no-op
    #[instrument(skip(self))]
    pub async fn remove_friend(
        &self,
        user_id: &DocumentId,
        friend_id: &DocumentId,
    ) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .remove_friend(user_id, friend_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        info!(user_id = %user_id, friend_id = %friend_id, "Friend removed");
        Ok(UserResponse::from(user))
    }

    /// Resolve thought and friend references into full documents, keeping
    /// stored order and dropping dangling references
    async fn populate(&self, user: User) -> ServiceResult<UserProfileResponse> {
        let thoughts = self.ctx.thought_repo().find_by_ids(&user.thoughts).await?;
        let friends = self.ctx.user_repo().find_by_ids(&user.friends).await?;

        let mut thoughts_by_id: HashMap<DocumentId, Thought> = thoughts
            .into_iter()
            .map(|thought| (thought.id.clone(), thought))
            .collect();
        let ordered_thoughts: Vec<Thought> = user
            .thoughts
            .iter()
            .filter_map(|id| thoughts_by_id.remove(id))
            .collect();

        let mut friends_by_id: HashMap<DocumentId, User> = friends
            .into_iter()
            .map(|friend| (friend.id.clone(), friend))
            .collect();
        let ordered_friends: Vec<User> = user
            .friends
            .iter()
            .filter_map(|id| friends_by_id.remove(id))
            .collect();

        Ok(UserProfileResponse::from_parts(
            &user,
            &ordered_thoughts,
            &ordered_friends,
        ))
    }
}
