//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use murmur_core::entities::{Reaction, Thought, User};

use super::responses::{ReactionResponse, ThoughtResponse, UserProfileResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            thoughts: user.thoughts.iter().map(ToString::to_string).collect(),
            friends: user.friends.iter().map(ToString::to_string).collect(),
            friend_count: user.friend_count(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl UserProfileResponse {
    /// Assemble a populated profile from the user and its resolved references
    ///
    /// The caller supplies thoughts and friends already restored to stored
    /// order; dangling references have been dropped by then, so the friend
    /// count reflects what is actually resolved.
    pub fn from_parts(user: &User, thoughts: &[Thought], friends: &[User]) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            thoughts: thoughts.iter().map(ThoughtResponse::from).collect(),
            friends: friends.iter().map(UserResponse::from).collect(),
            friend_count: friends.len(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Thought Mappers
// ============================================================================

impl From<&Thought> for ThoughtResponse {
    fn from(thought: &Thought) -> Self {
        Self {
            id: thought.id.to_string(),
            text: thought.text.clone(),
            user_id: thought.user_id.to_string(),
            reactions: thought.reactions.iter().map(ReactionResponse::from).collect(),
            reaction_count: thought.reaction_count(),
            created_at: thought.created_at,
        }
    }
}

impl From<Thought> for ThoughtResponse {
    fn from(thought: Thought) -> Self {
        Self::from(&thought)
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id,
            body: reaction.body.clone(),
            username: reaction.username.clone(),
            created_at: reaction.created_at,
        }
    }
}
