//! Service context - dependency container for services
//!
//! Holds the repositories as trait objects so services never see the
//! concrete store. This is what makes the layer testable against in-memory
//! repositories.

use std::sync::Arc;

use murmur_core::traits::{ThoughtRepository, UserRepository};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
    thought_repo: Arc<dyn ThoughtRepository>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        thought_repo: Arc<dyn ThoughtRepository>,
    ) -> Self {
        Self {
            user_repo,
            thought_repo,
        }
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the thought repository
    pub fn thought_repo(&self) -> &dyn ThoughtRepository {
        self.thought_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .field("thought_repo", &"dyn ThoughtRepository")
            .finish()
    }
}
