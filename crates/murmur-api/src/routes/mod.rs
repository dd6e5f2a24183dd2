//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, thoughts, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (mounted outside the API prefix)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new().merge(user_routes()).merge(thought_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        // User CRUD
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::delete_user))
        // Friend edges
        .route("/users/:user_id/friends/:friend_id", post(users::add_friend))
        .route(
            "/users/:user_id/friends/:friend_id",
            delete(users::remove_friend),
        )
}

/// Thought routes
fn thought_routes() -> Router<AppState> {
    Router::new()
        // Thought CRUD
        .route("/thoughts", get(thoughts::list_thoughts))
        .route("/thoughts", post(thoughts::create_thought))
        .route("/thoughts/:id", get(thoughts::get_thought))
        .route("/thoughts/:id", put(thoughts::update_thought))
        .route("/thoughts/:id", delete(thoughts::delete_thought))
        // Embedded reactions
        .route("/thoughts/:thought_id/reactions", post(thoughts::add_reaction))
        .route(
            "/thoughts/:thought_id/reactions/:reaction_id",
            delete(thoughts::remove_reaction),
        )
}
