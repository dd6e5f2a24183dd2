//! User handlers
//!
//! Endpoints for user CRUD and friend-edge maintenance.

use axum::{
    extract::{Path, State},
    Json,
};
use murmur_core::DocumentId;
use murmur_service::{
    CreateUserRequest, MessageResponse, UpdateUserRequest, UserProfileResponse, UserResponse,
    UserService,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_user_id(raw: &str) -> Result<DocumentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid user id format"))
}

/// List all users with references resolved
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserProfileResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Get a single user with references resolved
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfileResponse>> {
    let user_id = parse_user_id(&id)?;

    let service = UserService::new(state.service_context());
    let user = service.get_user(&user_id).await?;
    Ok(Json(user))
}

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Created(Json(user)))
}

/// Update a user
///
/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&id)?;

    let service = UserService::new(state.service_context());
    let user = service.update_user(&user_id, request).await?;
    Ok(Json(user))
}

/// Delete a user and cascade to its thoughts
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = parse_user_id(&id)?;

    let service = UserService::new(state.service_context());
    let response = service.delete_user(&user_id).await?;
    Ok(Json(response))
}

/// Add a friend edge
///
/// POST /users/{user_id}/friends/{friend_id}
pub async fn add_friend(
    State(state): State<AppState>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let friend_id = friend_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid friend id format"))?;

    let service = UserService::new(state.service_context());
    let user = service.add_friend(&user_id, &friend_id).await?;
    Ok(Json(user))
}

/// Remove a friend edge
///
/// DELETE /users/{user_id}/friends/{friend_id}
pub async fn remove_friend(
    State(state): State<AppState>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = parse_user_id(&user_id)?;
    let friend_id = friend_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid friend id format"))?;

    let service = UserService::new(state.service_context());
    let user = service.remove_friend(&user_id, &friend_id).await?;
    Ok(Json(user))
}
