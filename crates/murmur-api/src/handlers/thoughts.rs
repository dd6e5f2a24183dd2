//! Thought handlers
//!
//! Endpoints for thought CRUD and embedded reactions.

use axum::{
    extract::{Path, State},
    Json,
};
use murmur_core::DocumentId;
use murmur_service::{
    CreateReactionRequest, CreateThoughtRequest, MessageResponse, ThoughtResponse, ThoughtService,
    UpdateThoughtRequest,
};
use uuid::Uuid;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

fn parse_thought_id(raw: &str) -> Result<DocumentId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid thought id format"))
}

/// List all thoughts
///
/// GET /thoughts
pub async fn list_thoughts(State(state): State<AppState>) -> ApiResult<Json<Vec<ThoughtResponse>>> {
    let service = ThoughtService::new(state.service_context());
    let thoughts = service.list_thoughts().await?;
    Ok(Json(thoughts))
}

/// Get a single thought
///
/// GET /thoughts/{id}
pub async fn get_thought(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ThoughtResponse>> {
    let thought_id = parse_thought_id(&id)?;

    let service = ThoughtService::new(state.service_context());
    let thought = service.get_thought(&thought_id).await?;
    Ok(Json(thought))
}

/// Create a thought and append it to the owner's list
///
/// POST /thoughts
pub async fn create_thought(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateThoughtRequest>,
) -> ApiResult<Created<Json<ThoughtResponse>>> {
    let service = ThoughtService::new(state.service_context());
    let thought = service.create_thought(request).await?;
    Ok(Created(Json(thought)))
}

/// Update a thought
///
/// PUT /thoughts/{id}
pub async fn update_thought(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateThoughtRequest>,
) -> ApiResult<Json<ThoughtResponse>> {
    let thought_id = parse_thought_id(&id)?;

    let service = ThoughtService::new(state.service_context());
    let thought = service.update_thought(&thought_id, request).await?;
    Ok(Json(thought))
}

/// Delete a thought and pull it from the owner's list
///
/// DELETE /thoughts/{id}
pub async fn delete_thought(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let thought_id = parse_thought_id(&id)?;

    let service = ThoughtService::new(state.service_context());
    let response = service.delete_thought(&thought_id).await?;
    Ok(Json(response))
}

/// Add a reaction (add-if-absent keyed on the reaction id)
///
/// POST /thoughts/{thought_id}/reactions
pub async fn add_reaction(
    State(state): State<AppState>,
    Path(thought_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateReactionRequest>,
) -> ApiResult<Created<Json<ThoughtResponse>>> {
    let thought_id = parse_thought_id(&thought_id)?;

    let service = ThoughtService::new(state.service_context());
    let thought = service.add_reaction(&thought_id, request).await?;
    Ok(Created(Json(thought)))
}

/// Remove a reaction
///
/// DELETE /thoughts/{thought_id}/reactions/{reaction_id}
pub async fn remove_reaction(
    State(state): State<AppState>,
    Path((thought_id, reaction_id)): Path<(String, String)>,
) -> ApiResult<Json<ThoughtResponse>> {
    let thought_id = parse_thought_id(&thought_id)?;
    let reaction_id: Uuid = reaction_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid reaction id format"))?;

    let service = ThoughtService::new(state.service_context());
    let thought = service.remove_reaction(&thought_id, reaction_id).await?;
    Ok(Json(thought))
}
