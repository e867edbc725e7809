use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileUpdate, StoredProfile};
use crate::profile::validation::normalize_update;
use crate::state::AppState;

/// GET /api/v1/profile/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<StoredProfile>, AppError> {
    let profile = state
        .profiles
        .load(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {user_id} not found")))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile/:user_id
///
/// Merge-style write: fields missing from the body keep their stored values.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<StoredProfile>, AppError> {
    let update = normalize_update(update)?;
    let saved = state.profiles.merge(user_id, &update).await?;
    Ok(Json(saved))
}
