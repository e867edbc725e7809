//! Axum route handlers for the Recommendations API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::profile::validation::validate_profile;
use crate::recommend::engine::{build_recommendations, Recommendations};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/recommendations?user_id=
///
/// Recommends against the user's stored profile.
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Recommendations>, AppError> {
    let stored = state
        .profiles
        .load(params.user_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Profile for user {} not found", params.user_id))
        })?;

    let recommendations = build_recommendations(
        &stored.profile,
        &state.catalog,
        state.feed.as_ref(),
        &state.config.feed_settings(),
    )
    .await;

    Ok(Json(recommendations))
}

/// POST /api/v1/recommendations
///
/// Recommends against a profile supplied in the body. Nothing is persisted.
pub async fn handle_preview_recommendations(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<Recommendations>, AppError> {
    validate_profile(&profile)?;

    let recommendations = build_recommendations(
        &profile,
        &state.catalog,
        state.feed.as_ref(),
        &state.config.feed_settings(),
    )
    .await;

    Ok(Json(recommendations))
}
