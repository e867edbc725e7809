pub mod health;

use axum::{routing::get, Router};

use crate::catalog::handlers as catalog;
use crate::profile::handlers as profile;
use crate::recommend::handlers as recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/profile/:user_id",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        // Recommendations API
        .route(
            "/api/v1/recommendations",
            get(recommend::handle_get_recommendations)
                .post(recommend::handle_preview_recommendations),
        )
        // Catalog API
        .route("/api/v1/catalog/jobs", get(catalog::handle_list_jobs))
        .route("/api/v1/catalog/courses", get(catalog::handle_list_courses))
        .route(
            "/api/v1/catalog/profile-options",
            get(catalog::handle_profile_options),
        )
        .with_state(state)
}
