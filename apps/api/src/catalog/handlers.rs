use axum::{extract::State, Json};

use crate::catalog::{profile_options, ProfileOptions};
use crate::models::job::{CourseOffering, JobPosting};
use crate::state::AppState;

/// GET /api/v1/catalog/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.catalog.jobs.clone())
}

/// GET /api/v1/catalog/courses
pub async fn handle_list_courses(State(state): State<AppState>) -> Json<Vec<CourseOffering>> {
    Json(state.catalog.courses.clone())
}

/// GET /api/v1/catalog/profile-options
pub async fn handle_profile_options(State(state): State<AppState>) -> Json<ProfileOptions> {
    Json(profile_options(&state.catalog))
}
