use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::dto::{OnboardingRequest, ProfileResponse};
use super::repo;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/onboarding", post(complete_onboarding))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(Json(user.into()))
}

#[instrument(skip(state, payload))]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<OnboardingRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = repo::complete_onboarding(
        &state.db,
        user_id,
        payload.learning_style,
        payload.weekly_hours,
        &payload.preferred_formats,
    )
    .await?;

    info!(user_id = %user_id, style = ?payload.learning_style, "onboarding completed");
    Ok(Json(user.into()))
}
