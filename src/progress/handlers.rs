use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{AuthUser, MaybeAuthUser},
    error::ApiError,
    state::AppState,
};

use super::dto::{LogProgressRequest, TotalHoursResponse};
use super::repo::{self, ProgressLog};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/progress", post(log_progress))
        .route("/paths/:id/progress", get(get_path_progress))
        .route("/paths/:id/hours", get(get_total_hours))
}

#[instrument(skip(state, payload))]
pub async fn log_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<LogProgressRequest>,
) -> Result<(StatusCode, Json<ProgressLog>), ApiError> {
    let log = repo::insert(
        &state.db,
        user_id,
        payload.path_id,
        payload.milestone_id,
        payload.resource_id,
        payload.hours_spent,
        payload.notes.as_deref(),
        payload.confidence_level,
    )
    .await?;
    info!(user_id = %user_id, path_id = %payload.path_id, hours = payload.hours_spent, "progress logged");
    Ok((StatusCode::CREATED, Json(log)))
}

#[instrument(skip(state))]
pub async fn get_path_progress(
    State(state): State<AppState>,
    MaybeAuthUser(user_id): MaybeAuthUser,
    Path(path_id): Path<Uuid>,
) -> Result<Json<Vec<ProgressLog>>, ApiError> {
    let Some(user_id) = user_id else {
        return Ok(Json(Vec::new()));
    };
    let logs = repo::list_by_user_and_path(&state.db, user_id, path_id).await?;
    Ok(Json(logs))
}

#[instrument(skip(state))]
pub async fn get_total_hours(
    State(state): State<AppState>,
    MaybeAuthUser(user_id): MaybeAuthUser,
    Path(path_id): Path<Uuid>,
) -> Result<Json<TotalHoursResponse>, ApiError> {
    let Some(user_id) = user_id else {
        return Ok(Json(TotalHoursResponse { total_hours: 0.0 }));
    };
    let logs = repo::list_by_user_and_path(&state.db, user_id, path_id).await?;
    Ok(Json(TotalHoursResponse {
        total_hours: repo::total_hours(&logs),
    }))
}
