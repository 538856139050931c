use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{AuthUser, MaybeAuthUser},
    error::ApiError,
    milestones::{self, templates},
    state::AppState,
};

use super::dto::{CreatePathRequest, CreatedPathResponse, PathWithMilestones, UpdateProgressRequest};
use super::repo::{self, LearningPath};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/paths", post(create_path).get(list_paths))
        .route("/paths/active", get(get_active_path))
        .route(
            "/paths/:id",
            get(get_path_with_milestones)
                .patch(update_progress)
                .delete(delete_path),
        )
        .route("/paths/:id/toggle", post(toggle_active))
        .route("/paths/:id/milestones", get(get_path_milestones))
}

/// Creates the path and generates its milestone checklist from the
/// difficulty-keyed template table, orders 0..n-1. A new path is always
/// active; no check against other active paths.
#[instrument(skip(state, payload))]
pub async fn create_path(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreatePathRequest>,
) -> Result<(StatusCode, Json<CreatedPathResponse>), ApiError> {
    let (start_date, target_end_date) =
        repo::path_window(OffsetDateTime::now_utc(), payload.estimated_weeks);

    let path = repo::create(
        &state.db,
        user_id,
        &payload.title,
        &payload.goal,
        &payload.description,
        payload.difficulty,
        payload.estimated_weeks,
        start_date,
        target_end_date,
    )
    .await?;

    let plan = templates::plan_for(payload.difficulty);
    for (order, template) in plan.iter().enumerate() {
        milestones::repo::create(
            &state.db,
            path.id,
            template.title,
            &template.render_description(&payload.title),
            order as i32,
            template.hours,
        )
        .await?;
    }

    info!(
        user_id = %user_id,
        path_id = %path.id,
        difficulty = ?payload.difficulty,
        milestones = plan.len(),
        "learning path created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedPathResponse {
            id: path.id,
            milestones_created: plan.len(),
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_paths(
    State(state): State<AppState>,
    MaybeAuthUser(user_id): MaybeAuthUser,
) -> Result<Json<Vec<LearningPath>>, ApiError> {
    let Some(user_id) = user_id else {
        return Ok(Json(Vec::new()));
    };
    let paths = repo::list_by_user(&state.db, user_id).await?;
    Ok(Json(paths))
}

#[instrument(skip(state))]
pub async fn get_active_path(
    State(state): State<AppState>,
    MaybeAuthUser(user_id): MaybeAuthUser,
) -> Result<Json<Option<LearningPath>>, ApiError> {
    let Some(user_id) = user_id else {
        return Ok(Json(None));
    };
    let path = repo::find_active(&state.db, user_id).await?;
    Ok(Json(path))
}

/// No ownership check: any caller can read any path by id, matching
/// observed behavior.
#[instrument(skip(state))]
pub async fn get_path_with_milestones(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PathWithMilestones>, ApiError> {
    let path = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("path"))?;
    let milestones = milestones::repo::list_by_path(&state.db, id).await?;
    Ok(Json(PathWithMilestones { path, milestones }))
}

#[instrument(skip(state))]
pub async fn get_path_milestones(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<milestones::repo::Milestone>>, ApiError> {
    let rows = milestones::repo::list_by_path(&state.db, id).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn update_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProgressRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::update_progress(&state.db, id, payload.completion_percentage).await? {
        return Err(ApiError::NotFound("path"));
    }
    Ok(Json(serde_json::json!({ "updated": true })))
}

#[instrument(skip(state))]
pub async fn toggle_active(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::toggle_active(&state.db, id).await? {
        return Err(ApiError::NotFound("path"));
    }
    Ok(Json(serde_json::json!({ "toggled": true })))
}

/// Ownership-checked cascading delete: resource links of the path's
/// milestones, the milestones, the path's progress logs, then the path.
#[instrument(skip(state))]
pub async fn delete_path(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let path = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("path"))?;
    if path.user_id != user_id {
        return Err(ApiError::Unauthorized);
    }

    repo::delete_cascade(&state.db, id).await?;
    info!(user_id = %user_id, path_id = %id, "learning path deleted");
    Ok(StatusCode::NO_CONTENT)
}
