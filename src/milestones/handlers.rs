use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, resources, state::AppState};

use super::dto::{AssignedResource, CreateMilestoneRequest, MilestoneWithResources};
use super::repo::{self, Milestone};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/milestones", post(create_milestone))
        .route("/milestones/:id", get(get_milestone_with_resources))
        .route("/milestones/:id/complete", post(mark_complete))
}

#[instrument(skip(state, payload))]
pub async fn create_milestone(
    State(state): State<AppState>,
    Json(payload): Json<CreateMilestoneRequest>,
) -> Result<(StatusCode, Json<Milestone>), ApiError> {
    let milestone = repo::create(
        &state.db,
        payload.path_id,
        &payload.title,
        &payload.description,
        payload.order,
        payload.estimated_hours,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(milestone)))
}

#[instrument(skip(state))]
pub async fn mark_complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !repo::mark_complete(&state.db, id).await? {
        return Err(ApiError::NotFound("milestone"));
    }
    info!(milestone_id = %id, "milestone completed");
    Ok(Json(serde_json::json!({ "completed": true })))
}

/// Milestone joined with its assigned resources. Each link is merged
/// with the underlying catalog record fetched by id; the catalog is
/// small enough that the per-link fetch is fine.
#[instrument(skip(state))]
pub async fn get_milestone_with_resources(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MilestoneWithResources>, ApiError> {
    let milestone = repo::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("milestone"))?;

    let links = repo::list_links_by_milestone(&state.db, id).await?;
    let mut assigned = Vec::with_capacity(links.len());
    for link in links {
        let resource = resources::repo::find_by_id(&state.db, link.resource_id).await?;
        assigned.push(AssignedResource { link, resource });
    }

    Ok(Json(MilestoneWithResources {
        milestone,
        resources: assigned,
    }))
}
