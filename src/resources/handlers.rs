use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, milestones::repo::MilestoneResource, state::AppState};

use super::dto::{AssignResourceRequest, CreateResourceRequest, RecommendedParams};
use super::repo::{self, NewResource, Resource};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/resources", post(create_resource))
        .route("/resources/by-topic/:topic", get(get_by_topic))
        .route("/resources/recommended", get(get_recommended))
        .route("/milestones/:id/resources", post(assign_to_milestone))
}

#[instrument(skip(state, payload))]
pub async fn create_resource(
    State(state): State<AppState>,
    Json(payload): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<Resource>), ApiError> {
    let resource = repo::create(
        &state.db,
        NewResource {
            title: &payload.title,
            description: &payload.description,
            url: &payload.url,
            kind: payload.kind,
            difficulty: payload.difficulty,
            estimated_minutes: payload.estimated_minutes,
            topics: &payload.topics,
            quality_score: payload.quality_score,
            thumbnail_url: payload.thumbnail_url.as_deref(),
            author: payload.author.as_deref(),
        },
    )
    .await?;
    info!(resource_id = %resource.id, title = %resource.title, "resource created");
    Ok((StatusCode::CREATED, Json(resource)))
}

#[instrument(skip(state))]
pub async fn get_by_topic(
    State(state): State<AppState>,
    Path(topic): Path<String>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let all = repo::list_all(&state.db).await?;
    Ok(Json(repo::filter_by_topic(all, &topic)))
}

#[instrument(skip(state))]
pub async fn get_recommended(
    State(state): State<AppState>,
    Query(params): Query<RecommendedParams>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let by_difficulty = repo::list_by_difficulty(&state.db, params.difficulty).await?;
    Ok(Json(repo::rank_recommended(by_difficulty, params.kind)))
}

#[instrument(skip(state, payload))]
pub async fn assign_to_milestone(
    State(state): State<AppState>,
    Path(milestone_id): Path<Uuid>,
    Json(payload): Json<AssignResourceRequest>,
) -> Result<(StatusCode, Json<MilestoneResource>), ApiError> {
    let link = repo::assign_to_milestone(
        &state.db,
        milestone_id,
        payload.resource_id,
        payload.order,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(link)))
}
