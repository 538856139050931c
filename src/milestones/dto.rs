use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo::{Milestone, MilestoneResource};
use crate::resources::repo::Resource;

#[derive(Debug, Deserialize)]
pub struct CreateMilestoneRequest {
    pub path_id: Uuid,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub estimated_hours: f64,
}

/// Join row merged with the catalog record it points at. The resource is
/// fetched by reference and may have been removed from the catalog.
#[derive(Debug, Serialize)]
pub struct AssignedResource {
    #[serde(flatten)]
    pub link: MilestoneResource,
    pub resource: Option<Resource>,
}

#[derive(Debug, Serialize)]
pub struct MilestoneWithResources {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub resources: Vec<AssignedResource>,
}
