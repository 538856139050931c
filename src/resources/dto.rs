use serde::Deserialize;
use uuid::Uuid;

use crate::types::{Difficulty, ResourceType};

#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub difficulty: Difficulty,
    pub estimated_minutes: i32,
    pub topics: Vec<String>,
    pub quality_score: f64,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendedParams {
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub kind: Option<ResourceType>,
}

#[derive(Debug, Deserialize)]
pub struct AssignResourceRequest {
    pub resource_id: Uuid,
    pub order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommended_params_type_is_optional() {
        let p: RecommendedParams =
            serde_json::from_str(r#"{"difficulty": "beginner"}"#).unwrap();
        assert_eq!(p.difficulty, Difficulty::Beginner);
        assert!(p.kind.is_none());

        let p: RecommendedParams =
            serde_json::from_str(r#"{"difficulty": "advanced", "type": "course"}"#).unwrap();
        assert_eq!(p.kind, Some(ResourceType::Course));
    }
}
