use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::repo::LearningPath;
use crate::milestones::repo::Milestone;
use crate::types::Difficulty;

#[derive(Debug, Deserialize)]
pub struct CreatePathRequest {
    pub title: String,
    pub goal: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_weeks: i32,
}

#[derive(Debug, Serialize)]
pub struct CreatedPathResponse {
    pub id: Uuid,
    pub milestones_created: usize,
}

#[derive(Debug, Serialize)]
pub struct PathWithMilestones {
    #[serde(flatten)]
    pub path: LearningPath,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub completion_percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_deserializes() {
        let req: CreatePathRequest = serde_json::from_str(
            r#"{
                "title": "Learn Rust",
                "goal": "Ship a web service",
                "description": "Systems programming from scratch",
                "difficulty": "intermediate",
                "estimated_weeks": 8
            }"#,
        )
        .unwrap();
        assert_eq!(req.difficulty, Difficulty::Intermediate);
        assert_eq!(req.estimated_weeks, 8);
    }

    #[test]
    fn update_progress_accepts_out_of_range_values() {
        // No range validation by design; the caller owns the value.
        let req: UpdateProgressRequest =
            serde_json::from_str(r#"{"completion_percentage": 250.0}"#).unwrap();
        assert_eq!(req.completion_percentage, 250.0);
    }
}
