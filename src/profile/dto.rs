use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::repo::User;
use crate::types::{LearningStyle, ResourceType};

#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub learning_style: LearningStyle,
    pub weekly_hours: i32,
    pub preferred_formats: Vec<ResourceType>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub learning_style: Option<LearningStyle>,
    pub weekly_hours: Option<i32>,
    pub preferred_formats: Option<Vec<ResourceType>>,
    pub onboarding_completed: bool,
}

impl From<User> for ProfileResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            learning_style: u.learning_style,
            weekly_hours: u.weekly_hours,
            preferred_formats: u.preferred_formats,
            onboarding_completed: u.onboarding_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onboarding_request_deserializes() {
        let req: OnboardingRequest = serde_json::from_str(
            r#"{
                "learning_style": "visual",
                "weekly_hours": 10,
                "preferred_formats": ["video", "interactive"]
            }"#,
        )
        .unwrap();
        assert_eq!(req.learning_style, LearningStyle::Visual);
        assert_eq!(req.weekly_hours, 10);
        assert_eq!(
            req.preferred_formats,
            vec![ResourceType::Video, ResourceType::Interactive]
        );
    }
}
