use serde::{Deserialize, Serialize};

/// Difficulty tiers shared by paths, resources and the milestone
/// template table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "resource_type", rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Article,
    Course,
    Project,
    Book,
    Interactive,
}

impl sqlx::postgres::PgHasArrayType for ResourceType {
    fn array_type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("_resource_type")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "learning_style", rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Beginner).unwrap(), "\"beginner\"");
        assert_eq!(serde_json::to_string(&ResourceType::Interactive).unwrap(), "\"interactive\"");
        assert_eq!(serde_json::to_string(&LearningStyle::Kinesthetic).unwrap(), "\"kinesthetic\"");
    }

    #[test]
    fn enums_deserialize_lowercase() {
        let d: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(d, Difficulty::Advanced);
        let t: ResourceType = serde_json::from_str("\"book\"").unwrap();
        assert_eq!(t, ResourceType::Book);
    }
}
