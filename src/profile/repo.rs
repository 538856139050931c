use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::types::{LearningStyle, ResourceType};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: Option<String>,
    pub name: Option<String>,
    pub learning_style: Option<LearningStyle>,
    pub weekly_hours: Option<i32>,
    pub preferred_formats: Option<Vec<ResourceType>>,
    pub onboarding_completed: bool,
    pub created_at: OffsetDateTime,
}

pub async fn find_by_id(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, learning_style, weekly_hours,
               preferred_formats, onboarding_completed, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(user)
}

/// Writes the onboarding profile. The identity bootstrap normally creates
/// the row first; the upsert covers tokens that arrive before it has.
/// Callable repeatedly, always overwrites.
pub async fn complete_onboarding(
    db: &PgPool,
    user_id: Uuid,
    learning_style: LearningStyle,
    weekly_hours: i32,
    preferred_formats: &[ResourceType],
) -> anyhow::Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, learning_style, weekly_hours, preferred_formats, onboarding_completed)
        VALUES ($1, $2, $3, $4, TRUE)
        ON CONFLICT (id) DO UPDATE SET
            learning_style = EXCLUDED.learning_style,
            weekly_hours = EXCLUDED.weekly_hours,
            preferred_formats = EXCLUDED.preferred_formats,
            onboarding_completed = TRUE
        RETURNING id, email, name, learning_style, weekly_hours,
                  preferred_formats, onboarding_completed, created_at
        "#,
    )
    .bind(user_id)
    .bind(learning_style)
    .bind(weekly_hours)
    .bind(preferred_formats)
    .fetch_one(db)
    .await?;
    Ok(user)
}
