use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Milestone {
    pub id: Uuid,
    pub path_id: Uuid,
    pub title: String,
    pub description: String,
    pub order: i32,
    pub estimated_hours: f64,
    pub is_completed: bool,
    pub completed_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// A resource assigned to a milestone, completable independently of the
/// milestone itself.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MilestoneResource {
    pub id: Uuid,
    pub milestone_id: Uuid,
    pub resource_id: Uuid,
    pub order: i32,
    pub is_completed: bool,
    pub completed_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// Ascending by `order`; ties keep store order (stable sort over the
/// fetched rows).
pub fn sort_by_order(mut milestones: Vec<Milestone>) -> Vec<Milestone> {
    milestones.sort_by_key(|m| m.order);
    milestones
}

/// Unconditional insert: no order-uniqueness check and no check that the
/// path exists, matching observed behavior.
pub async fn create(
    db: &PgPool,
    path_id: Uuid,
    title: &str,
    description: &str,
    order: i32,
    estimated_hours: f64,
) -> anyhow::Result<Milestone> {
    let milestone = sqlx::query_as::<_, Milestone>(
        r#"
        INSERT INTO milestones (path_id, title, description, "order", estimated_hours, is_completed)
        VALUES ($1, $2, $3, $4, $5, FALSE)
        RETURNING id, path_id, title, description, "order", estimated_hours,
                  is_completed, completed_at, created_at
        "#,
    )
    .bind(path_id)
    .bind(title)
    .bind(description)
    .bind(order)
    .bind(estimated_hours)
    .fetch_one(db)
    .await?;
    Ok(milestone)
}

pub async fn list_by_path(db: &PgPool, path_id: Uuid) -> anyhow::Result<Vec<Milestone>> {
    let rows = sqlx::query_as::<_, Milestone>(
        r#"
        SELECT id, path_id, title, description, "order", estimated_hours,
               is_completed, completed_at, created_at
        FROM milestones
        WHERE path_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(path_id)
    .fetch_all(db)
    .await?;
    Ok(sort_by_order(rows))
}

pub async fn find_by_id(db: &PgPool, milestone_id: Uuid) -> anyhow::Result<Option<Milestone>> {
    let milestone = sqlx::query_as::<_, Milestone>(
        r#"
        SELECT id, path_id, title, description, "order", estimated_hours,
               is_completed, completed_at, created_at
        FROM milestones
        WHERE id = $1
        "#,
    )
    .bind(milestone_id)
    .fetch_optional(db)
    .await?;
    Ok(milestone)
}

/// One-way transition: incomplete -> complete. Re-marking an already
/// complete milestone just refreshes the timestamp. Returns false when
/// the milestone does not exist.
pub async fn mark_complete(db: &PgPool, milestone_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "UPDATE milestones SET is_completed = TRUE, completed_at = NOW() WHERE id = $1",
    )
    .bind(milestone_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn list_links_by_milestone(
    db: &PgPool,
    milestone_id: Uuid,
) -> anyhow::Result<Vec<MilestoneResource>> {
    let rows = sqlx::query_as::<_, MilestoneResource>(
        r#"
        SELECT id, milestone_id, resource_id, "order", is_completed, completed_at, created_at
        FROM milestone_resources
        WHERE milestone_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(milestone_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}
