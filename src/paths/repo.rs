use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::types::Difficulty;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LearningPath {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub goal: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_weeks: i32,
    pub is_active: bool,
    pub completion_percentage: f64,
    pub start_date: OffsetDateTime,
    pub target_end_date: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

/// Start/target window for a new path: starts now, ends after
/// `estimated_weeks` whole weeks.
pub fn path_window(now: OffsetDateTime, estimated_weeks: i32) -> (OffsetDateTime, OffsetDateTime) {
    (now, now + Duration::weeks(estimated_weeks as i64))
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &PgPool,
    user_id: Uuid,
    title: &str,
    goal: &str,
    description: &str,
    difficulty: Difficulty,
    estimated_weeks: i32,
    start_date: OffsetDateTime,
    target_end_date: OffsetDateTime,
) -> anyhow::Result<LearningPath> {
    let path = sqlx::query_as::<_, LearningPath>(
        r#"
        INSERT INTO learning_paths
            (user_id, title, goal, description, difficulty, estimated_weeks,
             is_active, completion_percentage, start_date, target_end_date)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE, 0, $7, $8)
        RETURNING id, user_id, title, goal, description, difficulty, estimated_weeks,
                  is_active, completion_percentage, start_date, target_end_date, created_at
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(goal)
    .bind(description)
    .bind(difficulty)
    .bind(estimated_weeks)
    .bind(start_date)
    .bind(target_end_date)
    .fetch_one(db)
    .await?;
    Ok(path)
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<LearningPath>> {
    let rows = sqlx::query_as::<_, LearningPath>(
        r#"
        SELECT id, user_id, title, goal, description, difficulty, estimated_weeks,
               is_active, completion_percentage, start_date, target_end_date, created_at
        FROM learning_paths
        WHERE user_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// First active path in insertion order. Several paths may be active at
/// once (no uniqueness constraint), matching observed behavior.
pub async fn find_active(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<LearningPath>> {
    let path = sqlx::query_as::<_, LearningPath>(
        r#"
        SELECT id, user_id, title, goal, description, difficulty, estimated_weeks,
               is_active, completion_percentage, start_date, target_end_date, created_at
        FROM learning_paths
        WHERE user_id = $1 AND is_active = TRUE
        ORDER BY created_at ASC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(path)
}

pub async fn find_by_id(db: &PgPool, path_id: Uuid) -> anyhow::Result<Option<LearningPath>> {
    let path = sqlx::query_as::<_, LearningPath>(
        r#"
        SELECT id, user_id, title, goal, description, difficulty, estimated_weeks,
               is_active, completion_percentage, start_date, target_end_date, created_at
        FROM learning_paths
        WHERE id = $1
        "#,
    )
    .bind(path_id)
    .fetch_optional(db)
    .await?;
    Ok(path)
}

/// Unconditional overwrite; the caller computes the value and no range
/// check is applied. Returns false when the path does not exist.
pub async fn update_progress(
    db: &PgPool,
    path_id: Uuid,
    completion_percentage: f64,
) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "UPDATE learning_paths SET completion_percentage = $2 WHERE id = $1",
    )
    .bind(path_id)
    .bind(completion_percentage)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Flips the active flag. Returns false when the path does not exist.
pub async fn toggle_active(db: &PgPool, path_id: Uuid) -> anyhow::Result<bool> {
    let result = sqlx::query(
        "UPDATE learning_paths SET is_active = NOT is_active WHERE id = $1",
    )
    .bind(path_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Cascade order: resource links of the path's milestones, then the
/// milestones, then the path's progress logs, then the path row. Each
/// statement is a no-op on rows already gone, so a partially applied
/// cascade can be re-run safely.
pub const CASCADE_STATEMENTS: [&str; 4] = [
    r#"
    DELETE FROM milestone_resources
    WHERE milestone_id IN (SELECT id FROM milestones WHERE path_id = $1)
    "#,
    "DELETE FROM milestones WHERE path_id = $1",
    "DELETE FROM progress_logs WHERE path_id = $1",
    "DELETE FROM learning_paths WHERE id = $1",
];

pub async fn delete_cascade(db: &PgPool, path_id: Uuid) -> anyhow::Result<()> {
    let mut tx = db.begin().await?;
    for statement in CASCADE_STATEMENTS {
        sqlx::query(statement).bind(path_id).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn path_window_spans_exact_weeks() {
        let now = datetime!(2024-03-01 12:00 UTC);
        let (start, end) = path_window(now, 8);
        assert_eq!(start, now);
        let millis = (end - start).whole_milliseconds();
        assert_eq!(millis, 8 * 7 * 24 * 60 * 60 * 1000);
    }

    #[test]
    fn path_window_zero_weeks() {
        let now = datetime!(2024-03-01 12:00 UTC);
        let (start, end) = path_window(now, 0);
        assert_eq!(start, end);
    }

    #[test]
    fn cascade_deletes_children_before_parents() {
        let position = |table: &str| {
            CASCADE_STATEMENTS
                .iter()
                .position(|s| s.contains(&format!("DELETE FROM {table}")))
                .unwrap_or_else(|| panic!("no delete for {table}"))
        };
        assert!(position("milestone_resources") < position("milestones"));
        assert!(position("milestones") < position("learning_paths"));
        assert!(position("progress_logs") < position("learning_paths"));
    }
}
