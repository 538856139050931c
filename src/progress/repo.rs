use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProgressLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub path_id: Uuid,
    pub milestone_id: Option<Uuid>,
    pub resource_id: Option<Uuid>,
    pub hours_spent: f64,
    pub notes: Option<String>,
    pub confidence_level: Option<i32>,
    pub created_at: OffsetDateTime,
}

/// Sum of hours over a set of logs. Values are persisted unvalidated, so
/// negatives count too.
pub fn total_hours(logs: &[ProgressLog]) -> f64 {
    logs.iter().map(|l| l.hours_spent).sum()
}

/// Append-only; rows are never updated and only removed by the path
/// cascade delete.
#[allow(clippy::too_many_arguments)]
pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    path_id: Uuid,
    milestone_id: Option<Uuid>,
    resource_id: Option<Uuid>,
    hours_spent: f64,
    notes: Option<&str>,
    confidence_level: Option<i32>,
) -> anyhow::Result<ProgressLog> {
    let log = sqlx::query_as::<_, ProgressLog>(
        r#"
        INSERT INTO progress_logs
            (user_id, path_id, milestone_id, resource_id, hours_spent, notes, confidence_level)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, path_id, milestone_id, resource_id,
                  hours_spent, notes, confidence_level, created_at
        "#,
    )
    .bind(user_id)
    .bind(path_id)
    .bind(milestone_id)
    .bind(resource_id)
    .bind(hours_spent)
    .bind(notes)
    .bind(confidence_level)
    .fetch_one(db)
    .await?;
    Ok(log)
}

pub async fn list_by_user_and_path(
    db: &PgPool,
    user_id: Uuid,
    path_id: Uuid,
) -> anyhow::Result<Vec<ProgressLog>> {
    let rows = sqlx::query_as::<_, ProgressLog>(
        r#"
        SELECT id, user_id, path_id, milestone_id, resource_id,
               hours_spent, notes, confidence_level, created_at
        FROM progress_logs
        WHERE user_id = $1 AND path_id = $2
        ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .bind(path_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn log(hours: f64) -> ProgressLog {
        ProgressLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            path_id: Uuid::new_v4(),
            milestone_id: None,
            resource_id: None,
            hours_spent: hours,
            notes: None,
            confidence_level: None,
            created_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn empty_set_sums_to_zero() {
        assert_eq!(total_hours(&[]), 0.0);
    }

    #[test]
    fn total_is_sum_of_hours() {
        let logs = vec![log(1.5), log(2.0), log(0.25)];
        assert_eq!(total_hours(&logs), 3.75);
    }

    #[test]
    fn logging_h_more_hours_raises_total_by_h() {
        let mut logs = vec![log(4.0), log(1.0)];
        let before = total_hours(&logs);
        logs.push(log(2.5));
        assert_eq!(total_hours(&logs), before + 2.5);
    }
}
