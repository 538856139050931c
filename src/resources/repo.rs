use std::cmp::Ordering;

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::types::{Difficulty, ResourceType};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: ResourceType,
    pub difficulty: Difficulty,
    pub estimated_minutes: i32,
    pub topics: Vec<String>,
    pub quality_score: f64,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Exact tag membership over the whole catalog. A linear scan is fine at
/// catalog scale.
pub fn filter_by_topic(resources: Vec<Resource>, topic: &str) -> Vec<Resource> {
    resources
        .into_iter()
        .filter(|r| r.topics.iter().any(|t| t == topic))
        .collect()
}

/// Optional type filter, then quality score descending with id as the
/// deterministic tie-break, truncated to the top 10.
pub fn rank_recommended(
    mut resources: Vec<Resource>,
    kind: Option<ResourceType>,
) -> Vec<Resource> {
    if let Some(kind) = kind {
        resources.retain(|r| r.kind == kind);
    }
    resources.sort_by(|a, b| {
        b.quality_score
            .partial_cmp(&a.quality_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    resources.truncate(10);
    resources
}

pub struct NewResource<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub kind: ResourceType,
    pub difficulty: Difficulty,
    pub estimated_minutes: i32,
    pub topics: &'a [String],
    pub quality_score: f64,
    pub thumbnail_url: Option<&'a str>,
    pub author: Option<&'a str>,
}

/// Verbatim insert from caller-supplied fields; no score or url
/// validation, matching observed behavior.
pub async fn create(db: &PgPool, new: NewResource<'_>) -> anyhow::Result<Resource> {
    let resource = sqlx::query_as::<_, Resource>(
        r#"
        INSERT INTO resources
            (title, description, url, "type", difficulty, estimated_minutes,
             topics, quality_score, thumbnail_url, author)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, title, description, url, "type", difficulty, estimated_minutes,
                  topics, quality_score, thumbnail_url, author, created_at
        "#,
    )
    .bind(new.title)
    .bind(new.description)
    .bind(new.url)
    .bind(new.kind)
    .bind(new.difficulty)
    .bind(new.estimated_minutes)
    .bind(new.topics)
    .bind(new.quality_score)
    .bind(new.thumbnail_url)
    .bind(new.author)
    .fetch_one(db)
    .await?;
    Ok(resource)
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<Resource>> {
    let rows = sqlx::query_as::<_, Resource>(
        r#"
        SELECT id, title, description, url, "type", difficulty, estimated_minutes,
               topics, quality_score, thumbnail_url, author, created_at
        FROM resources
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn list_by_difficulty(
    db: &PgPool,
    difficulty: Difficulty,
) -> anyhow::Result<Vec<Resource>> {
    let rows = sqlx::query_as::<_, Resource>(
        r#"
        SELECT id, title, description, url, "type", difficulty, estimated_minutes,
               topics, quality_score, thumbnail_url, author, created_at
        FROM resources
        WHERE difficulty = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(difficulty)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(db: &PgPool, resource_id: Uuid) -> anyhow::Result<Option<Resource>> {
    let resource = sqlx::query_as::<_, Resource>(
        r#"
        SELECT id, title, description, url, "type", difficulty, estimated_minutes,
               topics, quality_score, thumbnail_url, author, created_at
        FROM resources
        WHERE id = $1
        "#,
    )
    .bind(resource_id)
    .fetch_optional(db)
    .await?;
    Ok(resource)
}

pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM resources")
        .fetch_one(db)
        .await?;
    Ok(count)
}

/// Inserts the join row, initially incomplete. Duplicate assignments are
/// allowed, matching observed behavior.
pub async fn assign_to_milestone(
    db: &PgPool,
    milestone_id: Uuid,
    resource_id: Uuid,
    order: i32,
) -> anyhow::Result<crate::milestones::repo::MilestoneResource> {
    let link = sqlx::query_as::<_, crate::milestones::repo::MilestoneResource>(
        r#"
        INSERT INTO milestone_resources (milestone_id, resource_id, "order", is_completed)
        VALUES ($1, $2, $3, FALSE)
        RETURNING id, milestone_id, resource_id, "order", is_completed, completed_at, created_at
        "#,
    )
    .bind(milestone_id)
    .bind(resource_id)
    .bind(order)
    .fetch_one(db)
    .await?;
    Ok(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn resource(title: &str, kind: ResourceType, score: f64, topics: &[&str]) -> Resource {
        Resource {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            url: "https://example.com".into(),
            kind,
            difficulty: Difficulty::Beginner,
            estimated_minutes: 60,
            topics: topics.iter().map(|t| t.to_string()).collect(),
            quality_score: score,
            thumbnail_url: None,
            author: None,
            created_at: datetime!(2024-01-01 00:00 UTC),
        }
    }

    #[test]
    fn topic_filter_is_exact_membership() {
        let rows = vec![
            resource("a", ResourceType::Video, 9.0, &["python", "data-science"]),
            resource("b", ResourceType::Video, 9.0, &["javascript"]),
            resource("c", ResourceType::Article, 8.0, &["python"]),
        ];
        let hits = filter_by_topic(rows, "python");
        let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
    }

    #[test]
    fn topic_filter_does_not_match_substrings() {
        let rows = vec![resource("a", ResourceType::Video, 9.0, &["python3"])];
        assert!(filter_by_topic(rows, "python").is_empty());
    }

    #[test]
    fn recommended_sorts_by_score_descending() {
        let ranked = rank_recommended(
            vec![
                resource("low", ResourceType::Video, 7.0, &[]),
                resource("high", ResourceType::Video, 9.8, &[]),
                resource("mid", ResourceType::Video, 9.0, &[]),
            ],
            None,
        );
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["high", "mid", "low"]);
    }

    #[test]
    fn recommended_truncates_to_ten() {
        let rows = (0..15)
            .map(|i| resource(&format!("r{i}"), ResourceType::Video, i as f64, &[]))
            .collect();
        assert_eq!(rank_recommended(rows, None).len(), 10);
    }

    #[test]
    fn recommended_applies_type_filter() {
        let ranked = rank_recommended(
            vec![
                resource("video", ResourceType::Video, 9.0, &[]),
                resource("book", ResourceType::Book, 9.5, &[]),
            ],
            Some(ResourceType::Video),
        );
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["video"]);
    }

    #[test]
    fn recommended_breaks_score_ties_by_id() {
        let mut a = resource("a", ResourceType::Video, 9.0, &[]);
        let mut b = resource("b", ResourceType::Video, 9.0, &[]);
        a.id = Uuid::from_u128(1);
        b.id = Uuid::from_u128(2);
        let ranked = rank_recommended(vec![b, a], None);
        let titles: Vec<_> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
    }
}
