use sqlx::PgPool;
use tracing::info;

use super::repo::{self, NewResource};
use crate::types::{Difficulty, ResourceType};

struct SeedResource {
    title: &'static str,
    description: &'static str,
    url: &'static str,
    kind: ResourceType,
    difficulty: Difficulty,
    estimated_minutes: i32,
    topics: &'static [&'static str],
    quality_score: f64,
    author: &'static str,
}

const SAMPLE_RESOURCES: &[SeedResource] = &[
    SeedResource {
        title: "HTML & CSS Fundamentals",
        description: "Learn the basics of HTML and CSS to build beautiful websites",
        url: "https://www.youtube.com/watch?v=mU6anWqZJcc",
        kind: ResourceType::Video,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 120,
        topics: &["web-development", "html", "css"],
        quality_score: 9.5,
        author: "freeCodeCamp",
    },
    SeedResource {
        title: "JavaScript for Beginners",
        description: "Complete JavaScript tutorial for absolute beginners",
        url: "https://www.youtube.com/watch?v=PkZNo7MFNFg",
        kind: ResourceType::Video,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 180,
        topics: &["web-development", "javascript"],
        quality_score: 9.8,
        author: "freeCodeCamp",
    },
    SeedResource {
        title: "React Complete Course",
        description: "Learn React from scratch with hands-on projects",
        url: "https://www.youtube.com/watch?v=bMknfKXIFA8",
        kind: ResourceType::Video,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 240,
        topics: &["web-development", "react", "javascript"],
        quality_score: 9.7,
        author: "freeCodeCamp",
    },
    SeedResource {
        title: "Python for Data Science",
        description: "Complete Python programming for data science and machine learning",
        url: "https://www.youtube.com/watch?v=LHBE6Q9XlzI",
        kind: ResourceType::Video,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 240,
        topics: &["data-science", "python"],
        quality_score: 9.6,
        author: "freeCodeCamp",
    },
    SeedResource {
        title: "Machine Learning Crash Course",
        description: "Introduction to machine learning concepts and algorithms",
        url: "https://www.youtube.com/watch?v=Gv9_4yMHFhI",
        kind: ResourceType::Video,
        difficulty: Difficulty::Intermediate,
        estimated_minutes: 180,
        topics: &["data-science", "machine-learning"],
        quality_score: 9.4,
        author: "freeCodeCamp",
    },
    SeedResource {
        title: "Digital Marketing Fundamentals",
        description: "Complete guide to digital marketing strategies",
        url: "https://www.youtube.com/watch?v=nU-IIXBWlS4",
        kind: ResourceType::Video,
        difficulty: Difficulty::Beginner,
        estimated_minutes: 150,
        topics: &["digital-marketing", "seo", "social-media"],
        quality_score: 9.2,
        author: "Simplilearn",
    },
];

/// One-time bulk insertion of the sample catalog. A non-empty catalog
/// means seeding already ran, so this is a no-op then.
pub async fn seed_resources(db: &PgPool) -> anyhow::Result<()> {
    let existing = repo::count(db).await?;
    if existing > 0 {
        info!(existing, "resource catalog not empty, skipping seed");
        return Ok(());
    }

    for sample in SAMPLE_RESOURCES {
        let topics: Vec<String> = sample.topics.iter().map(|t| t.to_string()).collect();
        repo::create(
            db,
            NewResource {
                title: sample.title,
                description: sample.description,
                url: sample.url,
                kind: sample.kind,
                difficulty: sample.difficulty,
                estimated_minutes: sample.estimated_minutes,
                topics: &topics,
                quality_score: sample.quality_score,
                thumbnail_url: None,
                author: Some(sample.author),
            },
        )
        .await?;
    }

    info!(count = SAMPLE_RESOURCES.len(), "seeded resource catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_has_six_entries() {
        assert_eq!(SAMPLE_RESOURCES.len(), 6);
    }

    #[test]
    fn sample_scores_and_topics_look_sane() {
        for sample in SAMPLE_RESOURCES {
            assert!(sample.quality_score > 9.0);
            assert!(!sample.topics.is_empty());
            assert!(sample.url.starts_with("https://"));
        }
    }
}
