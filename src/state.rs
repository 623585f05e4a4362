//! Forum content shown by the browse screen.
//!
//! The catalog is seeded at startup and never mutated; there is no server
//! behind this UI, so categories and recent posts are fixtures.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A forum category row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumCategory {
    pub name: String,
    pub description: String,
    pub topics: u64,
    pub posts: u64,
}

/// A recent post row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub author: String,
    pub replies: u32,
    pub posted_at: DateTime<Utc>,
}

/// All content rendered by the browse screen.
#[derive(Debug, Clone)]
pub struct ForumCatalog {
    pub categories: Vec<ForumCategory>,
    pub recent: Vec<Post>,
}

impl ForumCatalog {
    /// Fixture content for the static front page.
    pub fn seed() -> Self {
        let now = Utc::now();
        let category = |name: &str, description: &str, topics, posts| ForumCategory {
            name: name.to_string(),
            description: description.to_string(),
            topics,
            posts,
        };
        let post = |title: &str, author: &str, replies, hours_ago: i64| Post {
            title: title.to_string(),
            author: author.to_string(),
            replies,
            posted_at: now - Duration::hours(hours_ago),
        };

        Self {
            categories: vec![
                category(
                    "General Discussion",
                    "Introductions, announcements, off-topic chatter",
                    1_284,
                    18_930,
                ),
                category(
                    "Security & Privacy",
                    "Hardening, disclosure, opsec practices",
                    862,
                    12_417,
                ),
                category(
                    "Programming",
                    "Code review, language debates, project help",
                    2_105,
                    31_204,
                ),
                category(
                    "Hardware & Homelab",
                    "Builds, networking gear, self-hosting",
                    540,
                    7_842,
                ),
            ],
            recent: vec![
                post("Weekly hardening checklist, 2026 edition", "CyberNinja", 48, 2),
                post("Show-and-tell: my 4-node homelab rack", "DevMaster", 31, 5),
                post("Is anyone else seeing odd DNS timeouts?", "HackerPro", 12, 9),
                post("Static site generators compared", "CodeWizard", 74, 14),
                post("Forum theme refresh feedback thread", "CyberNinja", 206, 30),
            ],
        }
    }
}

/// Compact relative age for a post row ("2h ago", "3d ago").
pub fn format_age(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - posted_at).num_minutes().max(0);
    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 60 * 24 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / (60 * 24))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_age_buckets() {
        let now = Utc::now();
        assert_eq!(format_age(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(format_age(now - Duration::hours(2), now), "2h ago");
        assert_eq!(format_age(now - Duration::days(3), now), "3d ago");
    }

    #[test]
    fn test_future_timestamps_clamp_to_zero() {
        let now = Utc::now();
        assert_eq!(format_age(now + Duration::minutes(10), now), "0m ago");
    }

    #[test]
    fn test_seed_catalog_is_populated() {
        let catalog = ForumCatalog::seed();
        assert!(!catalog.categories.is_empty());
        assert!(!catalog.recent.is_empty());
    }
}
