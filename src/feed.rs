// src/feed.rs
//
// Read-only projections over store content. Nothing here is cached; callers
// recompute on every query.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Post, Project};

/// Which projects the feed shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL: &'static str = "All";

    /// "All" selects everything; any other string is an exact category name.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL,
            CategoryFilter::Category(name) => name,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => &project.category == name,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(CategoryFilter::parse(&value))
    }
}

/// Projects matching `filter`, in their original relative order.
pub fn filter_projects_by_category<'a>(
    projects: &'a [Project],
    filter: &CategoryFilter,
) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Latest,
    Oldest,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Latest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Latest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Oldest => "oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0} (expected latest or oldest)")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(SortOrder::Latest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Posts ordered by creation time. Posts with equal timestamps keep their
/// input order in both directions.
pub fn sort_posts(posts: &[Post], order: SortOrder) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    // slice::sort_by is stable
    match order {
        SortOrder::Latest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::seed;

    fn post(id: &str, created_at: &str) -> Post {
        Post {
            id: id.to_string(),
            author: "Priya Sharma".to_string(),
            content: format!("post {id}"),
            media: Vec::new(),
            comments: Vec::new(),
            created_at: DateTime::parse_from_rfc3339(created_at)
                .expect("valid timestamp")
                .with_timezone(&Utc),
        }
    }

    fn post_ids(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.id.clone()).collect()
    }

    fn project_ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn all_filter_is_identity() {
        let projects = seed::projects(Utc::now());
        let filtered = filter_projects_by_category(&projects, &CategoryFilter::All);

        assert_eq!(filtered.len(), projects.len());
        assert!(filtered.iter().zip(&projects).all(|(a, b)| *a == b));
    }

    #[test]
    fn category_filter_returns_exact_matches() {
        let projects = seed::projects(Utc::now());
        let filtered =
            filter_projects_by_category(&projects, &CategoryFilter::parse("Mechanical"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category, "Mechanical");
        assert_eq!(filtered[0].title, "Solar Panel Cleaning Robot");
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let mut projects = seed::projects(Utc::now());
        projects[2].category = "IT".to_string();

        let filtered = filter_projects_by_category(&projects, &CategoryFilter::parse("IT"));
        assert_eq!(project_ids(&filtered), vec!["1", "3"]);
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let projects = seed::projects(Utc::now());
        assert!(filter_projects_by_category(&projects, &CategoryFilter::parse("it")).is_empty());
    }

    #[test]
    fn sort_posts_by_creation_time() {
        let posts = vec![
            post("A", "2025-07-29T14:00:00Z"),
            post("B", "2025-07-30T09:00:00Z"),
        ];

        let latest = sort_posts(&posts, SortOrder::Latest);
        let oldest = sort_posts(&posts, SortOrder::Oldest);
        assert_eq!(post_ids(&latest), vec!["B", "A"]);
        assert_eq!(post_ids(&oldest), vec!["A", "B"]);
    }

    #[test]
    fn latest_is_reverse_of_oldest_without_ties() {
        let posts = vec![
            post("1", "2025-07-30T09:00:00Z"),
            post("2", "2025-07-28T09:00:00Z"),
            post("3", "2025-07-31T09:00:00Z"),
            post("4", "2025-07-29T09:00:00Z"),
        ];

        let mut latest = sort_posts(&posts, SortOrder::Latest);
        latest.reverse();
        assert_eq!(latest, sort_posts(&posts, SortOrder::Oldest));
    }

    #[test]
    fn sort_is_stable_for_tied_timestamps() {
        let posts = vec![
            post("x", "2025-07-30T09:00:00Z"),
            post("early", "2025-07-29T09:00:00Z"),
            post("y", "2025-07-30T09:00:00Z"),
            post("z", "2025-07-30T09:00:00Z"),
        ];

        let latest = sort_posts(&posts, SortOrder::Latest);
        let oldest = sort_posts(&posts, SortOrder::Oldest);
        assert_eq!(post_ids(&latest), vec!["x", "y", "z", "early"]);
        assert_eq!(post_ids(&oldest), vec!["early", "x", "y", "z"]);
    }

    #[test]
    fn sort_order_parses_and_toggles() {
        assert_eq!("oldest".parse::<SortOrder>(), Ok(SortOrder::Oldest));
        assert!("newest".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::Latest.toggled(), SortOrder::Oldest);
    }
}
