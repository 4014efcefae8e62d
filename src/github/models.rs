//! Wire models for the GitHub repository browsing API.
//!
//! Field names match the GitHub JSON keys exactly; unknown response keys
//! are ignored. Absent numeric fields are treated as zero by every derived
//! accessor, never as missing.

use serde::{Deserialize, Serialize};

/// Star count at or above which a repository counts as popular.
const POPULAR_THRESHOLD: u64 = 1000;

/// Star-rating bucket width: one rating point per this many stars.
const RATING_BUCKET: u64 = 2000;

/// Maximum star rating.
const RATING_CAP: u64 = 5;

/// A repository record as returned by the GitHub API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: Option<String>,
    pub owner: Option<Owner>,
    pub description: Option<String>,
    pub forks_count: Option<u64>,
    pub stargazers_count: Option<u64>,
}

impl Repository {
    /// Star count, absent treated as zero.
    #[inline]
    #[must_use]
    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    /// Fork count, absent treated as zero.
    #[inline]
    #[must_use]
    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    /// Whether the repository crosses the popularity threshold (1000 stars).
    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.stars() >= POPULAR_THRESHOLD
    }

    /// Rating bucket: one point per 2000 stars, capped at 5.
    #[must_use]
    pub fn star_rating(&self) -> u64 {
        (self.stars() / RATING_BUCKET).min(RATING_CAP)
    }

    /// The star rating rendered as `★` glyphs.
    #[must_use]
    pub fn star_glyphs(&self) -> String {
        "★".repeat(self.star_rating() as usize)
    }

    /// Display label for the fork count.
    #[must_use]
    pub fn fork_label(&self) -> String {
        format!("{} forks", self.forks())
    }

    /// Case-insensitive substring match of `query` against name and
    /// description.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        let hit = |field: Option<&str>| field.is_some_and(|s| s.to_lowercase().contains(&needle));
        hit(self.name.as_deref()) || hit(self.description.as_deref())
    }
}

/// A repository owner. Immutable value type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: u64,
    pub login: Option<String>,
    pub avatar_url: Option<String>,
}

/// Top-level shape of a `/search/repositories` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub items: Vec<Repository>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(stars: Option<u64>, forks: Option<u64>) -> Repository {
        Repository {
            id: 1,
            name: Some("alamofire".to_string()),
            owner: None,
            description: None,
            forks_count: forks,
            stargazers_count: stars,
        }
    }

    #[test]
    fn decodes_repository_from_api_keys() {
        let json = r#"{
            "id": 44838949,
            "name": "swift",
            "owner": {
                "id": 10639145,
                "login": "swiftlang",
                "avatar_url": "https://avatars.githubusercontent.com/u/10639145"
            },
            "description": "The Swift Programming Language",
            "forks_count": 10536,
            "stargazers_count": 68012,
            "watchers_count": 68012,
            "default_branch": "main"
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("decode repository");
        assert_eq!(repo.id, 44838949);
        assert_eq!(repo.name.as_deref(), Some("swift"));
        assert_eq!(repo.stars(), 68012);
        assert_eq!(repo.forks(), 10536);
        let owner = repo.owner.expect("owner present");
        assert_eq!(owner.id, 10639145);
        assert_eq!(owner.login.as_deref(), Some("swiftlang"));
        assert_eq!(
            owner.avatar_url.as_deref(),
            Some("https://avatars.githubusercontent.com/u/10639145")
        );
    }

    #[test]
    fn decodes_search_response_items() {
        let json = r#"{
            "total_count": 2,
            "incomplete_results": false,
            "items": [
                {"id": 1, "name": "a"},
                {"id": 2}
            ]
        }"#;

        let resp: SearchResponse = serde_json::from_str(json).expect("decode search response");
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].name.as_deref(), Some("a"));
        assert_eq!(resp.items[1].name, None);
    }

    #[test]
    fn absent_counts_read_as_zero() {
        let r = repo(None, None);
        assert_eq!(r.stars(), 0);
        assert_eq!(r.forks(), 0);
        assert!(!r.is_popular());
        assert_eq!(r.star_rating(), 0);
    }

    #[test]
    fn popularity_boundary() {
        assert!(!repo(Some(999), None).is_popular());
        assert!(repo(Some(1000), None).is_popular());
    }

    #[test]
    fn star_rating_buckets_and_cap() {
        assert_eq!(repo(Some(0), None).star_rating(), 0);
        assert_eq!(repo(Some(1999), None).star_rating(), 0);
        assert_eq!(repo(Some(2000), None).star_rating(), 1);
        assert_eq!(repo(Some(9999), None).star_rating(), 4);
        assert_eq!(repo(Some(12500), None).star_rating(), 5);
        assert_eq!(repo(Some(1_000_000), None).star_rating(), 5);
        assert_eq!(repo(Some(12500), None).star_glyphs(), "★★★★★");
    }

    #[test]
    fn fork_label_formats_count() {
        assert_eq!(repo(None, Some(42)).fork_label(), "42 forks");
        assert_eq!(repo(None, None).fork_label(), "0 forks");
    }

    #[test]
    fn query_match_is_case_insensitive_over_name_and_description() {
        let ui = Repository {
            id: 1,
            name: Some("SnapKit".to_string()),
            owner: None,
            description: Some("UI Framework".to_string()),
            forks_count: None,
            stargazers_count: None,
        };
        let reactive = Repository {
            id: 2,
            name: Some("RxSwift".to_string()),
            owner: None,
            description: Some("Reactive Framework".to_string()),
            forks_count: None,
            stargazers_count: None,
        };

        assert!(ui.matches_query("framework"));
        assert!(reactive.matches_query("framework"));
        assert!(ui.matches_query("snap"));
        assert!(!ui.matches_query("reactive"));
        assert!(!repo(None, None).matches_query("framework"));
    }
}
