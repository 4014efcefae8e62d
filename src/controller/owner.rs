//! Owner profile controller.

use crate::controller::resolve;
use crate::github::{Owner, Repository, RepositoryProvider};
use log::warn;
use std::sync::Arc;

const UNKNOWN_USER: &str = "Unknown User";

/// Owns an owner identity and the re-fetched listing of that owner's
/// repositories, with aggregate accessors for display.
///
/// The owner value is fixed at construction and never mutated.
pub struct OwnerController {
    provider: Arc<dyn RepositoryProvider>,
    owner: Owner,
    repositories: Vec<Repository>,
    is_loading: bool,
    error_message: Option<String>,
}

impl OwnerController {
    #[must_use]
    pub fn new(provider: Arc<dyn RepositoryProvider>, owner: Owner) -> Self {
        Self {
            provider,
            owner,
            repositories: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }

    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Fetch this owner's repositories via a `user:{login}` search.
    ///
    /// An absent login substitutes as the empty string. On failure the
    /// current sequence stays as it was and the error message carries a
    /// user-facing description. The loading flag drops on both paths.
    pub async fn fetch_repositories(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        let query = format!("user:{}", self.owner.login.as_deref().unwrap_or(""));

        match resolve(self.provider.search_repositories(&query)).await {
            Ok(repositories) => {
                self.repositories = repositories;
            }
            Err(e) => {
                warn!("owner listing fetch failed for {}: {e}", self.owner_name());
                self.error_message = Some(format!("Failed to load repositories: {e}"));
            }
        }

        self.is_loading = false;
    }

    /// Sum of star counts across the owner's repositories, absent as zero.
    #[must_use]
    pub fn total_stars(&self) -> u64 {
        self.repositories.iter().map(Repository::stars).sum()
    }

    #[must_use]
    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }

    /// Owner login, or a fixed default when absent.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.owner.login.as_deref().unwrap_or(UNKNOWN_USER)
    }

    /// A new sequence sorted descending by star count, for display.
    /// Never mutates the stored listing.
    #[must_use]
    pub fn sorted_repositories(&self) -> Vec<Repository> {
        let mut sorted = self.repositories.clone();
        sorted.sort_by(|a, b| b.stars().cmp(&a.stars()));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::test_support::{StubProvider, repo};

    fn owner(login: Option<&str>) -> Owner {
        Owner {
            id: 42,
            login: login.map(String::from),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn fetch_queries_by_owner_login() {
        let stub = Arc::new(StubProvider::with_search(Ok(vec![
            repo(1, 10, 0),
            repo(2, 20, 0),
        ])));
        let mut c = OwnerController::new(stub.clone(), owner(Some("onevcat")));

        c.fetch_repositories().await;

        assert_eq!(stub.last_query().as_deref(), Some("user:onevcat"));
        assert_eq!(c.repository_count(), 2);
        assert!(!c.is_loading());
        assert_eq!(c.error_message(), None);
    }

    #[tokio::test]
    async fn fetch_with_absent_login_sends_bare_qualifier() {
        let stub = Arc::new(StubProvider::default());
        let mut c = OwnerController::new(stub.clone(), owner(None));

        c.fetch_repositories().await;

        assert_eq!(stub.last_query().as_deref(), Some("user:"));
    }

    #[tokio::test]
    async fn fetch_failure_preserves_listing_and_drops_loading_flag() {
        let stub = Arc::new(StubProvider::with_search(Ok(vec![repo(1, 10, 0)])));
        let mut c = OwnerController::new(stub.clone(), owner(Some("onevcat")));
        c.fetch_repositories().await;
        assert_eq!(c.repository_count(), 1);

        stub.set_search(Err("offline".to_string()));
        c.fetch_repositories().await;

        assert_eq!(c.repository_count(), 1);
        assert!(!c.is_loading());
        assert_eq!(
            c.error_message(),
            Some("Failed to load repositories: GitHub API error: offline")
        );
    }

    #[test]
    fn total_stars_sums_with_absent_as_zero() {
        let stub = Arc::new(StubProvider::default());
        let mut c = OwnerController::new(stub, owner(Some("onevcat")));
        let mut unstarred = repo(3, 0, 0);
        unstarred.stargazers_count = None;
        c.repositories = vec![repo(1, 1200, 0), repo(2, 300, 0), unstarred];

        assert_eq!(c.total_stars(), 1500);
        assert_eq!(c.repository_count(), 3);
    }

    #[test]
    fn sorted_repositories_is_descending_and_non_mutating() {
        let stub = Arc::new(StubProvider::default());
        let mut c = OwnerController::new(stub, owner(Some("onevcat")));
        c.repositories = vec![repo(1, 300, 0), repo(2, 1200, 0), repo(3, 700, 0)];

        let sorted = c.sorted_repositories();
        let ids: Vec<u64> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        // the stored sequence keeps its order
        let stored: Vec<u64> = c.repositories().iter().map(|r| r.id).collect();
        assert_eq!(stored, vec![1, 2, 3]);
    }

    #[test]
    fn owner_name_falls_back_when_login_absent() {
        let stub = Arc::new(StubProvider::default());
        let named = OwnerController::new(stub.clone(), owner(Some("onevcat")));
        let anonymous = OwnerController::new(stub, owner(None));

        assert_eq!(named.owner_name(), "onevcat");
        assert_eq!(anonymous.owner_name(), "Unknown User");
    }
}
