//! Primary listing controller: category listings, search, sorting.

use crate::controller::display::DisplayState;
use crate::controller::resolve;
use crate::github::category::LANGUAGE_QUALIFIER;
use crate::github::{Category, Repository, RepositoryProvider};
use log::{debug, warn};
use std::sync::Arc;

/// Owns the primary listing, the search results, and the query/category
/// inputs driving them.
///
/// The two repository sequences are independent: fetching never touches the
/// search results, and a failed search never clears them. Sorting applies to
/// both at once.
pub struct ListingController {
    provider: Arc<dyn RepositoryProvider>,
    repositories: Vec<Repository>,
    search_results: Vec<Repository>,
    display_state: DisplayState,
    error_message: Option<String>,
    search_text: String,
    selected_category: Category,
}

impl ListingController {
    /// Create a controller with empty state and the default category.
    #[must_use]
    pub fn new(provider: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            provider,
            repositories: Vec::new(),
            search_results: Vec::new(),
            display_state: DisplayState::Idle,
            error_message: None,
            search_text: String::new(),
            selected_category: Category::default(),
        }
    }

    /// The primary listing for the selected category.
    #[must_use]
    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Results of the last explicit search.
    #[must_use]
    pub fn search_results(&self) -> &[Repository] {
        &self.search_results
    }

    #[must_use]
    pub fn display_state(&self) -> &DisplayState {
        &self.display_state
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    /// Fetch the primary listing for the selected category.
    ///
    /// Replaces `repositories` on success; on failure the display state and
    /// the error message carry the same user-facing text. Search results are
    /// left alone either way.
    pub async fn fetch_repositories(&mut self) {
        self.display_state = DisplayState::Loading;
        debug!(
            "fetching listing for category {}",
            self.selected_category.as_str()
        );

        match resolve(self.provider.fetch_repositories(self.selected_category)).await {
            Ok(repositories) => {
                self.repositories = repositories;
                self.display_state = DisplayState::Success;
            }
            Err(e) => {
                warn!("listing fetch failed: {e}");
                let message = e.to_string();
                self.error_message = Some(message.clone());
                self.display_state = DisplayState::Error(message);
            }
        }
    }

    /// Run an explicit search over the current search text.
    ///
    /// A query that trims to nothing empties the results without issuing a
    /// call and without touching any error state. Otherwise the provider is
    /// queried with `"{query} language:swift {category}"`; a failure keeps
    /// the previous results.
    pub async fn search_repositories(&mut self) {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            self.search_results.clear();
            return;
        }

        let query = format!(
            "{trimmed} {LANGUAGE_QUALIFIER} {}",
            self.selected_category.as_str()
        );

        match resolve(self.provider.search_repositories(&query)).await {
            Ok(results) => {
                self.search_results = results;
            }
            Err(e) => {
                warn!("search failed: {e}");
                self.error_message = Some(format!("Search failed: {e}"));
            }
        }
    }

    /// Sort both sequences by star count.
    pub fn sort_by_stars(&mut self, ascending: bool) {
        sort_listing(&mut self.repositories, ascending, Repository::stars);
        sort_listing(&mut self.search_results, ascending, Repository::stars);
    }

    /// Sort both sequences by fork count.
    pub fn sort_by_forks(&mut self, ascending: bool) {
        sort_listing(&mut self.repositories, ascending, Repository::forks);
        sort_listing(&mut self.search_results, ascending, Repository::forks);
    }
}

/// Stable in-place sort by a numeric key; equal keys keep their order in
/// both directions.
fn sort_listing(repositories: &mut [Repository], ascending: bool, key: impl Fn(&Repository) -> u64) {
    repositories.sort_by(|a, b| {
        let order = key(a).cmp(&key(b));
        if ascending { order } else { order.reverse() }
    });
}
