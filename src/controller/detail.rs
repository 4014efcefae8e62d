//! Repository detail controller.

use crate::controller::resolve;
use crate::github::{Repository, RepositoryProvider};
use log::warn;
use std::sync::Arc;

const UNKNOWN_OWNER: &str = "Unknown Owner";
const UNNAMED_REPOSITORY: &str = "Unnamed Repository";

/// Owns a single repository record and a refresh operation that replaces it.
///
/// The derived accessors are pure reads of the current record and fall back
/// to fixed defaults when optional fields are absent.
pub struct DetailController {
    provider: Arc<dyn RepositoryProvider>,
    repository: Repository,
    is_loading: bool,
    error_message: Option<String>,
    is_description_expanded: bool,
}

impl DetailController {
    /// Create a controller around an already-fetched record.
    #[must_use]
    pub fn new(provider: Arc<dyn RepositoryProvider>, repository: Repository) -> Self {
        Self {
            provider,
            repository,
            is_loading: false,
            error_message: None,
            is_description_expanded: false,
        }
    }

    #[must_use]
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    #[must_use]
    pub fn is_description_expanded(&self) -> bool {
        self.is_description_expanded
    }

    /// Flip the description expansion flag. Pure UI state.
    pub fn toggle_description(&mut self) {
        self.is_description_expanded = !self.is_description_expanded;
    }

    /// Re-fetch the record by its current id and replace it wholesale.
    ///
    /// On failure the record is left untouched and the error message carries
    /// a user-facing description. The loading flag drops on both paths.
    pub async fn refresh(&mut self) {
        self.is_loading = true;
        self.error_message = None;

        match resolve(self.provider.get_repository(self.repository.id)).await {
            Ok(repository) => {
                self.repository = repository;
            }
            Err(e) => {
                warn!("detail refresh failed for {}: {e}", self.repository.id);
                self.error_message = Some(format!("Failed to refresh repository: {e}"));
            }
        }

        self.is_loading = false;
    }

    /// Owner login, or a fixed default when absent.
    #[must_use]
    pub fn owner_name(&self) -> &str {
        self.repository
            .owner
            .as_ref()
            .and_then(|o| o.login.as_deref())
            .unwrap_or(UNKNOWN_OWNER)
    }

    /// Repository name, or a fixed default when absent.
    #[must_use]
    pub fn repository_name(&self) -> &str {
        self.repository.name.as_deref().unwrap_or(UNNAMED_REPOSITORY)
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.repository.description.as_deref()
    }

    /// Star count as a decimal string.
    #[must_use]
    pub fn star_count(&self) -> String {
        self.repository.stars().to_string()
    }

    /// Fork count as a decimal string.
    #[must_use]
    pub fn fork_count(&self) -> String {
        self.repository.forks().to_string()
    }

    #[must_use]
    pub fn is_popular(&self) -> bool {
        self.repository.is_popular()
    }

    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.repository
            .owner
            .as_ref()
            .and_then(|o| o.avatar_url.as_deref())
    }

    /// The repository's page on github.com, built from the fallback-bearing
    /// name accessors.
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!(
            "https://github.com/{}/{}",
            self.owner_name(),
            self.repository_name()
        )
    }
}
