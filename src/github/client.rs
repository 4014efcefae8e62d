//! GitHub API client wrapper
//!
//! Provides clean API for the repository browsing operations without
//! exposing Octocrab.
//!
//! # Examples
//!
//! ```rust,no_run
//! use repolens::{Category, GitHubClient, RepositoryProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let repos = gh.fetch_repositories(Category::Ios).await??;
//!     for repo in repos {
//!         println!("{}: {}", repo.name.as_deref().unwrap_or("?"), repo.stars());
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::github::category::Category;
use crate::github::config::ClientConfig;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::Repository;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// The transport seam consumed by the controllers.
///
/// Controllers receive an implementation at construction; tests substitute
/// a stub.
pub trait RepositoryProvider: Send + Sync {
    /// Fetch the primary listing for a category.
    fn fetch_repositories(&self, category: Category) -> AsyncTask<GitHubResult<Vec<Repository>>>;

    /// Search repositories with a query in GitHub search syntax.
    fn search_repositories(&self, query: &str) -> AsyncTask<GitHubResult<Vec<Repository>>>;

    /// Fetch a single repository by numeric id.
    fn get_repository(&self, id: u64) -> AsyncTask<GitHubResult<Repository>>;
}

/// GitHub API client wrapper that encapsulates Octocrab.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    inner: Arc<Octocrab>,
    config: ClientConfig,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Convenience: create an unauthenticated client
    pub fn anonymous() -> GitHubResult<Self> {
        Self::builder().build()
    }

    /// Get inner Octocrab client
    #[must_use]
    pub fn inner(&self) -> &Arc<Octocrab> {
        &self.inner
    }
}

impl RepositoryProvider for GitHubClient {
    fn fetch_repositories(&self, category: Category) -> AsyncTask<GitHubResult<Vec<Repository>>> {
        crate::github::fetch_repositories::fetch_repositories(
            self.inner.clone(),
            self.config.clone(),
            category,
        )
    }

    fn search_repositories(&self, query: &str) -> AsyncTask<GitHubResult<Vec<Repository>>> {
        crate::github::search_repositories::search_repositories(
            self.inner.clone(),
            self.config.clone(),
            query,
        )
    }

    fn get_repository(&self, id: u64) -> AsyncTask<GitHubResult<Repository>> {
        crate::github::get_repository::get_repository(self.inner.clone(), self.config.clone(), id)
    }
}

/// Builder for creating `GitHubClient` with optional authentication
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    config: ClientConfig,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            config: ClientConfig::default(),
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Override the operation configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        let mut builder = Octocrab::builder();

        if let Some(token) = self.token {
            builder = builder.personal_token(token);
        }

        if let Some(uri) = self.base_uri {
            builder = builder
                .base_uri(&uri)
                .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(GitHubClient {
            inner: Arc::new(octocrab),
            config: self.config,
        })
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
