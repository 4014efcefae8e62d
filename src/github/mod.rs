//! GitHub API operations module
//!
//! Provides the repository browsing operations using the octocrab library.

pub mod category;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod util;

// Re-export client types
pub use client::{GitHubClient, GitHubClientBuilder, RepositoryProvider};

// Re-export error types
pub use error::{GitHubError, GitHubResult};
pub use util::spawn_task;

// Re-export domain types
pub use category::Category;
pub use config::ClientConfig;
pub use models::{Owner, Repository};

// GitHub API operations (internal)
pub(crate) mod fetch_repositories;
pub(crate) mod get_repository;
pub(crate) mod search_repositories;
