//! GitHub API error types

use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Octocrab library error (transport or response decoding)
    #[error("Octocrab error: {0}")]
    Octocrab(#[from] octocrab::Error),

    /// Generic GitHub API error
    #[error("GitHub API error: {0}")]
    Api(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation exceeded the configured API timeout
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),

    /// The spawned operation dropped its channel before completing
    #[error("Operation task dropped before completing")]
    TaskDropped,
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

// Convenience conversions
impl From<String> for GitHubError {
    fn from(s: String) -> Self {
        GitHubError::Api(s)
    }
}

impl From<&str> for GitHubError {
    fn from(s: &str) -> Self {
        GitHubError::Api(s.to_string())
    }
}

impl From<oneshot::error::RecvError> for GitHubError {
    fn from(_: oneshot::error::RecvError) -> Self {
        GitHubError::TaskDropped
    }
}
