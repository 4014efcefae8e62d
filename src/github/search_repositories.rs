//! Repository search operation.

use crate::github::config::ClientConfig;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::{Repository, SearchResponse};
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Search repositories matching a query in GitHub search syntax.
///
/// The query is URL-encoded into the `q` parameter of
/// `GET /search/repositories`.
///
/// # Errors
///
/// Returns `GitHubError::InvalidInput` if the query is empty, and
/// `GitHubError::Octocrab` if the request or response decoding fails.
pub(crate) fn search_repositories(
    inner: Arc<Octocrab>,
    config: ClientConfig,
    query: impl Into<String>,
) -> AsyncTask<GitHubResult<Vec<Repository>>> {
    let query = query.into();

    spawn_task(async move {
        if query.trim().is_empty() {
            return Err(GitHubError::InvalidInput(
                "search query cannot be empty".into(),
            ));
        }

        let url = format!(
            "/search/repositories?q={}&per_page={}",
            urlencoding::encode(&query),
            config.per_page
        );

        let response: SearchResponse =
            tokio::time::timeout(config.api_timeout, inner.get(url, None::<&()>))
                .await
                .map_err(|_| GitHubError::Timeout(config.api_timeout))?
                .map_err(GitHubError::from)?;

        Ok(response.items)
    })
}
