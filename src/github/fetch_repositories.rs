//! Category listing operation.

use crate::github::category::Category;
use crate::github::config::ClientConfig;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::{Repository, SearchResponse};
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch the repository listing for a category.
///
/// Issues `GET /search/repositories` with the category's listing query
/// (`"{category} language:swift"`) and returns the decoded `items`.
pub(crate) fn fetch_repositories(
    inner: Arc<Octocrab>,
    config: ClientConfig,
    category: Category,
) -> AsyncTask<GitHubResult<Vec<Repository>>> {
    spawn_task(async move {
        let query = category.listing_query();
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
