//! Repository details retrieval operation.

use crate::github::config::ClientConfig;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::models::Repository;
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use octocrab::Octocrab;
use std::sync::Arc;

/// Fetch a single repository by its numeric id.
///
/// Uses the id-addressed `GET /repositories/{id}` endpoint, so the record
/// stays reachable across renames.
pub(crate) fn get_repository(
    inner: Arc<Octocrab>,
    config: ClientConfig,
    id: u64,
) -> AsyncTask<GitHubResult<Repository>> {
    spawn_task(async move {
        let url = format!("/repositories/{id}");

        let repository: Repository =
            tokio::time::timeout(config.api_timeout, inner.get(url, None::<&()>))
                .await
                .map_err(|_| GitHubError::Timeout(config.api_timeout))?
                .map_err(GitHubError::from)?;

        Ok(repository)
    })
}
