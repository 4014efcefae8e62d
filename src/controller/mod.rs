//! UI-facing state controllers.
//!
//! Each controller owns its state and mutates it exclusively through its own
//! async operations. Transport failures are caught here and converted into
//! local state; controller operations never return errors to the caller.
//! Operations take `&mut self`, which confines all state mutation to one
//! logical execution context.

pub mod detail;
pub mod display;
pub mod listing;
pub mod owner;

pub use detail::DetailController;
pub use display::DisplayState;
pub use listing::ListingController;
pub use owner::OwnerController;

use crate::github::GitHubResult;
use crate::runtime::AsyncTask;

/// Await a transport operation, collapsing a dropped task into the error
/// path so controllers have a single failure branch.
pub(crate) async fn resolve<T>(task: AsyncTask<GitHubResult<T>>) -> GitHubResult<T>
where
    T: Send + 'static,
{
    task.await.unwrap_or_else(|e| Err(e.into()))
}
