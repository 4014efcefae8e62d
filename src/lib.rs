//! `repolens` - GitHub repository browsing service layer
//!
//! This library provides the state and transport layers of a GitHub
//! repository browser: category listings, free-text search, star/fork
//! sorting, and per-repository and per-owner detail state. Transport goes
//! through a thin octocrab-backed client; the controllers own all UI-facing
//! state and drive it exclusively through their own async operations.

// Module declarations
pub mod controller;
pub mod github;
pub mod runtime;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, RepositoryProvider};

// Re-export GitHub error types
pub use github::{GitHubError, GitHubResult};

// Re-export domain types
pub use github::{Category, ClientConfig, Owner, Repository};

// Re-export controllers
pub use controller::{DetailController, DisplayState, ListingController, OwnerController};
