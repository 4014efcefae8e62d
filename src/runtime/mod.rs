//! Runtime module
//!
//! Provides the async task handle used by transport operations.

pub mod async_task;

pub use async_task::AsyncTask;
