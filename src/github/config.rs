//! Configuration for GitHub API operations

use std::time::Duration;

/// Configuration for GitHub API operations
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Results requested per API page.
    pub per_page: u8,
    /// Timeout applied to each API request.
    pub api_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            per_page: 30,
            api_timeout: Duration::from_secs(10),
        }
    }
}
