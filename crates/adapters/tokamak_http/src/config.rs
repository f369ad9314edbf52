//! Tokamak backend configuration.

use std::time::Duration;

use serde::Deserialize;

/// Where and how to reach the Tokamak API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokamakConfig {
    /// Base URL of the API, without the `/v1` suffix.
    pub endpoint: String,
    /// Bearer token sent with every request.
    pub access_token: Option<String>,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl TokamakConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for TokamakConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9000".to_string(),
            access_token: None,
            timeout_secs: 10,
        }
    }
}
