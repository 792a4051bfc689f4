//! Configuration for the StudyAI client.

use std::time::Duration;

/// Client configuration. Defaults target a local development server.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the StudyAI backend, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create a configuration from environment variables.
    ///
    /// - `STUDYAI_API_URL`: backend base URL (default `http://localhost:3000`)
    /// - `STUDYAI_API_TIMEOUT_MS`: request timeout in milliseconds (default 30000)
    pub fn from_env() -> Self {
        let base_url = std::env::var("STUDYAI_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let request_timeout = std::env::var("STUDYAI_API_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or_else(|| Duration::from_secs(30));

        Self {
            base_url,
            request_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
