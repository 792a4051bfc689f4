//! API Configuration Module
//!
//! Configuration for CORS and static asset serving. Loaded from environment
//! variables with permissive defaults for development, matching the
//! allow-all CORS posture the front-end expects.

use std::path::PathBuf;

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for CORS and static file serving.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Directory holding the pre-built front-end served at `/`.
    pub public_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(), // Empty = allow all
            public_dir: PathBuf::from("public"),
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `STUDYAI_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `STUDYAI_PUBLIC_DIR`: Static asset directory (default: "public")
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("STUDYAI_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let public_dir = std::env::var("STUDYAI_PUBLIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Self {
            cors_origins,
            public_dir,
        }
    }

    /// Path of the landing page served for `GET /`.
    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_index_file() {
        let config = ApiConfig {
            public_dir: PathBuf::from("assets"),
            ..ApiConfig::default()
        };
        assert_eq!(config.index_file(), PathBuf::from("assets/index.html"));
    }
}
