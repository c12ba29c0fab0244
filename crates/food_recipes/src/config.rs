use std::{env, time::Duration};

use food_recipes_core::page::{PageConfig, DEFAULT_LIMIT, DEFAULT_MAX_RESULTS};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Size of the result window for listings (default: 50)
    pub default_max_results: usize,
    /// Page size when the caller gives no limit (default: 20)
    pub default_limit: usize,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Load demo recipes on startup (default: false)
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEFAULT_MAX_RESULTS` - Result window size (default: 50)
    /// - `DEFAULT_LIMIT` - Default page size (default: 20)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `SEED_DEMO_DATA` - Load demo recipes, `true` or `1` (default: false)
    pub fn from_env() -> Self {
        Self {
            default_max_results: env::var("DEFAULT_MAX_RESULTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_RESULTS),
            default_limit: env::var("DEFAULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LIMIT),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| matches!(v.as_str(), "1" | "true"))
                .unwrap_or(false),
        }
    }

    /// Pagination settings for list endpoints.
    pub fn page_config(&self) -> PageConfig {
        PageConfig::new(self.default_limit, self.default_max_results)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_max_results: DEFAULT_MAX_RESULTS,
            default_limit: DEFAULT_LIMIT,
            request_timeout_seconds: 10,
            seed_demo_data: false,
        }
    }
}
