//! Application configuration loaded from environment variables.

use crate::errors::{ClientError, Result};

/// Base URL of the donation API, used when `API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "https://frontend-assignment-api.goodrequest.dev/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Donation API endpoint (e.g. https://frontend-assignment-api.goodrequest.dev/api/v1)
    pub api_base_url: String,
    /// Timeout applied to every outbound request, in seconds
    pub request_timeout_secs: u64,
    /// How often (in seconds) to refresh the cached shelter directory
    pub shelters_refresh_secs: u64,
    /// How often (in seconds) consumers should re-read the aggregate results
    pub results_refresh_secs: u64,
    /// Locale tag for user-facing strings ("sk" or "en")
    pub locale: String,
}

impl Config {
    /// Load an optional `.env` file (ignored if missing), then read the
    /// configuration from the environment.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Ok(Config {
            api_base_url: env_var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            request_timeout_secs: env_var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| ClientError::Config("Invalid REQUEST_TIMEOUT_SECS".to_string()))?,
            shelters_refresh_secs: env_var("SHELTERS_REFRESH_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .map_err(|_| ClientError::Config("Invalid SHELTERS_REFRESH_SECS".to_string()))?,
            results_refresh_secs: env_var("RESULTS_REFRESH_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .map_err(|_| ClientError::Config("Invalid RESULTS_REFRESH_SECS".to_string()))?,
            locale: env_var("LOCALE").unwrap_or_else(|_| "sk".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            shelters_refresh_secs: 300,
            results_refresh_secs: 60,
            locale: "sk".to_string(),
        }
    }
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| ClientError::Config(format!("Missing env var: {key}")))
}
