//! Configuration module

use std::time::Duration;

use crate::constants;
use crate::error::ConfigError;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Analysis Service base URL (e.g. http://localhost:8000/api)
    pub api_url: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Max failure notices kept per session
    pub notice_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            notice_capacity: constants::DEFAULT_NOTICE_CAPACITY,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: constants::get_api_url(),
            timeout_secs: constants::get_timeout_secs(),
            notice_capacity: constants::get_notice_capacity(),
        }
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.api_url.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.notice_capacity == 0 {
            return Err(ConfigError::ZeroNoticeCapacity);
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim().trim_end_matches('/')
    }
}
