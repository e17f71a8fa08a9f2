//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default Analysis Service, only edit this file.

/// Default Analysis Service base URL
///
/// This is the fallback URL when no environment variable is set.
/// The FastAPI backend mounts its router under `/api`.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default HTTP timeout (seconds)
///
/// Re-evaluation re-runs the AI advisory, which can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of failure notices kept in a session
pub const DEFAULT_NOTICE_CAPACITY: usize = 20;

/// Endpoint paths (relative to the base URL)
pub const ANALYZE_PATH: &str = "/analyze";
pub const RE_EVALUATE_PATH: &str = "/analyze/re-evaluate";
pub const CHAT_PATH: &str = "/chat";

/// Multipart field name for dataset uploads
pub const UPLOAD_FIELD: &str = "file";

/// Env var names
pub const ENV_API_URL: &str = "FINAUDIT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "FINAUDIT_TIMEOUT_SECS";
pub const ENV_NOTICE_CAPACITY: &str = "FINAUDIT_NOTICE_CAPACITY";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "FinAUDIT";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get Analysis Service URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var(ENV_API_URL)
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get HTTP timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var(ENV_TIMEOUT_SECS)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Get notice log capacity from environment or use default
pub fn get_notice_capacity() -> usize {
    std::env::var(ENV_NOTICE_CAPACITY)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_NOTICE_CAPACITY)
}
