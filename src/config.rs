//! Client-level configuration.

use std::time::Duration;

/// Client-side rate limiting for outgoing status queries.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Sustained request rate.
    pub requests_per_second: u32,
    /// Burst capacity above the sustained rate.
    pub burst_size: u32,
}

/// Configuration for client construction and credential validation.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Optional client-side rate limiting. `None` disables it.
    pub rate_limit: Option<RateLimitConfig>,
    /// Per-request timeout applied to the HTTP client.
    pub request_timeout: Duration,
    /// Optional zxcvbn strength floor for the basic-auth password.
    /// `None` accepts anything the backend accepts.
    pub password_min_score: Option<zxcvbn::Score>,
    /// Reject well-known reserved usernames at build time.
    pub block_reserved_usernames: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rate_limit: None,
            request_timeout: Duration::from_secs(30),
            password_min_score: None,
            block_reserved_usernames: false,
        }
    }
}
