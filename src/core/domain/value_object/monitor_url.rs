use crate::core::domain::error::ValidationError;
use crate::core::domain::value_object::{MonitorHost, MonitorPort};

// RFC 7230 practical limit, same bound most HTTP stacks apply.
const MAX_URL_LENGTH: usize = 2083;

/// A validated base URL for the status CGI directory.
///
/// Composed from host, port, scheme, and the CGI base path (e.g.
/// `https://nagios.example.com:443/nagios4/cgi-bin/`). Query URLs are
/// built on top of this by the API client.
#[derive(Debug, Clone)]
pub struct MonitorUrl(String);

impl MonitorUrl {
    /// Creates a new URL without validation.
    pub(crate) fn new_unchecked(url: String) -> Self {
        Self(url)
    }

    /// Composes the base URL string from its validated parts.
    pub(crate) fn compose(
        host: &MonitorHost,
        port: MonitorPort,
        secure: bool,
        base_path: &str,
    ) -> String {
        let scheme = if secure { "https" } else { "http" };
        let path = base_path.trim_matches('/');
        format!("{}://{}:{}/{}/", scheme, host.as_str(), port.get(), path)
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validates a base URL: well-formed, http(s), bounded length.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(url)
        .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;

    if parsed.scheme() != "https" && parsed.scheme() != "http" {
        return Err(ValidationError::ConstraintViolation(
            "Invalid scheme. Must be one of: https, http".to_string(),
        ));
    }

    Ok(())
}
