//! Error type for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses, and malformed bodies all collapse
//! into one enum whose `Display` is a single human-readable line, so pages
//! can show any failure directly. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by [`ApiClient`](super::api::ApiClient) calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message} (HTTP {status})")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided `message` field, or a generic fallback.
        message: String,
    },
    /// A 401 on a non-auth endpoint; credentials have been cleared and the
    /// browser is navigating to the login page.
    #[error("unauthorized - redirecting to login")]
    Unauthorized,
    /// The response body could not be decoded as the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// HTTP calls are only available in the browser; server-rendered and
    /// native test builds get this stub error.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a [`ApiError::Status`] from a status code and the optional
    /// server-provided message, falling back to a generic message.
    #[must_use]
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status {
            status,
            message: message.unwrap_or_else(|| "API error".to_owned()),
        }
    }
}
