//! Route paths, API endpoints, and client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Paths are constants rather than free strings so the bootstrap policy,
//! the API client, and the router all agree on where things live. The
//! server owns the actual routes; these mirror them.

/// Login page route, also the credential-login POST endpoint.
pub const LOGIN_PATH: &str = "/auth/login";

/// Signup page route, also the signup POST endpoint.
pub const SIGNUP_PATH: &str = "/auth/signup";

/// Root of the auth section; recognized by the bootstrap as an auth page.
pub const AUTH_INDEX_PATH: &str = "/auth";

/// Authenticated landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Profile and password settings page.
pub const SETTINGS_PATH: &str = "/settings";

/// Server-owned Google OAuth entry point; reached by full-page navigation.
pub const GOOGLE_AUTH_PATH: &str = "/auth/google";

/// Lightweight session validation endpoint used by the bootstrap.
pub const SESSION_SYNC_ENDPOINT: &str = "/auth/session_sync";

/// Best-effort logout notification endpoint.
pub const LOGOUT_ENDPOINT: &str = "/auth/logout";

/// Profile read/update endpoint.
pub const PROFILE_ENDPOINT: &str = "/settings/api/profile";

/// Password change endpoint.
pub const PASSWORD_ENDPOINT: &str = "/settings/api/password";

/// Upcoming calendar events for the dashboard.
pub const CALENDAR_ENDPOINT: &str = "/dashboard/calendar";

/// API client configuration.
///
/// The base URL is prepended to every endpoint path. The default is the
/// empty string: same-origin requests against whatever host served the app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Configuration pointing at an explicit API host, e.g. for a split
    /// frontend/backend deployment.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Base URL prefix, without a trailing slash. Empty for same-origin.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
