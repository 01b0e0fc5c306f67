//! Response DTOs for the JSON API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field so serde
//! does all the shaping. Request bodies are small enough to build inline
//! with `serde_json::json!`; endpoints that only ever answer
//! `{ "message" }` share [`ApiMessage`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Generic `{ "message": ... }` body used by most error responses and a
/// few acknowledgement-only endpoints (logout, profile update).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApiMessage {
    /// Human-readable server message, when the server sent one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful login response, `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to persist for subsequent calls.
    pub token: String,
    /// Display name of the signed-in user.
    pub user_name: String,
}

/// Successful signup response, `POST /auth/signup` (HTTP 201).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SignupResponse {
    /// Bearer token for the freshly created account.
    pub token: String,
    /// Identifier of the new user record.
    pub user_id: String,
}

/// Profile as served by `GET /settings/api/profile`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Profile {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account email; read-only on the client.
    #[serde(default)]
    pub email: Option<String>,
    /// Working role used to tailor generated content.
    #[serde(default)]
    pub role: Option<String>,
    /// Preferred writing tone.
    #[serde(default)]
    pub tone: Option<String>,
    /// Avatar image URL, if the account has one.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// One upcoming event from `GET /dashboard/calendar`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CalendarEvent {
    /// Event title.
    pub summary: String,
    /// Start time as sent by the calendar provider (RFC 3339 date or
    /// datetime); rendered verbatim.
    pub start: String,
    /// Link to the event in the provider's UI, if available.
    #[serde(default)]
    pub link: Option<String>,
}
