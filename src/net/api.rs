//! Authenticated JSON API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every server call goes through [`ApiClient`]: it attaches the bearer
//! token from the session store, maps non-2xx responses to [`ApiError`],
//! and owns the 401 clear-and-redirect policy. Auth endpoints are exempt
//! from that policy so a rejected login cannot redirect the login page
//! onto itself.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side and
//! native test builds: calls answer [`ApiError::Unavailable`], and the
//! pure request-plan / status-mapping helpers carry the testable logic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{self, ApiConfig};
use crate::net::error::ApiError;
use crate::net::types::{ApiMessage, CalendarEvent, LoginResponse, Profile, SignupResponse};
use crate::session::navigator::Navigator;
use crate::session::store::SessionStore;

/// HTTP methods the API surface uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    /// The default when an operation does not say otherwise.
    #[default]
    Get,
    Post,
}

/// A fully prepared request: method, URL, headers, optional JSON body.
///
/// Splitting preparation from execution keeps the header and body rules
/// assertable without a browser.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RequestPlan {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Build the plan for a call to `endpoint`. Content type is always JSON;
/// the bearer authorization header rides along only when a token exists.
pub(crate) fn build_plan(
    base_url: &str,
    endpoint: &str,
    method: Method,
    token: Option<&str>,
    body: Option<Value>,
) -> RequestPlan {
    let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
    if let Some(token) = token {
        headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
    RequestPlan {
        method,
        url: format!("{base_url}{endpoint}"),
        headers,
        body,
    }
}

/// Endpoints whose 401 responses must not trigger the login redirect:
/// a 401 from these means "bad credentials", not "session expired".
#[cfg(any(test, feature = "hydrate"))]
const AUTH_ENDPOINTS: [&str; 3] = [
    config::LOGIN_PATH,
    config::SIGNUP_PATH,
    config::SESSION_SYNC_ENDPOINT,
];

/// Whether `endpoint` belongs to the auth surface. Prefix matching keeps
/// query-string variants covered.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn is_auth_endpoint(endpoint: &str) -> bool {
    AUTH_ENDPOINTS.iter().any(|auth| endpoint.starts_with(auth))
}

/// Map a non-2xx response to the error the caller sees.
///
/// A 401 on a non-auth endpoint clears the stored session and sends the
/// browser to the login page before failing the call; every other status
/// becomes [`ApiError::Status`] carrying the server message when present.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn map_error_status<S: SessionStore, N: Navigator>(
    store: &S,
    navigator: &N,
    endpoint: &str,
    status: u16,
    message: Option<String>,
) -> ApiError {
    if status == 401 && !is_auth_endpoint(endpoint) {
        log::warn!("unauthorized response from {endpoint}; clearing session and redirecting to login");
        store.clear();
        navigator.redirect(config::LOGIN_PATH);
        return ApiError::Unauthorized;
    }
    ApiError::status(status, message)
}

#[cfg(feature = "hydrate")]
async fn send_plan(plan: &RequestPlan) -> Result<gloo_net::http::Response, gloo_net::Error> {
    let mut builder = match plan.method {
        Method::Get => gloo_net::http::Request::get(&plan.url),
        Method::Post => gloo_net::http::Request::post(&plan.url),
    };
    for (name, value) in &plan.headers {
        builder = builder.header(name, value);
    }
    match &plan.body {
        Some(body) => builder.json(body)?.send().await,
        None => builder.send().await,
    }
}

/// Authenticated JSON API client over explicit storage and navigation
/// capabilities.
#[derive(Clone, Debug)]
pub struct ApiClient<S, N> {
    config: ApiConfig,
    store: S,
    navigator: N,
}

impl<S: SessionStore, N: Navigator> ApiClient<S, N> {
    /// Client using `config` for URL construction and the given
    /// capabilities for credentials and redirects.
    pub fn new(config: ApiConfig, store: S, navigator: N) -> Self {
        Self { config, store, navigator }
    }

    /// The session store this client reads tokens from.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The navigator this client redirects through.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Execute one JSON round-trip and decode the response as `T`.
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let plan = build_plan(
            self.config.base_url(),
            endpoint,
            method,
            self.store.token().as_deref(),
            body,
        );
        #[cfg(feature = "hydrate")]
        {
            let response = match send_plan(&plan).await {
                Ok(response) => response,
                Err(e) => return Err(ApiError::Network(e.to_string())),
            };
            if !response.ok() {
                let message = response
                    .json::<ApiMessage>()
                    .await
                    .ok()
                    .and_then(|m| m.message);
                return Err(map_error_status(
                    &self.store,
                    &self.navigator,
                    endpoint,
                    response.status(),
                    message,
                ));
            }
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = plan;
            Err(ApiError::Unavailable)
        }
    }

    /// Sign in with email and password, `POST /auth/login`.
    ///
    /// Persisting the returned token is the caller's job; this is
    /// transport only.
    ///
    /// # Errors
    ///
    /// `Status` with the server's message on rejected credentials (the 401
    /// redirect policy does not apply to the login endpoint).
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let payload = serde_json::json!({ "email": email, "password": password });
        self.execute(Method::Post, config::LOGIN_PATH, Some(payload)).await
    }

    /// Create an account, `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// `Status` on validation failures (409 for an existing email).
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: &str,
        tone: &str,
    ) -> Result<SignupResponse, ApiError> {
        let payload = serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
            "tone": tone,
        });
        self.execute(Method::Post, config::SIGNUP_PATH, Some(payload)).await
    }

    /// Confirm the stored token is still good, `POST /auth/session_sync`.
    ///
    /// # Errors
    ///
    /// `Status` when the server rejects the token; callers clear the
    /// session themselves (this endpoint is redirect-exempt).
    pub async fn session_sync(&self) -> Result<(), ApiError> {
        self.execute::<ApiMessage>(Method::Post, config::SESSION_SYNC_ENDPOINT, None)
            .await
            .map(|_| ())
    }

    /// Best-effort logout notification, `POST /auth/logout`.
    ///
    /// Failures are logged and swallowed: the client-side session is
    /// already gone by the time this is called.
    pub async fn logout_notify(&self) {
        if let Err(e) = self
            .execute::<ApiMessage>(Method::Post, config::LOGOUT_ENDPOINT, None)
            .await
        {
            log::debug!("logout notification failed: {e}");
        }
    }

    /// Fetch the account profile, `GET /settings/api/profile`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` (after redirect) when the session has expired.
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.execute(Method::Get, config::PROFILE_ENDPOINT, None).await
    }

    /// Apply profile edits, `POST /settings/api/profile`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` (after redirect) when the session has expired.
    pub async fn update_profile(&self, name: &str, role: &str, tone: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "name": name, "role": role, "tone": tone });
        self.execute::<ApiMessage>(Method::Post, config::PROFILE_ENDPOINT, Some(payload))
            .await
            .map(|_| ())
    }

    /// Change the account password, `POST /settings/api/password`.
    ///
    /// # Errors
    ///
    /// `Status` when the server rejects the new password.
    pub async fn change_password(&self, password: &str) -> Result<(), ApiError> {
        let payload = serde_json::json!({ "password": password });
        self.execute::<ApiMessage>(Method::Post, config::PASSWORD_ENDPOINT, Some(payload))
            .await
            .map(|_| ())
    }

    /// Upcoming calendar events for the dashboard, `GET /dashboard/calendar`.
    ///
    /// # Errors
    ///
    /// `Unauthorized` (after redirect) when the session has expired.
    pub async fn fetch_calendar_events(&self) -> Result<Vec<CalendarEvent>, ApiError> {
        self.execute(Method::Get, config::CALENDAR_ENDPOINT, None).await
    }
}
