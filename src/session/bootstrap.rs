//! Session bootstrap: where does a fresh page load belong?
//!
//! ARCHITECTURE
//! ============
//! Every page load runs [`check_auth`] once. The decision reduces to two
//! bits, token-on-hand and auth-page-or-not, captured by
//! [`bootstrap_action`] so the routing table is testable without a
//! browser:
//!
//! * no token on a protected page: go sign in
//! * no token on an auth page: already where the visitor belongs
//! * token on an auth page: confirm it server-side, then skip to the
//!   dashboard
//! * token on a protected page: stay; a stale token surfaces through the
//!   401 policy on the first real call
//!
//! [`log_out`] is the reverse path: forget the session locally first so
//! logout cannot be blocked by a dead network, then tell the server,
//! then leave.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::config;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::session::navigator::Navigator;
use crate::session::store::SessionStore;

/// Pages an unauthenticated visitor may sit on.
const AUTH_PAGES: [&str; 3] = [
    config::LOGIN_PATH,
    config::SIGNUP_PATH,
    config::AUTH_INDEX_PATH,
];

/// Whether `path` is part of the auth surface. Tolerates one trailing
/// slash, which some servers append on redirect.
pub(crate) fn is_auth_path(path: &str) -> bool {
    AUTH_PAGES
        .iter()
        .any(|page| path == *page || path.strip_suffix('/') == Some(*page))
}

/// What a fresh page load should do, given where it landed and whether a
/// token is on hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootstrapAction {
    /// The current page is right for the current session state.
    Stay,
    /// Protected page, no token.
    RedirectToLogin,
    /// Auth page with a stored token: confirm it before skipping ahead.
    ValidateSession,
}

/// The bootstrap decision table.
#[must_use]
pub fn bootstrap_action(has_token: bool, path: &str) -> BootstrapAction {
    match (has_token, is_auth_path(path)) {
        (false, false) => BootstrapAction::RedirectToLogin,
        (true, true) => BootstrapAction::ValidateSession,
        _ => BootstrapAction::Stay,
    }
}

/// Act on the result of a session validation round-trip.
///
/// A good token means the visitor has no business on an auth page, so
/// head to the dashboard. A rejected (or unreachable) validation drops
/// the stored session and leaves the visitor where they are, which is
/// already the login surface.
pub(crate) fn finish_validation<S: SessionStore, N: Navigator>(
    store: &S,
    navigator: &N,
    outcome: Result<(), ApiError>,
) {
    match outcome {
        Ok(()) => navigator.redirect(config::DASHBOARD_PATH),
        Err(e) => {
            log::warn!("stored session failed validation: {e}");
            store.clear();
        }
    }
}

/// Run the bootstrap check for the current page.
pub async fn check_auth<S: SessionStore, N: Navigator>(api: &ApiClient<S, N>) {
    let store = api.store();
    let navigator = api.navigator();
    let path = navigator.current_path();
    match bootstrap_action(store.token().is_some(), &path) {
        BootstrapAction::Stay => {}
        BootstrapAction::RedirectToLogin => {
            log::info!("no session token on {path}; redirecting to login");
            navigator.redirect(config::LOGIN_PATH);
        }
        BootstrapAction::ValidateSession => {
            let outcome = api.session_sync().await;
            finish_validation(store, navigator, outcome);
        }
    }
}

/// End the session: forget it locally, tell the server on a best-effort
/// basis, then return to the login page.
pub async fn log_out<S: SessionStore, N: Navigator>(api: &ApiClient<S, N>) {
    api.store().clear();
    api.logout_notify().await;
    api.navigator().redirect(config::LOGIN_PATH);
}
