use super::*;
use crate::config::ApiConfig;
use crate::session::navigator::RecordingNavigator;
use crate::session::store::MemorySessionStore;
use futures::executor::block_on;

fn api_at(path: &str) -> ApiClient<MemorySessionStore, RecordingNavigator> {
    ApiClient::new(
        ApiConfig::default(),
        MemorySessionStore::new(),
        RecordingNavigator::at(path),
    )
}

// =====================================================================
// Auth-page recognition
// =====================================================================

#[test]
fn auth_pages_are_recognized() {
    assert!(is_auth_path("/auth/login"));
    assert!(is_auth_path("/auth/signup"));
    assert!(is_auth_path("/auth"));
}

#[test]
fn trailing_slash_is_tolerated() {
    assert!(is_auth_path("/auth/login/"));
    assert!(is_auth_path("/auth/"));
}

#[test]
fn protected_pages_are_not_auth_pages() {
    assert!(!is_auth_path("/dashboard"));
    assert!(!is_auth_path("/settings"));
    assert!(!is_auth_path("/"));
}

// =====================================================================
// Decision table
// =====================================================================

#[test]
fn no_token_on_protected_page_redirects_to_login() {
    assert_eq!(
        bootstrap_action(false, "/dashboard"),
        BootstrapAction::RedirectToLogin
    );
}

#[test]
fn no_token_on_auth_page_stays() {
    assert_eq!(bootstrap_action(false, "/auth/login"), BootstrapAction::Stay);
    assert_eq!(bootstrap_action(false, "/auth/signup"), BootstrapAction::Stay);
}

#[test]
fn token_on_auth_page_validates_session() {
    assert_eq!(
        bootstrap_action(true, "/auth/login"),
        BootstrapAction::ValidateSession
    );
}

#[test]
fn token_on_protected_page_stays() {
    assert_eq!(bootstrap_action(true, "/dashboard"), BootstrapAction::Stay);
    assert_eq!(bootstrap_action(true, "/settings"), BootstrapAction::Stay);
}

// =====================================================================
// Validation outcomes
// =====================================================================

#[test]
fn confirmed_session_skips_ahead_to_dashboard() {
    let store = MemorySessionStore::new();
    store.set_token("good");
    let navigator = RecordingNavigator::at("/auth/login");

    finish_validation(&store, &navigator, Ok(()));

    assert_eq!(navigator.last_redirect(), Some("/dashboard".to_owned()));
    assert_eq!(store.token(), Some("good".to_owned()));
}

#[test]
fn rejected_session_is_dropped_without_leaving_the_page() {
    let store = MemorySessionStore::new();
    store.set_token("stale");
    store.set_user_record("{\"name\":\"Ana\"}");
    let navigator = RecordingNavigator::at("/auth/login");

    finish_validation(&store, &navigator, Err(ApiError::status(401, None)));

    assert_eq!(store.token(), None);
    assert_eq!(store.user_record(), None);
    assert!(navigator.redirects().is_empty());
}

// =====================================================================
// Full bootstrap runs
// =====================================================================

#[test]
fn bootstrap_without_token_leaves_protected_page() {
    let api = api_at("/dashboard");

    block_on(check_auth(&api));

    assert_eq!(api.navigator().last_redirect(), Some("/auth/login".to_owned()));
}

#[test]
fn bootstrap_without_token_rests_on_login_page() {
    let api = api_at("/auth/login");

    block_on(check_auth(&api));

    assert!(api.navigator().redirects().is_empty());
}

#[test]
fn bootstrap_with_token_keeps_protected_page() {
    let api = api_at("/settings");
    api.store().set_token("tok");

    block_on(check_auth(&api));

    assert!(api.navigator().redirects().is_empty());
    assert_eq!(api.store().token(), Some("tok".to_owned()));
}

#[test]
fn bootstrap_with_unverifiable_token_clears_it_and_stays() {
    // Without a browser transport, session_sync cannot succeed; the
    // bootstrap must treat that like a rejected token.
    let api = api_at("/auth/login");
    api.store().set_token("tok");
    api.store().set_user_record("{\"name\":\"Ana\"}");

    block_on(check_auth(&api));

    assert_eq!(api.store().token(), None);
    assert_eq!(api.store().user_record(), None);
    assert!(api.navigator().redirects().is_empty());
}

// =====================================================================
// Logout
// =====================================================================

#[test]
fn log_out_clears_session_and_returns_to_login() {
    let api = api_at("/dashboard");
    api.store().set_token("tok");
    api.store().set_user_record("{\"name\":\"Ana\"}");

    block_on(log_out(&api));

    assert_eq!(api.store().token(), None);
    assert_eq!(api.store().user_record(), None);
    assert_eq!(api.navigator().last_redirect(), Some("/auth/login".to_owned()));
}

#[test]
fn log_out_redirects_even_when_notify_cannot_reach_the_server() {
    // logout_notify always fails natively; the redirect must happen anyway.
    let api = api_at("/settings");
    api.store().set_token("tok");

    block_on(log_out(&api));

    assert_eq!(api.navigator().last_redirect(), Some("/auth/login".to_owned()));
}
