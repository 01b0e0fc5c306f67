use super::*;
use crate::session::navigator::RecordingNavigator;
use crate::session::store::MemorySessionStore;
use futures::executor::block_on;

fn client() -> ApiClient<MemorySessionStore, RecordingNavigator> {
    ApiClient::new(
        ApiConfig::default(),
        MemorySessionStore::new(),
        RecordingNavigator::new(),
    )
}

// =====================================================================
// Request plans
// =====================================================================

#[test]
fn plan_without_token_sends_json_content_type_only() {
    let plan = build_plan("", "/dashboard/calendar", Method::Get, None, None);
    assert_eq!(plan.url, "/dashboard/calendar");
    assert_eq!(
        plan.headers,
        vec![("Content-Type".to_owned(), "application/json".to_owned())]
    );
    assert_eq!(plan.body, None);
}

#[test]
fn plan_with_token_adds_bearer_authorization() {
    let plan = build_plan("", "/settings/api/profile", Method::Get, Some("tok-123"), None);
    assert!(plan
        .headers
        .contains(&("Authorization".to_owned(), "Bearer tok-123".to_owned())));
    assert!(plan
        .headers
        .contains(&("Content-Type".to_owned(), "application/json".to_owned())));
}

#[test]
fn plan_prefixes_base_url() {
    let plan = build_plan("https://api.example.com", "/auth/login", Method::Post, None, None);
    assert_eq!(plan.url, "https://api.example.com/auth/login");
}

#[test]
fn plan_carries_json_body() {
    let body = serde_json::json!({ "email": "a@b.c" });
    let plan = build_plan("", "/auth/login", Method::Post, None, Some(body.clone()));
    assert_eq!(plan.body, Some(body));
}

#[test]
fn method_defaults_to_get() {
    assert_eq!(Method::default(), Method::Get);
}

// =====================================================================
// Auth-endpoint exemption
// =====================================================================

#[test]
fn login_signup_and_session_sync_are_auth_endpoints() {
    assert!(is_auth_endpoint("/auth/login"));
    assert!(is_auth_endpoint("/auth/signup"));
    assert!(is_auth_endpoint("/auth/session_sync"));
}

#[test]
fn other_endpoints_are_not_auth_endpoints() {
    assert!(!is_auth_endpoint("/auth/logout"));
    assert!(!is_auth_endpoint("/settings/api/profile"));
    assert!(!is_auth_endpoint("/dashboard/calendar"));
}

// =====================================================================
// Status mapping and the 401 policy
// =====================================================================

#[test]
fn unauthorized_on_protected_endpoint_clears_session_and_redirects() {
    let store = MemorySessionStore::new();
    store.set_token("stale");
    store.set_user_record("{\"name\":\"Ana\"}");
    let navigator = RecordingNavigator::new();

    let err = map_error_status(&store, &navigator, "/dashboard/calendar", 401, None);

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(store.token(), None);
    assert_eq!(store.user_record(), None);
    assert_eq!(navigator.last_redirect(), Some("/auth/login".to_owned()));
}

#[test]
fn unauthorized_on_auth_endpoint_keeps_session_and_stays_put() {
    let store = MemorySessionStore::new();
    store.set_token("half-typed");
    let navigator = RecordingNavigator::new();

    let err = map_error_status(
        &store,
        &navigator,
        "/auth/login",
        401,
        Some("Invalid credentials".to_owned()),
    );

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("expected Status, got {other:?}"),
    }
    assert_eq!(store.token(), Some("half-typed".to_owned()));
    assert!(navigator.redirects().is_empty());
}

#[test]
fn server_message_rides_along_on_other_statuses() {
    let store = MemorySessionStore::new();
    let navigator = RecordingNavigator::new();

    let err = map_error_status(
        &store,
        &navigator,
        "/settings/api/password",
        400,
        Some("Password must be at least 6 characters".to_owned()),
    );

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Password must be at least 6 characters");
        }
        other => panic!("expected Status, got {other:?}"),
    }
    assert!(navigator.redirects().is_empty());
}

#[test]
fn missing_server_message_falls_back_to_generic_text() {
    let store = MemorySessionStore::new();
    let navigator = RecordingNavigator::new();

    let err = map_error_status(&store, &navigator, "/dashboard/calendar", 500, None);

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "API error");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

// =====================================================================
// Native builds have no transport
// =====================================================================

#[test]
fn calls_answer_unavailable_without_side_effects() {
    let api = client();
    api.store().set_token("tok");

    let result = block_on(api.session_sync());

    assert!(matches!(result, Err(ApiError::Unavailable)));
    assert_eq!(api.store().token(), Some("tok".to_owned()));
    assert!(api.navigator().redirects().is_empty());
}

#[test]
fn logout_notify_swallows_transport_errors() {
    let api = client();
    block_on(api.logout_notify());
    assert!(api.navigator().redirects().is_empty());
}

#[test]
fn login_is_unavailable_natively() {
    let api = client();
    let result = block_on(api.login("a@b.c", "secret"));
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
