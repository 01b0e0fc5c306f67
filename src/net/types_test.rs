use super::*;

// =============================================================
// Deserialization of server payloads
// =============================================================

#[test]
fn login_response_parses_token_and_name() {
    let parsed: LoginResponse =
        serde_json::from_str(r#"{"token":"abc123","user_name":"Alice"}"#).unwrap();
    assert_eq!(parsed.token, "abc123");
    assert_eq!(parsed.user_name, "Alice");
}

#[test]
fn signup_response_ignores_extra_message_field() {
    let parsed: SignupResponse = serde_json::from_str(
        r#"{"message":"User created successfully","token":"t1","user_id":"u1"}"#,
    )
    .unwrap();
    assert_eq!(parsed.token, "t1");
    assert_eq!(parsed.user_id, "u1");
}

#[test]
fn api_message_tolerates_missing_message() {
    let parsed: ApiMessage = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed.message, None);
}

#[test]
fn api_message_reads_message_field() {
    let parsed: ApiMessage = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
    assert_eq!(parsed.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn profile_tolerates_sparse_records() {
    let parsed: Profile = serde_json::from_str(r#"{"name":"Bob","email":"b@x.io"}"#).unwrap();
    assert_eq!(parsed.name.as_deref(), Some("Bob"));
    assert_eq!(parsed.role, None);
    assert_eq!(parsed.avatar, None);
}

#[test]
fn calendar_event_link_is_optional() {
    let parsed: CalendarEvent =
        serde_json::from_str(r#"{"summary":"Standup","start":"2026-03-02T09:00:00Z"}"#).unwrap();
    assert_eq!(parsed.summary, "Standup");
    assert_eq!(parsed.link, None);
}

#[test]
fn calendar_event_keeps_all_day_dates_verbatim() {
    let parsed: CalendarEvent = serde_json::from_str(
        r#"{"summary":"Offsite","start":"2026-03-06","link":"https://cal.example/evt"}"#,
    )
    .unwrap();
    assert_eq!(parsed.start, "2026-03-06");
    assert_eq!(parsed.link.as_deref(), Some("https://cal.example/evt"));
}
