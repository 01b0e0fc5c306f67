use super::*;

// =====================================================================
// Password rule
// =====================================================================

#[test]
fn short_password_is_rejected() {
    assert_eq!(
        validate_new_password("12345"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_new_password("").is_err());
}

#[test]
fn six_characters_are_enough() {
    assert_eq!(validate_new_password("123456"), Ok(()));
    assert_eq!(validate_new_password("correct horse"), Ok(()));
}

#[test]
fn length_counts_characters_not_bytes() {
    // Six characters even though the encoding is longer.
    assert_eq!(validate_new_password("señora"), Ok(()));
}

// =====================================================================
// Cached-record refresh after a save
// =====================================================================

#[test]
fn refresh_replaces_the_name_and_keeps_identity_details() {
    let current = StoredUser {
        name: "Old Name".to_owned(),
        email: Some("ana@example.com".to_owned()),
        avatar: Some("https://img.example/a.png".to_owned()),
    };

    let refreshed = refreshed_user(Some(&current), " New Name ");

    assert_eq!(refreshed.name, "New Name");
    assert_eq!(refreshed.email.as_deref(), Some("ana@example.com"));
    assert_eq!(refreshed.avatar.as_deref(), Some("https://img.example/a.png"));
}

#[test]
fn refresh_without_a_current_record_still_produces_one() {
    let refreshed = refreshed_user(None, "Ana");
    assert_eq!(refreshed.name, "Ana");
    assert_eq!(refreshed.email, None);
    assert_eq!(refreshed.avatar, None);
}
