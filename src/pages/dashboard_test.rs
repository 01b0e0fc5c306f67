use super::*;

#[test]
fn greeting_uses_the_stored_name() {
    assert_eq!(greeting(Some("Ana")), "Welcome back, Ana");
}

#[test]
fn greeting_degrades_without_a_name() {
    assert_eq!(greeting(None), "Welcome back");
    assert_eq!(greeting(Some("")), "Welcome back");
    assert_eq!(greeting(Some("   ")), "Welcome back");
}
