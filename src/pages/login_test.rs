use super::*;

// =============================================================
// Input validation
// =============================================================

#[test]
fn validate_login_input_trims_username() {
    let credentials = validate_login_input("  alice  ", "hunter2!").unwrap();
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "hunter2!");
}

#[test]
fn validate_login_input_rejects_missing_fields() {
    assert!(validate_login_input("", "hunter2!").is_err());
    assert!(validate_login_input("alice", "").is_err());
    assert!(validate_login_input("   ", "hunter2!").is_err());
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately contain surrounding whitespace.
    let credentials = validate_login_input("alice", "  spaced  ").unwrap();
    assert_eq!(credentials.password, "  spaced  ");
}

// =============================================================
// Post-login destination
// =============================================================

#[test]
fn destination_defaults_to_home() {
    assert_eq!(post_login_destination(None), "/");
    assert_eq!(post_login_destination(Some("")), "/");
}

#[test]
fn destination_honors_recorded_origin() {
    assert_eq!(post_login_destination(Some("/dashboard")), "/dashboard");
    assert_eq!(post_login_destination(Some("/")), "/");
}

#[test]
fn destination_rejects_external_targets() {
    assert_eq!(post_login_destination(Some("https://example.com/")), "/");
    assert_eq!(post_login_destination(Some("//example.com")), "/");
    assert_eq!(post_login_destination(Some("dashboard")), "/");
}
