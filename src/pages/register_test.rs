use super::*;

#[test]
fn valid_input_builds_credentials() {
    let credentials =
        validate_register_input(" alice ", " alice@example.com ", "hunter2!", "hunter2!").unwrap();
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.email, "alice@example.com");
    assert_eq!(credentials.password, "hunter2!");
    assert_eq!(credentials.confirm_password, "hunter2!");
}

#[test]
fn any_empty_field_is_rejected() {
    assert!(validate_register_input("", "a@b.com", "pw", "pw").is_err());
    assert!(validate_register_input("alice", "", "pw", "pw").is_err());
    assert!(validate_register_input("alice", "a@b.com", "", "").is_err());
    assert!(validate_register_input("alice", "a@b.com", "pw", "").is_err());
}

#[test]
fn mismatched_passwords_are_rejected() {
    assert_eq!(
        validate_register_input("alice", "a@b.com", "hunter2!", "hunter3!"),
        Err("Passwords do not match.")
    );
}

#[test]
fn passwords_are_compared_verbatim() {
    assert!(validate_register_input("alice", "a@b.com", "pw ", "pw").is_err());
}
