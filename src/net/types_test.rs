use super::*;

// =============================================================
// Fixtures
// =============================================================

fn user_json() -> &'static str {
    r#"{
        "id": "u-1",
        "username": "alice",
        "email": "alice@example.com",
        "avatarUrl": "https://example.com/a.png",
        "role": "user",
        "createdAt": "2025-01-02T03:04:05Z",
        "updatedAt": "2025-06-07T08:09:10Z",
        "githubId": null
    }"#
}

// =============================================================
// User serde
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_str(user_json()).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.username, "alice");
    assert_eq!(user.avatar_url.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(user.created_at, "2025-01-02T03:04:05Z");
    assert!(user.github_id.is_none());
}

#[test]
fn user_round_trips_through_json() {
    let user: User = serde_json::from_str(user_json()).unwrap();
    let encoded = serde_json::to_string(&user).unwrap();
    let decoded: User = serde_json::from_str(&encoded).unwrap();
    assert_eq!(user, decoded);
}

#[test]
fn user_serializes_camel_case_keys() {
    let user: User = serde_json::from_str(user_json()).unwrap();
    let value = serde_json::to_value(&user).unwrap();
    assert!(value.get("avatarUrl").is_some());
    assert!(value.get("githubId").is_some());
    assert!(value.get("avatar_url").is_none());
}

// =============================================================
// Credentials serde
// =============================================================

#[test]
fn register_credentials_serialize_confirm_password_key() {
    let credentials = RegisterCredentials {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "hunter2!".to_owned(),
        confirm_password: "hunter2!".to_owned(),
    };
    let value = serde_json::to_value(&credentials).unwrap();
    assert_eq!(value["confirmPassword"], "hunter2!");
    assert!(value.get("confirm_password").is_none());
}

#[test]
fn login_credentials_serialize_plain_keys() {
    let credentials = LoginCredentials {
        username: "alice".to_owned(),
        password: "hunter2!".to_owned(),
    };
    let value = serde_json::to_value(&credentials).unwrap();
    assert_eq!(value["username"], "alice");
    assert_eq!(value["password"], "hunter2!");
}

// =============================================================
// AuthResponse serde
// =============================================================

#[test]
fn auth_response_parses_token_only_payload() {
    let response: AuthResponse = serde_json::from_str(r#"{"accessToken": "tok-123"}"#).unwrap();
    assert_eq!(response.access_token, "tok-123");
    assert!(response.user.is_none());
    assert!(response.message.is_none());
}

#[test]
fn auth_response_parses_embedded_user_and_message() {
    let json = format!(r#"{{"accessToken": "tok-123", "user": {}, "message": "welcome"}}"#, user_json());
    let response: AuthResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(response.user.unwrap().username, "alice");
    assert_eq!(response.message.as_deref(), Some("welcome"));
}

#[test]
fn auth_response_requires_access_token() {
    assert!(serde_json::from_str::<AuthResponse>(r#"{"message": "no token"}"#).is_err());
}
