use super::*;

// =============================================================
// Name matching
// =============================================================

#[test]
fn auth_cookies_match_the_naming_convention() {
    assert!(is_auth_cookie("accessToken"));
    assert!(is_auth_cookie("boltchat_session"));
    assert!(is_auth_cookie("legacy_accessToken_v2"));
}

#[test]
fn unrelated_cookies_do_not_match() {
    assert!(!is_auth_cookie("theme"));
    assert!(!is_auth_cookie("_ga"));
    assert!(!is_auth_cookie("csrf"));
}

// =============================================================
// document.cookie parsing
// =============================================================

#[test]
fn cookie_names_splits_pairs_and_trims() {
    let names = cookie_names("theme=dark; accessToken=abc; boltchat_session=xyz");
    assert_eq!(names, vec!["theme", "accessToken", "boltchat_session"]);
}

#[test]
fn cookie_names_handles_empty_and_valueless_entries() {
    assert!(cookie_names("").is_empty());
    assert_eq!(cookie_names("flag; ; a=1"), vec!["flag", "a"]);
}

// =============================================================
// Expiry strings
// =============================================================

#[test]
fn expired_cookie_without_domain() {
    assert_eq!(
        expired_cookie("accessToken", None),
        "accessToken=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/"
    );
}

#[test]
fn expired_cookie_with_domain() {
    assert_eq!(
        expired_cookie("accessToken", Some("app.example.com")),
        "accessToken=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/;domain=app.example.com"
    );
}
