use super::*;

// =============================================================
// Fixtures
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
        role: "user".to_owned(),
        created_at: "2025-01-02T03:04:05Z".to_owned(),
        updated_at: "2025-01-02T03:04:05Z".to_owned(),
        github_id: None,
    }
}

fn authenticated() -> AuthState {
    reduce(AuthState::initial(), AuthAction::SetUser(Some(make_user())))
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn initial_state_is_loading_and_anonymous() {
    let state = AuthState::initial();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.profile_pending);
    assert!(!state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn set_user_moves_to_authenticated() {
    let state = authenticated();
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert_eq!(state.user.unwrap().username, "alice");
}

#[test]
fn set_user_none_moves_to_anonymous() {
    let state = reduce(AuthState::initial(), AuthAction::SetUser(None));
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn set_user_clears_profile_pending() {
    let degraded = reduce(AuthState::initial(), AuthAction::SetSessionPending);
    let state = reduce(degraded, AuthAction::SetUser(Some(make_user())));
    assert!(!state.profile_pending);
    assert!(state.is_authenticated());
}

#[test]
fn set_loading_toggles_only_the_flag() {
    let state = reduce(authenticated(), AuthAction::SetLoading(true));
    assert!(state.loading);
    assert!(state.is_authenticated());

    let state = reduce(state, AuthAction::SetLoading(false));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

#[test]
fn session_pending_is_not_authenticated() {
    let state = reduce(AuthState::initial(), AuthAction::SetSessionPending);
    assert!(!state.loading);
    assert!(state.profile_pending);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn logout_resets_from_authenticated() {
    let state = reduce(authenticated(), AuthAction::Logout);
    assert_eq!(state, reduce(AuthState::initial(), AuthAction::Logout));
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.profile_pending);
}

#[test]
fn logout_resets_from_every_prior_state() {
    let priors = [
        AuthState::initial(),
        authenticated(),
        reduce(AuthState::initial(), AuthAction::SetSessionPending),
        reduce(authenticated(), AuthAction::SetLoading(true)),
    ];
    for prior in priors {
        let state = reduce(prior, AuthAction::Logout);
        assert!(state.user.is_none());
        assert!(!state.loading);
    }
}

// =============================================================
// Derived authentication invariant
// =============================================================

#[test]
fn is_authenticated_tracks_user_presence_across_sequences() {
    let sequences: [&[AuthAction]; 4] = [
        &[AuthAction::SetUser(Some(make_user())), AuthAction::Logout],
        &[AuthAction::SetUser(None), AuthAction::SetLoading(true), AuthAction::SetUser(Some(make_user()))],
        &[AuthAction::SetSessionPending, AuthAction::SetUser(Some(make_user())), AuthAction::SetLoading(true)],
        &[AuthAction::Logout, AuthAction::SetSessionPending, AuthAction::Logout],
    ];
    for actions in sequences {
        let mut state = AuthState::initial();
        assert_eq!(state.is_authenticated(), state.user.is_some());
        for action in actions {
            state = reduce(state, action.clone());
            assert_eq!(state.is_authenticated(), state.user.is_some());
        }
    }
}
