//! Auth flows: the only writers of the shared auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local`; each flow calls `net::api`, maps the
//! outcome to an [`AuthAction`], and dispatches it through the reducer.
//! Login and register surface their error for inline display; the passive
//! checks log and degrade to the anonymous state instead.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{LoginCredentials, RegisterCredentials, User};
use crate::state::auth::{AuthAction, AuthState, reduce};
use crate::state::session::SessionCache;

/// Route an action through the pure reducer into the shared signal.
pub fn dispatch(auth: RwSignal<AuthState>, action: AuthAction) {
    auth.update(|state| *state = reduce(state.clone(), action));
}

fn cache_profile(cache: RwSignal<SessionCache>, user: &User) {
    cache.update(|c| c.store_profile(user.clone()));
}

/// Map the post-login profile fetch outcome to a transition.
///
/// A failed fetch still counts as a live session when the credential call
/// returned a token; the state records that explicitly instead of reporting
/// the user as anonymous.
fn settle_login(profile: Result<User, ApiError>, access_token: &str) -> AuthAction {
    match profile {
        Ok(user) => AuthAction::SetUser(Some(user)),
        Err(_) if !access_token.is_empty() => AuthAction::SetSessionPending,
        Err(_) => AuthAction::SetUser(None),
    }
}

/// Fetch the canonical profile after a successful login or register and
/// settle the state from it. Sequenced strictly after the credential call.
async fn settle_after_credentials(
    auth: RwSignal<AuthState>,
    cache: RwSignal<SessionCache>,
    access_token: &str,
) {
    let profile = api::check_auth().await;
    match &profile {
        Ok(user) => cache_profile(cache, user),
        Err(err) => log::warn!("profile fetch after sign-in failed: {err}"),
    }
    dispatch(auth, settle_login(profile, access_token));
}

/// Startup session check. Failure means "no valid session", never an error.
pub async fn initialize(auth: RwSignal<AuthState>, cache: RwSignal<SessionCache>) {
    match api::check_auth().await {
        Ok(user) => {
            cache_profile(cache, &user);
            dispatch(auth, AuthAction::SetUser(Some(user)));
        }
        Err(_) => dispatch(auth, AuthAction::SetUser(None)),
    }
}

/// Sign in, then fetch the canonical profile.
///
/// # Errors
///
/// Returns the API error when the login call itself is rejected; the state
/// is left unchanged apart from the loading flag.
pub async fn login(
    auth: RwSignal<AuthState>,
    cache: RwSignal<SessionCache>,
    credentials: LoginCredentials,
) -> Result<(), ApiError> {
    dispatch(auth, AuthAction::SetLoading(true));
    match api::login(&credentials).await {
        Ok(response) => {
            settle_after_credentials(auth, cache, &response.access_token).await;
            Ok(())
        }
        Err(err) => {
            dispatch(auth, AuthAction::SetLoading(false));
            Err(err)
        }
    }
}

/// Create an account, then fetch the canonical profile. Mirrors [`login`].
///
/// # Errors
///
/// Returns the API error when the register call itself is rejected.
pub async fn register(
    auth: RwSignal<AuthState>,
    cache: RwSignal<SessionCache>,
    credentials: RegisterCredentials,
) -> Result<(), ApiError> {
    dispatch(auth, AuthAction::SetLoading(true));
    match api::register(&credentials).await {
        Ok(response) => {
            settle_after_credentials(auth, cache, &response.access_token).await;
            Ok(())
        }
        Err(err) => {
            dispatch(auth, AuthAction::SetLoading(false));
            Err(err)
        }
    }
}

/// Sign out. Best-effort on the network side: the local state always resets
/// and the session cache is always cleared.
pub async fn logout(auth: RwSignal<AuthState>, cache: RwSignal<SessionCache>) {
    if let Err(err) = api::logout().await {
        log::warn!("logout request failed: {err}");
        crate::util::cookies::clear_auth_cookies();
    }
    dispatch(auth, AuthAction::Logout);
    cache.update(SessionCache::clear);
}

/// Manual session revalidation. Errors are logged, never thrown; a failed
/// check resets to the anonymous state.
pub async fn check_auth(auth: RwSignal<AuthState>, cache: RwSignal<SessionCache>) {
    match api::check_auth().await {
        Ok(user) => {
            cache_profile(cache, &user);
            dispatch(auth, AuthAction::SetUser(Some(user)));
        }
        Err(err) => {
            log::error!("auth check failed: {err}");
            dispatch(auth, AuthAction::SetUser(None));
        }
    }
}

/// Renew the session cookie, then revalidate the profile. Used by the
/// periodic revalidation on the home page.
pub async fn refresh_session(auth: RwSignal<AuthState>, cache: RwSignal<SessionCache>) {
    if let Err(err) = api::refresh_token().await {
        log::warn!("token refresh failed: {err}");
    }
    check_auth(auth, cache).await;
}
