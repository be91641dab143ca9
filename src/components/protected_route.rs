//! Route guard for session-protected views.
//!
//! DESIGN
//! ======
//! The navigation decision is a pure function of the auth snapshot and the
//! requested location; the component only applies it. While the session
//! check is in flight no decision is made, so a reload never flashes the
//! login page for a signed-in user.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;

/// What the guard does with a request for a protected location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session check still in flight: render a placeholder, navigate nowhere.
    Loading,
    /// Not authenticated: go to the login location, remembering the origin.
    Redirect(String),
    /// Authenticated: render the protected content unchanged.
    Allow,
}

/// Login target carrying the originally requested path for post-login return.
fn login_redirect_target(redirect_to: &str, requested: &str) -> String {
    format!("{redirect_to}?from={requested}")
}

/// Pure guard decision for `requested` given the current auth snapshot.
pub fn decide(state: &AuthState, requested: &str, redirect_to: &str) -> RouteDecision {
    if state.loading {
        RouteDecision::Loading
    } else if state.is_authenticated() {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(login_redirect_target(redirect_to, requested))
    }
}

/// Wrapper that renders `children` only for an authenticated session.
#[component]
pub fn ProtectedRoute(
    /// Login location used when no session is present.
    #[prop(into, default = "/login".to_owned())]
    redirect_to: String,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&auth.get(), &location.pathname.get(), &redirect_to));

    // Navigation happens outside the render path.
    Effect::new(move || {
        if let RouteDecision::Redirect(target) = decision.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || decision.get() == RouteDecision::Allow
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <div class="spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
