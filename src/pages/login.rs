//! Login page: username/password form over the session-cookie API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config;
use crate::net::types::LoginCredentials;
use crate::state::auth::AuthState;
use crate::state::session::SessionCache;

/// Validate raw form input into credentials ready to submit.
fn validate_login_input(username: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter a username and password.");
    }
    Ok(LoginCredentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Where to land after a successful login: the guarded path that sent us
/// here, restricted to in-app absolute paths.
fn post_login_destination(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

/// Login page — public route; bounces authenticated sessions back to the
/// path recorded by the route guard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<SessionCache>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // Already signed in, or the session check just finished: return to the
    // origin path, or home.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            let target = post_login_destination(query.get().get("from").as_deref());
            navigate(&target, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        submitting.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(err) = crate::state::actions::login(auth, cache, credentials).await {
                error.set(err.message);
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, cache);
            submitting.set(false);
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=|| {
                view! {
                    <div class="page-loading">
                        <div class="spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            <div class="login-page">
                <div class="login-card">
                    <h1>{config::app_name()}</h1>
                    <p class="login-card__subtitle">"Sign in to continue"</p>

                    <Show when=move || auth.get().profile_pending>
                        <p class="login-message">
                            "Signed in, but your profile could not be loaded yet. Please retry."
                        </p>
                    </Show>

                    <form class="login-form" on:submit=on_submit>
                        <Show when=move || !error.get().is_empty()>
                            <p class="login-error">{move || error.get()}</p>
                        </Show>

                        <label class="login-label">
                            "Username"
                            <input
                                class="login-input"
                                type="text"
                                autocomplete="username"
                                placeholder="your_username"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    username.set(event_target_value(&ev));
                                    error.set(String::new());
                                }
                            />
                        </label>

                        <label class="login-label">
                            "Password"
                            <span class="login-password">
                                <input
                                    class="login-input"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    autocomplete="current-password"
                                    placeholder="••••••••"
                                    prop:value=move || password.get()
                                    on:input=move |ev| {
                                        password.set(event_target_value(&ev));
                                        error.set(String::new());
                                    }
                                />
                                <button
                                    type="button"
                                    class="login-password__toggle"
                                    on:click=move |_| show_password.update(|v| *v = !*v)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </span>
                        </label>

                        <button class="login-button" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>

                    <p class="login-footer">
                        "No account? "
                        <a href="/register">"Create one"</a>
                    </p>
                </div>
            </div>
        </Show>
    }
}
