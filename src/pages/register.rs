//! Registration page; mirrors the login flow on the register endpoint.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::net::types::RegisterCredentials;
use crate::state::auth::AuthState;
use crate::state::session::SessionCache;

/// Validate raw form input into register credentials ready to submit.
fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<RegisterCredentials, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm_password {
        return Err("Passwords do not match.");
    }
    Ok(RegisterCredentials {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm_password.to_owned(),
    })
}

/// Registration page — public route; a successful registration signs the
/// user in and lands on the home page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<SessionCache>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let credentials = match validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        ) {
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
            if let Err(err) = crate::state::actions::register(auth, cache, credentials).await {
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
        <div class="login-page">
            <div class="login-card">
                <h1>{config::app_name()}</h1>
                <p class="login-card__subtitle">"Create your account"</p>

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
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>

                    <label class="login-label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>

                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>

                    <label class="login-label">
                        "Confirm password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| {
                                confirm_password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>

                    <button class="login-button" type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>

                <p class="login-footer">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
