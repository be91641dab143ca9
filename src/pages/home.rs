//! Session-aware home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, rendered behind the route guard.
//! While mounted it revalidates the session in the background so a server-
//! side expiry eventually bounces the user back to the login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config;
use crate::state::auth::AuthState;
use crate::state::session::SessionCache;

/// Interval between background session revalidations.
#[cfg(feature = "hydrate")]
const REVALIDATE_SECS: u64 = 300;

/// Home page — greets the signed-in user and offers logout.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<SessionCache>>();
    let navigate = use_navigate();

    // Keep the session fresh while the page is mounted.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REVALIDATE_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                crate::state::actions::refresh_session(auth, cache).await;
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::state::actions::logout(auth, cache).await;
                navigate("/login", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, cache);
        }
    };

    let username = move || auth.get().user.map(|u| u.username).unwrap_or_default();
    let email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let role = move || auth.get().user.map(|u| u.role).unwrap_or_default();
    let avatar = move || auth.get().user.and_then(|u| u.avatar_url);

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>{config::app_name()}</h1>
                <button class="btn home-page__logout" on:click=on_logout title="Log out">
                    "Log out"
                </button>
            </header>

            <main class="home-page__main">
                <section class="profile-card">
                    <Show
                        when=move || avatar().is_some()
                        fallback=|| {
                            view! {
                                <div class="profile-card__avatar profile-card__avatar--placeholder"></div>
                            }
                        }
                    >
                        <img
                            class="profile-card__avatar"
                            src=move || avatar().unwrap_or_default()
                            alt="avatar"
                        />
                    </Show>
                    <div class="profile-card__identity">
                        <h2>{move || format!("Hello, {}!", username())}</h2>
                        <p class="profile-card__email">{move || email()}</p>
                        <Show when=move || !role().is_empty()>
                            <p class="profile-card__role">{move || format!("Role: {}", role())}</p>
                        </Show>
                    </div>
                </section>

                <p class="home-page__blurb">
                    "You are signed in. This area is only visible with a valid session."
                </p>

                <footer class="home-page__footer">
                    {config::app_name()}
                    " v"
                    {config::app_version()}
                </footer>
            </main>
        </div>
    }
}
