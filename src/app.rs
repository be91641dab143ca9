//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::protected_route::ProtectedRoute;
use crate::config;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionCache;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component: shared auth contexts, router, and the startup session
/// check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Process-wide session state, provided once at the root.
    let auth = RwSignal::new(AuthState::initial());
    let cache = RwSignal::new(SessionCache::default());
    provide_context(auth);
    provide_context(cache);

    // One-shot session check at mount.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::actions::initialize(auth, cache).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/boltchat.css"/>
        <Title text=config::app_name()/>

        <Router>
            <Routes fallback=RedirectHome>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <ProtectedRoute>
                                <HomePage/>
                            </ProtectedRoute>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Unknown routes land on the home page, which the guard may bounce onward.
#[component]
fn RedirectHome() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate("/", NavigateOptions::default());
    });
    view! { <p>"Redirecting..."</p> }
}
