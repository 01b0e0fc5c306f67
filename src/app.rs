//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! The app root provides two contexts: the auth-session state signal and
//! the API client wired to browser storage and navigation. It runs the
//! session bootstrap once per page load, so every route below it can
//! assume that an unauthenticated visitor on a protected page is already
//! on the way to the login screen.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, settings::SettingsPage, signup::SignupPage,
};
use crate::session::navigator::WindowNavigator;
use crate::session::store::WebSessionStore;
use crate::state::auth::AuthState;

/// API client over the real browser capabilities.
pub type AppApi = ApiClient<WebSessionStore, WindowNavigator>;

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

/// Root application component.
///
/// Provides shared state contexts, runs the session bootstrap, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts in loading on both server and client so the hydrated DOM
    // matches the server-rendered one.
    let auth = RwSignal::new(AuthState::loading());
    let api = RwSignal::new(AppApi::new(
        ApiConfig::default(),
        WebSessionStore,
        WindowNavigator,
    ));

    provide_context(auth);
    provide_context(api);

    #[cfg(feature = "hydrate")]
    {
        use crate::session::store::SessionStore;

        let api = api.get_untracked();
        leptos::task::spawn_local(async move {
            crate::session::bootstrap::check_auth(&api).await;
            auth.set(AuthState::settled(api.store().stored_user()));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/auralis.css"/>
        <Title text="Auralis"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signup")) view=SignupPage/>
                <Route path=StaticSegment("auth") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
