//! Top navigation bar shown on authenticated pages.

use leptos::prelude::*;

use crate::app::AppApi;
use crate::config;
use crate::state::auth::AuthState;

fn start_logout(api: &AppApi, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            auth.update(|a| a.user = None);
            crate::session::bootstrap::log_out(&api).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, auth);
    }
}

/// Product brand, section links, current user, and the logout button.
#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<RwSignal<AppApi>>();

    let display_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();
    let avatar = move || auth.get().user.and_then(|u| u.avatar);

    let on_logout = move |_: leptos::ev::MouseEvent| start_logout(&api.get_untracked(), auth);

    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href=config::DASHBOARD_PATH>"Auralis"</a>
            <nav class="top-bar__nav">
                <a href=config::DASHBOARD_PATH>"Dashboard"</a>
                <a href=config::SETTINGS_PATH>"Settings"</a>
            </nav>
            <span class="top-bar__spacer"></span>
            <Show when=move || avatar().is_some()>
                <img
                    class="top-bar__avatar"
                    src=move || avatar().unwrap_or_default()
                    alt="Profile picture"
                />
            </Show>
            <span class="top-bar__user">{display_name}</span>
            <button class="btn top-bar__logout" on:click=on_logout title="Log out">
                "Logout"
            </button>
        </header>
    }
}
