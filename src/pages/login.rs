//! Login page: email + password credentials and Google sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppApi;
use crate::config;
use crate::session::navigator::Navigator;
use crate::session::store::StoredUser;

/// Reject obviously incomplete credentials before any network call.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(())
}

/// The session record persisted after a successful login. The server only
/// returns a display name, so the email comes from the form.
pub(crate) fn login_session_user(user_name: &str, email: &str) -> StoredUser {
    StoredUser {
        name: user_name.to_owned(),
        email: Some(email.trim().to_owned()),
        avatar: None,
    }
}

fn start_login(
    api: &AppApi,
    email: String,
    password: String,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::session::store::SessionStore;

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(response) => {
                    let user = login_session_user(&response.user_name, &email);
                    api.store().save_session(&response.token, &user);
                    api.navigator().redirect(config::DASHBOARD_PATH);
                }
                Err(e) => {
                    info.set(format!("Login failed: {e}"));
                    busy.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, email, password, info, busy);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<RwSignal<AppApi>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_login_input(&email_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());
        start_login(&api.get_untracked(), email_value, password_value, info, busy);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Auralis"</h1>
                <p class="auth-card__subtitle">"Sign in to your workspace"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider"></div>
                <p class="auth-card__subtitle">"Or"</p>
                <a
                    href=config::GOOGLE_AUTH_PATH
                    class="auth-button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        // Full-page navigation; the OAuth flow leaves the app.
                        api.get_untracked().navigator().redirect(config::GOOGLE_AUTH_PATH);
                    }
                >
                    "Sign in with Google"
                </a>
                <p class="auth-footnote">
                    "New here? "
                    <a href=config::SIGNUP_PATH>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
