//! Signup page: account creation with role and tone preferences.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::app::AppApi;
use crate::config;
use crate::session::store::StoredUser;

/// Values collected from the signup form.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub tone: String,
}

impl SignupForm {
    /// Client-side mirror of the server's signup rules: the three required
    /// fields must be present and the password needs at least 6 characters.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty()
        {
            return Err("Fill in name, email, and password.");
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters.");
        }
        Ok(())
    }

    /// The session record persisted once the account exists. Signup
    /// responses carry no profile, so everything comes from the form.
    pub(crate) fn session_user(&self) -> StoredUser {
        StoredUser {
            name: self.name.trim().to_owned(),
            email: Some(self.email.trim().to_owned()),
            avatar: None,
        }
    }
}

fn start_signup(api: &AppApi, form: SignupForm, info: RwSignal<String>, busy: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::session::navigator::Navigator;
        use crate::session::store::SessionStore;

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api
                .signup(
                    form.name.trim(),
                    form.email.trim(),
                    &form.password,
                    &form.role,
                    &form.tone,
                )
                .await
            {
                Ok(response) => {
                    api.store().save_session(&response.token, &form.session_user());
                    api.navigator().redirect(config::DASHBOARD_PATH);
                }
                Err(e) => {
                    info.set(format!("Signup failed: {e}"));
                    busy.set(false);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, form, info, busy);
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<RwSignal<AppApi>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("professional".to_owned());
    let tone = RwSignal::new("formal".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = SignupForm {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            role: role.get(),
            tone: tone.get(),
        };
        if let Err(message) = form.validate() {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating your account...".to_owned());
        start_signup(&api.get_untracked(), form, info, busy);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Auralis"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="professional">"Professional"</option>
                        <option value="manager">"Manager"</option>
                        <option value="engineer">"Engineer"</option>
                        <option value="student">"Student"</option>
                    </select>
                    <select
                        class="auth-input"
                        prop:value=move || tone.get()
                        on:change=move |ev| tone.set(event_target_value(&ev))
                    >
                        <option value="formal">"Formal"</option>
                        <option value="casual">"Casual"</option>
                        <option value="friendly">"Friendly"</option>
                    </select>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-footnote">
                    "Already have an account? "
                    <a href=config::LOGIN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
