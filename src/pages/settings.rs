//! Settings page: profile edits and password changes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the account profile over the API, lets the user edit name, role,
//! and tone, and keeps the cached session record in step with saved
//! changes so the top bar shows the new name immediately.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;

use crate::app::AppApi;
use crate::components::top_bar::TopBar;
use crate::session::store::StoredUser;
use crate::state::auth::AuthState;

/// Client-side mirror of the server's password rule.
pub(crate) fn validate_new_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

/// Cached record to keep after a profile save: the new name plus whatever
/// identity details the old record carried.
pub(crate) fn refreshed_user(current: Option<&StoredUser>, new_name: &str) -> StoredUser {
    StoredUser {
        name: new_name.trim().to_owned(),
        email: current.and_then(|u| u.email.clone()),
        avatar: current.and_then(|u| u.avatar.clone()),
    }
}

fn start_profile_save(
    api: &AppApi,
    name: String,
    role: String,
    tone: String,
    auth: RwSignal<AuthState>,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::session::store::SessionStore;

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.update_profile(name.trim(), &role, &tone).await {
                Ok(()) => {
                    let user = refreshed_user(api.store().stored_user().as_ref(), &name);
                    api.store().save_user(&user);
                    auth.update(|a| a.user = Some(user));
                    info.set("Profile updated.".to_owned());
                }
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, name, role, tone, auth, info, busy);
    }
}

fn start_password_change(
    api: &AppApi,
    password: RwSignal<String>,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.change_password(&password.get_untracked()).await {
                Ok(()) => {
                    password.set(String::new());
                    info.set("Password changed.".to_owned());
                }
                Err(e) => info.set(format!("Password change failed: {e}")),
            }
            busy.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, password, info, busy);
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<RwSignal<AppApi>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new("professional".to_owned());
    let tone = RwSignal::new("formal".to_owned());
    let avatar = RwSignal::new(None::<String>);
    let profile_loading = RwSignal::new(true);
    let profile_info = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let password = RwSignal::new(String::new());
    let password_info = RwSignal::new(String::new());
    let changing = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let api = api.get_untracked();
        leptos::task::spawn_local(async move {
            match api.fetch_profile().await {
                Ok(profile) => {
                    name.set(profile.name.unwrap_or_default());
                    email.set(profile.email.unwrap_or_default());
                    role.set(profile.role.unwrap_or_else(|| "professional".to_owned()));
                    tone.set(profile.tone.unwrap_or_else(|| "formal".to_owned()));
                    avatar.set(profile.avatar);
                }
                Err(e) => profile_info.set(format!("Could not load profile: {e}")),
            }
            profile_loading.set(false);
        });
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        let name_value = name.get();
        if name_value.trim().is_empty() {
            profile_info.set("Name cannot be empty.".to_owned());
            return;
        }
        saving.set(true);
        profile_info.set("Saving...".to_owned());
        start_profile_save(
            &api.get_untracked(),
            name_value,
            role.get(),
            tone.get(),
            auth,
            profile_info,
            saving,
        );
    };

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if changing.get() {
            return;
        }
        if let Err(message) = validate_new_password(&password.get()) {
            password_info.set(message.to_owned());
            return;
        }
        changing.set(true);
        password_info.set("Changing password...".to_owned());
        start_password_change(&api.get_untracked(), password, password_info, changing);
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="settings-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="settings-page">
                <TopBar/>
                <main class="settings-page__content">
                    <h1>"Settings"</h1>
                    <section class="settings-card">
                        <h2>"Profile"</h2>
                        <Show
                            when=move || !profile_loading.get()
                            fallback=move || view! { <p>"Loading profile..."</p> }
                        >
                            <form class="settings-form" on:submit=on_save>
                                <Show when=move || avatar.get().is_some()>
                                    <img
                                        class="settings-form__avatar"
                                        src=move || avatar.get().unwrap_or_default()
                                        alt="Profile picture"
                                    />
                                </Show>
                                <label class="settings-form__label">
                                    "Name"
                                    <input
                                        class="settings-form__input"
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="settings-form__label">
                                    "Email"
                                    <input
                                        class="settings-form__input"
                                        type="email"
                                        disabled=true
                                        prop:value=move || email.get()
                                    />
                                </label>
                                <label class="settings-form__label">
                                    "Role"
                                    <select
                                        class="settings-form__input"
                                        prop:value=move || role.get()
                                        on:change=move |ev| role.set(event_target_value(&ev))
                                    >
                                        <option value="professional">"Professional"</option>
                                        <option value="manager">"Manager"</option>
                                        <option value="engineer">"Engineer"</option>
                                        <option value="student">"Student"</option>
                                    </select>
                                </label>
                                <label class="settings-form__label">
                                    "Tone"
                                    <select
                                        class="settings-form__input"
                                        prop:value=move || tone.get()
                                        on:change=move |ev| tone.set(event_target_value(&ev))
                                    >
                                        <option value="formal">"Formal"</option>
                                        <option value="casual">"Casual"</option>
                                        <option value="friendly">"Friendly"</option>
                                    </select>
                                </label>
                                <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                    "Save Changes"
                                </button>
                            </form>
                        </Show>
                        <Show when=move || !profile_info.get().is_empty()>
                            <p class="settings-card__message">{move || profile_info.get()}</p>
                        </Show>
                    </section>
                    <section class="settings-card">
                        <h2>"Password"</h2>
                        <form class="settings-form" on:submit=on_change_password>
                            <label class="settings-form__label">
                                "New password"
                                <input
                                    class="settings-form__input"
                                    type="password"
                                    placeholder="6+ characters"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn" type="submit" disabled=move || changing.get()>
                                "Change Password"
                            </button>
                        </form>
                        <Show when=move || !password_info.get().is_empty()>
                            <p class="settings-card__message">{move || password_info.get()}</p>
                        </Show>
                    </section>
                </main>
            </div>
        </Show>
    }
}
