//! Dashboard page: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! First stop after login. Greets the signed-in user and shows the next
//! few calendar events; the bootstrap check has already bounced
//! unauthenticated visitors before this renders anything useful.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::top_bar::TopBar;
use crate::net::types::CalendarEvent;
use crate::state::auth::AuthState;

/// Headline for the dashboard; degrades to a nameless greeting while the
/// cached user record is missing or unreadable.
pub(crate) fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome back, {name}"),
        _ => "Welcome back".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let events = RwSignal::new(Vec::<CalendarEvent>::new());
    let events_loading = RwSignal::new(true);
    let events_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<RwSignal<crate::app::AppApi>>().get_untracked();
        leptos::task::spawn_local(async move {
            match api.fetch_calendar_events().await {
                Ok(items) => events.set(items),
                Err(e) => events_error.set(Some(format!("Could not load calendar: {e}"))),
            }
            events_loading.set(false);
        });
    }

    let headline = move || greeting(auth.get().user_name());

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <TopBar/>
                <main class="dashboard-page__content">
                    <h1>{headline}</h1>
                    <section class="calendar-card">
                        <h2>"Upcoming Events"</h2>
                        <Show when=move || events_error.get().is_some()>
                            <p class="calendar-card__error">
                                {move || events_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <Show
                            when=move || !events_loading.get()
                            fallback=move || view! { <p>"Loading calendar..."</p> }
                        >
                            <Show when=move || events_error.get().is_none()>
                                <Show
                                    when=move || !events.get().is_empty()
                                    fallback=move || {
                                        view! { <p class="calendar-card__empty">"No upcoming events."</p> }
                                    }
                                >
                                    <ul class="calendar-card__list">
                                        {move || {
                                            events
                                                .get()
                                                .into_iter()
                                                .map(|event| {
                                                    let when = event.start;
                                                    match event.link {
                                                        Some(link) => {
                                                            view! {
                                                                <li class="calendar-card__item">
                                                                    <span class="calendar-card__when">{when}</span>
                                                                    <a href=link target="_blank" rel="noopener">
                                                                        {event.summary}
                                                                    </a>
                                                                </li>
                                                            }
                                                                .into_any()
                                                        }
                                                        None => {
                                                            view! {
                                                                <li class="calendar-card__item">
                                                                    <span class="calendar-card__when">{when}</span>
                                                                    <span>{event.summary}</span>
                                                                </li>
                                                            }
                                                                .into_any()
                                                        }
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </ul>
                                </Show>
                            </Show>
                        </Show>
                    </section>
                </main>
            </div>
        </Show>
    }
}
