//! Reactive state shared across pages via Leptos context.

pub mod auth;
