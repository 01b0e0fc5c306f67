//! Session lifecycle: storage, navigation, and the bootstrap check.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` persists the token and cached user record, `navigator` wraps
//! page location and redirects, and `bootstrap` decides where a fresh
//! page load belongs. Storage and navigation are traits so every policy
//! in here runs under plain `cargo test`.

pub mod bootstrap;
pub mod navigator;
pub mod store;
