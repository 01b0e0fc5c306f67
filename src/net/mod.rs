//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles authenticated REST calls and the 401 redirect policy,
//! `error` defines the failure taxonomy, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod error;
pub mod types;
