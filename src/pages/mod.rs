//! Page components, one per route.

pub mod dashboard;
pub mod login;
pub mod settings;
pub mod signup;
