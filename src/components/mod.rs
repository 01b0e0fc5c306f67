//! Reusable UI components shared across pages.

pub mod top_bar;
