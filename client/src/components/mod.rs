//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod navbar;
pub mod reveal;
pub mod theme_toggle;
