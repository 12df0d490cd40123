//! Browser/environment helpers used by the page controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM effects, viewport
//! observation) from state and component logic to improve reuse and
//! testability.

pub mod dom;
pub mod storage;
#[cfg(feature = "hydrate")]
pub mod viewport;
