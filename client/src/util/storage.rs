//! Browser `localStorage` access for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the hydrated browser build has storage. SSR and native test builds
//! report [`StorageError::Unavailable`] so callers exercise their fallback
//! path instead of silently pretending a value was stored.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::theme::PreferenceStore;

/// Failure reading or writing the preference slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage access failed: {0}")]
    Access(String),
}

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Access(crate::util::dom::describe_js_error(&e))),
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Access(crate::util::dom::describe_js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _key = key;
            Err(StorageError::Unavailable)
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Access(crate::util::dom::describe_js_error(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _entry = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}
