//! Light/dark theme preference.
//!
//! DESIGN
//! ======
//! The active theme lives in a single `RwSignal<Theme>` provided at the app
//! root. `ThemePreference` is the only writer of the persisted slot and of the
//! document `data-theme` attribute, so the rest of the page only ever reads
//! the signal.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never escape: reads fall back to [`Theme::Light`] and
//! write failures are logged while the in-memory theme still changes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::util::storage::StorageError;

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the root element consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Page-wide visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute/storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a persisted value is neither `"light"` nor `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme value: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Key-value persistence slot for user preferences.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the key was never written.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is missing or throws.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is missing or throws.
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Document-level sink for the active theme.
pub trait ThemeSurface {
    fn apply_theme(&self, theme: Theme);
}

/// Read-or-default initialization plus the single theme mutator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemePreference<S, D> {
    store: S,
    surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemePreference<S, D> {
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface }
    }

    /// Persisted theme if present and valid, otherwise [`Theme::Light`].
    ///
    /// The system color-scheme preference is not consulted.
    pub fn get_initial(&self) -> Theme {
        match self.store.load(STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: UnknownTheme| {
                leptos::logging::warn!("ignoring persisted theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                leptos::logging::warn!("theme storage unavailable: {e}");
                Theme::default()
            }
        }
    }

    /// Resolve the initial theme and apply it to the document.
    pub fn initialize(&self) -> Theme {
        let theme = self.get_initial();
        self.surface.apply_theme(theme);
        theme
    }

    /// Switch away from `current`, apply and persist the result.
    ///
    /// Returns the new active theme even when persisting fails.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.surface.apply_theme(next);
        if let Err(e) = self.store.save(STORAGE_KEY, next.as_str()) {
            leptos::logging::warn!("failed to persist theme {next}: {e}");
        }
        next
    }
}
