//! Light/dark theme toggle button.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemePreference};
use crate::util::dom::DomSurface;
use crate::util::storage::BrowserStorage;

/// Theme preference wired to `localStorage` and the live document.
pub fn browser_theme() -> ThemePreference<BrowserStorage, DomSurface> {
    ThemePreference::new(BrowserStorage, DomSurface)
}

/// Glyph shown on the toggle: the mode a click switches to.
#[must_use]
pub fn toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☾",
        Theme::Dark => "☀",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let prefs = browser_theme();

    view! {
        <button
            class="btn btn-ghost btn-sm theme-toggle"
            on:click=move |_| {
                let current = theme.get_untracked();
                theme.set(prefs.toggle(current));
            }
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || toggle_glyph(theme.get())}
        </button>
    }
}
