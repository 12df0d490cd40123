//! DOM effect application.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every browser side effect of the page controller goes through one of the
//! small functions here: setting the theme attribute, scrolling a section into
//! view, marking a revealed element, opening an external link. Decision logic
//! in `state` never touches the DOM directly, which keeps it testable on the
//! native target. Outside the `hydrate` build all effects are no-ops.

use crate::state::nav::ScrollSurface;
use crate::state::theme::{Theme, ThemeSurface};

/// Class added to an element once it has been revealed.
pub const REVEALED_CLASS: &str = "reveal-visible";

/// Class on `<html>` marking a hydrated page. The stylesheet only hides
/// reveal blocks under it, so server-rendered content stays readable when
/// the WASM bundle never runs.
pub const SCRIPTED_CLASS: &str = "js";

/// Live document handle for theme and scroll effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomSurface;

impl ThemeSurface for DomSurface {
    fn apply_theme(&self, theme: Theme) {
        set_root_theme(theme);
    }
}

impl ScrollSurface for DomSurface {
    type Element = leptos::web_sys::Element;

    fn find(&self, id: &str) -> Option<Self::Element> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(id))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _id = id;
            None
        }
    }

    fn scroll_to(&self, element: &Self::Element) {
        scroll_to_top_of(element);
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn set_root_theme(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Err(e) = root.set_attribute(crate::state::theme::THEME_ATTRIBUTE, theme.as_str()) {
            leptos::logging::warn!("failed to apply theme {theme}: {}", describe_js_error(&e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _theme = theme;
    }
}

/// Tag `<html>` with [`SCRIPTED_CLASS`] once the client is live.
pub fn mark_scripted() {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Err(e) = root.class_list().add_1(SCRIPTED_CLASS) {
            leptos::logging::warn!("failed to mark page scripted: {}", describe_js_error(&e));
        }
    }
}

/// Smooth-scroll so the element's top meets the viewport top.
pub fn scroll_to_top_of(element: &leptos::web_sys::Element) {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _element = element;
    }
}

/// Add [`REVEALED_CLASS`] so the reveal transition plays.
pub fn mark_revealed(element: &leptos::web_sys::Element) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = element.class_list().add_1(REVEALED_CLASS) {
            leptos::logging::warn!("failed to mark element revealed: {}", describe_js_error(&e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _element = element;
    }
}

/// Open `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            leptos::logging::warn!("failed to open {url}: {}", describe_js_error(&e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _url = url;
    }
}

/// Render a thrown JS value for logs.
#[cfg(feature = "hydrate")]
pub fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
