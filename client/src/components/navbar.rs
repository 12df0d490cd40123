//! Sticky navigation bar with desktop links, mobile menu, and theme toggles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every in-page link goes through [`NavLink`], which cancels the browser's
//! fragment jump and hands the section name to the navigation router. The
//! mobile menu is rendered only while `NavState::mobile_open` is set.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::SiteContent;
use crate::state::nav::{NavState, NavTarget, navigate_to};
use crate::util::dom::DomSurface;

const MENU_CLOSED_PATH: &str = "M4 6h16M4 12h16M4 18h16";
const MENU_OPEN_PATH: &str = "M6 18L18 6M6 6l12 12";

/// SVG path for the menu button: a close glyph while open, else a hamburger.
#[must_use]
pub fn menu_icon_path(open: bool) -> &'static str {
    if open { MENU_OPEN_PATH } else { MENU_CLOSED_PATH }
}

/// Anchor that smooth-scrolls to a page section.
#[component]
pub fn NavLink(target: NavTarget, #[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let mut state = nav.get_untracked();
        navigate_to(&mut state, target.id(), &DomSurface);
        nav.set(state);
    };

    view! {
        <a href=target.href() class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let profile = expect_context::<SiteContent>().profile;

    view! {
        <nav class="navbar">
            <div class="container navbar__inner">
                <NavLink target=NavTarget::Hero class="navbar__brand">
                    <img class="navbar__avatar" src=profile.avatar alt="avatar" loading="lazy"/>
                    <span class="navbar__name">{profile.name}</span>
                </NavLink>

                <div class="navbar__links">
                    <NavLink target=NavTarget::About class="link link-hover">"About"</NavLink>
                    <NavLink target=NavTarget::Projects class="link link-hover">"Projects"</NavLink>
                    <NavLink target=NavTarget::Contact class="link link-hover">"Contact"</NavLink>
                    <NavLink target=NavTarget::Footer class="btn btn-primary btn-sm">"Hire me"</NavLink>
                    <ThemeToggle/>
                </div>

                <div class="navbar__compact">
                    <ThemeToggle/>
                    <button
                        class="btn btn-ghost btn-circle"
                        aria-label="Toggle menu"
                        aria-expanded=move || nav.get().mobile_open.to_string()
                        on:click=move |_| nav.update(NavState::toggle_mobile_menu)
                    >
                        <svg
                            xmlns="http://www.w3.org/2000/svg"
                            class="navbar__icon"
                            fill="none"
                            viewBox="0 0 24 24"
                            stroke="currentColor"
                        >
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || menu_icon_path(nav.get().mobile_open)
                            />
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || nav.get().mobile_open>
                <div class="navbar__mobile">
                    <NavLink target=NavTarget::About class="navbar__mobile-link">"About"</NavLink>
                    <NavLink target=NavTarget::Projects class="navbar__mobile-link">"Projects"</NavLink>
                    <NavLink target=NavTarget::Contact class="navbar__mobile-link">"Contact"</NavLink>
                    <NavLink target=NavTarget::Footer class="btn btn-primary btn-block">"Hire me"</NavLink>
                </div>
            </Show>
        </nav>
    }
}
