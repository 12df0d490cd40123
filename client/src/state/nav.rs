//! In-page navigation and mobile menu state.
//!
//! DESIGN
//! ======
//! Link clicks carry a section name. Any click closes the mobile menu; the
//! router then resolves the name against a [`ScrollSurface`] and scrolls only
//! when a matching section exists. A name with no section is absorbed.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::str::FromStr;

/// Addressable page sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl NavTarget {
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
        Self::Footer,
    ];

    /// Element id of the section.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Footer => "footer",
        }
    }

    /// Fragment link used as the anchor `href`.
    #[must_use]
    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl FromStr for NavTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.id() == s).ok_or(())
    }
}

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub mobile_open: bool,
}

impl NavState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }
}

/// Result of a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Section found and scrolled to.
    Scrolled(String),
    /// No element carries that id; nothing scrolled.
    Missing(String),
}

/// Element lookup and scrolling for navigation.
pub trait ScrollSurface {
    type Element;

    fn find(&self, id: &str) -> Option<Self::Element>;
    fn scroll_to(&self, element: &Self::Element);
}

/// Navigate to the section named `target`.
///
/// The mobile menu is closed whether or not the section exists; the scroll
/// happens only when it does.
pub fn navigate_to<S: ScrollSurface>(nav: &mut NavState, target: &str, surface: &S) -> NavOutcome {
    nav.mobile_open = false;
    let Some(element) = surface.find(target) else {
        leptos::logging::log!("nav target {target:?} not found");
        return NavOutcome::Missing(target.to_owned());
    };
    surface.scroll_to(&element);
    NavOutcome::Scrolled(target.to_owned())
}
