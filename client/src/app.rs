//! Root application component with the page route and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_toggle::browser_theme;
use crate::content::SiteContent;
use crate::pages::home::HomePage;
use crate::state::nav::NavState;
use crate::state::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=Theme::default().as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides site content, the theme signal, and mobile-menu state, then
/// resolves the persisted theme once the page is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::load();
    let title = format!("{} | {}", content.profile.name, content.profile.title);
    let theme = RwSignal::new(Theme::default());
    let nav = RwSignal::new(NavState::default());

    provide_context(content);
    provide_context(theme);
    provide_context(nav);

    // Effects only run in the browser, where storage and `<html>` exist.
    Effect::new(move || {
        let initial = browser_theme().initialize();
        leptos::logging::log!("initial theme: {initial}");
        theme.set(initial);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
