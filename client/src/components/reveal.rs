//! Reveal-on-scroll wrapper and the page-wide controller handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page installs one [`RevealHandle`] and provides it through context.
//! Each [`Reveal`] block registers its element once mounted; the controller
//! applies the `reveal-visible` class when the block first scrolls into view.
//! On the server both pieces render static markup only.

#[cfg(feature = "hydrate")]
use crate::state::reveal::{REVEAL_THRESHOLD, Registration, RevealController};
#[cfg(feature = "hydrate")]
use crate::util::{dom, viewport};
use leptos::prelude::*;

/// Copyable handle to the page's reveal controller.
#[derive(Clone, Copy)]
pub struct RevealHandle {
    #[cfg(feature = "hydrate")]
    controller: StoredValue<Option<RevealController<viewport::DomObserver>>, LocalStorage>,
}

impl RevealHandle {
    /// Create the controller, selecting the observation strategy for this
    /// runtime. Must run under a reactive owner.
    pub fn install() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let controller = StoredValue::new_local(None::<RevealController<viewport::DomObserver>>);
            let strategy = viewport::select_strategy(REVEAL_THRESHOLD, move |samples| {
                controller.update_value(|slot| {
                    if let Some(reveal) = slot.as_mut() {
                        for element in reveal.handle_samples(&samples) {
                            dom::mark_revealed(&element);
                        }
                    }
                });
            });
            controller.set_value(Some(RevealController::new(strategy)));
            Self { controller }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }

    /// Track `element` until it is revealed.
    pub fn register(self, element: &leptos::web_sys::Element) {
        #[cfg(feature = "hydrate")]
        {
            self.controller.update_value(|slot| {
                let Some(reveal) = slot.as_mut() else {
                    return;
                };
                if reveal.register(element.clone()) == Registration::RevealedNow {
                    dom::mark_revealed(element);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _element = element;
        }
    }

    /// Stop observing everything.
    pub fn teardown(self) {
        #[cfg(feature = "hydrate")]
        {
            self.controller.update_value(|slot| {
                if let Some(reveal) = slot.as_mut() {
                    reveal.teardown();
                }
            });
        }
    }
}

/// Block that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let reveal = expect_context::<RevealHandle>();
    let node_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if let Some(element) = node_ref.get() {
            reveal.register(&element);
        }
    });

    view! {
        <div node_ref=node_ref class=format!("reveal {class}")>
            {children()}
        </div>
    }
}
