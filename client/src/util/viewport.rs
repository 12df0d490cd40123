//! `IntersectionObserver` backend for reveal-on-scroll.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-only. The observer and its JS callback are owned together so
//! dropping the backend also disconnects it; no callback can outlive the
//! controller that consumes its reports.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::reveal::{IntersectionSample, ObserverStrategy, ViewportObserver};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live `IntersectionObserver` plus the closure it calls.
pub struct DomObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl DomObserver {
    /// Create an observer that fires when visibility crosses `threshold`.
    ///
    /// # Errors
    ///
    /// Returns the thrown JS value when the constructor rejects the options.
    pub fn new<F>(threshold: f64, mut on_samples: F) -> Result<Self, JsValue>
    where
        F: FnMut(Vec<IntersectionSample<Element>>) + 'static,
    {
        let callback: EntriesCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let samples = entries
                .iter()
                .map(|value| {
                    let entry = value.unchecked_into::<IntersectionObserverEntry>();
                    IntersectionSample {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    }
                })
                .collect();
            on_samples(samples);
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl ViewportObserver for DomObserver {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for DomObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the runtime exposes `window.IntersectionObserver`.
pub fn intersection_observer_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    matches!(
        js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")),
        Ok(true)
    )
}

/// Pick the observation strategy for this runtime.
///
/// Falls back to [`ObserverStrategy::AlwaysVisible`] when the API is missing
/// or refuses to construct, so content is never left hidden.
pub fn select_strategy<F>(threshold: f64, on_samples: F) -> ObserverStrategy<DomObserver>
where
    F: FnMut(Vec<IntersectionSample<Element>>) + 'static,
{
    if !intersection_observer_supported() {
        leptos::logging::warn!("IntersectionObserver unavailable; revealing sections immediately");
        return ObserverStrategy::AlwaysVisible;
    }
    match DomObserver::new(threshold, on_samples) {
        Ok(observer) => ObserverStrategy::Observed(observer),
        Err(e) => {
            leptos::logging::warn!(
                "IntersectionObserver construction failed ({}); revealing sections immediately",
                crate::util::dom::describe_js_error(&e)
            );
            ObserverStrategy::AlwaysVisible
        }
    }
}
