//! One-shot reveal-on-scroll bookkeeping.
//!
//! DESIGN
//! ======
//! `RevealController` owns the set of registered targets and decides when a
//! target turns visible. Observation itself is delegated to a
//! [`ViewportObserver`] chosen once at startup through [`ObserverStrategy`]:
//! the browser build plugs in an `IntersectionObserver` wrapper, and runtimes
//! without one get [`ObserverStrategy::AlwaysVisible`], which reveals each
//! target the moment it registers.
//!
//! INVARIANTS
//! ==========
//! - A target transitions Hidden -> Visible at most once and never back.
//! - A target is unobserved in the same step it becomes visible.
//! - After [`RevealController::teardown`] no sample and no registration has
//!   any effect.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of an element that must be inside the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Viewport observation backend.
pub trait ViewportObserver {
    /// Element handle; equality is element identity.
    type Target: Clone + PartialEq;

    fn observe(&mut self, target: &Self::Target);
    fn unobserve(&mut self, target: &Self::Target);
    fn disconnect(&mut self);
}

/// Observation capability selected at startup.
#[derive(Debug)]
pub enum ObserverStrategy<O> {
    Observed(O),
    /// No observation facility; every target is shown on registration.
    AlwaysVisible,
}

/// One intersection report from the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionSample<T> {
    pub target: T,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// What `register` did with a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// Now being observed, still hidden.
    Observing,
    /// Revealed immediately; the caller applies the visible effect.
    RevealedNow,
    /// Already tracked; nothing changed.
    Duplicate,
    /// Controller torn down; ignored.
    Closed,
}

struct Tracked<T> {
    target: T,
    visibility: Visibility,
}

pub struct RevealController<O: ViewportObserver> {
    strategy: ObserverStrategy<O>,
    threshold: f64,
    tracked: Vec<Tracked<O::Target>>,
    closed: bool,
}

impl<O: ViewportObserver> RevealController<O> {
    pub fn new(strategy: ObserverStrategy<O>) -> Self {
        Self::with_threshold(strategy, REVEAL_THRESHOLD)
    }

    pub fn with_threshold(strategy: ObserverStrategy<O>, threshold: f64) -> Self {
        Self {
            strategy,
            threshold,
            tracked: Vec::new(),
            closed: false,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Start tracking `target`. Re-registering a known target is a no-op.
    pub fn register(&mut self, target: O::Target) -> Registration {
        if self.closed {
            return Registration::Closed;
        }
        if self.tracked.iter().any(|t| t.target == target) {
            return Registration::Duplicate;
        }
        match &mut self.strategy {
            ObserverStrategy::Observed(observer) => {
                observer.observe(&target);
                self.tracked.push(Tracked {
                    target,
                    visibility: Visibility::Hidden,
                });
                Registration::Observing
            }
            ObserverStrategy::AlwaysVisible => {
                self.tracked.push(Tracked {
                    target,
                    visibility: Visibility::Visible,
                });
                Registration::RevealedNow
            }
        }
    }

    /// Apply intersection reports and return the targets that just turned
    /// visible, in report order.
    pub fn handle_samples(&mut self, samples: &[IntersectionSample<O::Target>]) -> Vec<O::Target> {
        let mut revealed = Vec::new();
        if self.closed {
            return revealed;
        }
        for sample in samples {
            if !sample.is_intersecting || sample.ratio < self.threshold {
                continue;
            }
            let Some(entry) = self
                .tracked
                .iter_mut()
                .find(|t| t.target == sample.target && t.visibility == Visibility::Hidden)
            else {
                continue;
            };
            entry.visibility = Visibility::Visible;
            if let ObserverStrategy::Observed(observer) = &mut self.strategy {
                observer.unobserve(&entry.target);
            }
            revealed.push(entry.target.clone());
        }
        revealed
    }

    /// Current state of `target`, or `None` when it was never registered.
    pub fn visibility(&self, target: &O::Target) -> Option<Visibility> {
        self.tracked
            .iter()
            .find(|t| t.target == *target)
            .map(|t| t.visibility)
    }

    /// Targets still waiting for their reveal.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.tracked
            .iter()
            .filter(|t| t.visibility == Visibility::Hidden)
            .count()
    }

    /// Stop all observation. Later samples and registrations are ignored.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        if let ObserverStrategy::Observed(observer) = &mut self.strategy {
            observer.disconnect();
        }
        self.tracked.clear();
        self.closed = true;
    }
}
