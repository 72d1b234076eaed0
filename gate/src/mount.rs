//! A route guard bound to one provider, one location, and one navigator.
//!
//! Mounting evaluates immediately and subscribes; every provider write
//! re-evaluates. Navigation fires only when the decision changes, so an
//! unchanged snapshot never replaces history twice. Unmounting (or dropping)
//! disposes the subscription.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::GuardConfig;
use crate::decision::{NavigationIntent, RenderDecision, RouteGuard};
use crate::provider::{AuthProvider, Subscription};
use crate::state::AuthState;

/// Router collaborator that performs guard redirects.
pub trait Navigator {
    /// Navigate to `intent`, replacing the current history entry.
    fn replace(&self, intent: &NavigationIntent);
}

impl<F> Navigator for F
where
    F: Fn(&NavigationIntent),
{
    fn replace(&self, intent: &NavigationIntent) {
        self(intent);
    }
}

/// Live guard for one mounted route.
#[derive(Debug)]
pub struct GuardMount {
    decision: Rc<RefCell<RenderDecision>>,
    location: String,
    subscription: Subscription,
}

impl GuardMount {
    /// Evaluate against the provider's current state and subscribe for changes.
    pub fn mount<U, P, N>(
        provider: &AuthProvider<U, P>,
        guard: RouteGuard,
        config: GuardConfig,
        location: impl Into<String>,
        navigator: N,
    ) -> Self
    where
        U: Clone + 'static,
        P: Clone + 'static,
        N: Navigator + 'static,
    {
        let location = location.into();
        let initial = guard.evaluate(&provider.snapshot(), config, &location);
        tracing::debug!(%location, decision = initial.label(), "guard mounted");
        apply(&navigator, &location, &initial);

        let decision = Rc::new(RefCell::new(initial));
        let current = Rc::clone(&decision);
        let mounted_at = location.clone();
        let subscription = provider.subscribe(move |state: &AuthState<U, P>| {
            let next = guard.evaluate(state, config, &mounted_at);
            if *current.borrow() == next {
                return;
            }
            tracing::debug!(location = %mounted_at, decision = next.label(), "guard decision changed");
            *current.borrow_mut() = next.clone();
            apply(&navigator, &mounted_at, &next);
        });

        Self { decision, location, subscription }
    }

    /// Most recent decision.
    #[must_use]
    pub fn decision(&self) -> RenderDecision {
        self.decision.borrow().clone()
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Stop reacting to provider writes.
    pub fn unmount(self) {
        tracing::debug!(location = %self.location, "guard unmounted");
        self.subscription.dispose();
    }
}

fn apply<N: Navigator>(navigator: &N, location: &str, decision: &RenderDecision) {
    if let Some(intent) = decision.redirect() {
        tracing::debug!(%location, to = %intent.to, "guard redirect");
        navigator.replace(intent);
    }
}
