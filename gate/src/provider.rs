//! Push-based owner of the current auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider is the only writer of `AuthState`. Guards register listeners
//! and receive a snapshot after every write; they never poll.
//!
//! DESIGN
//! ======
//! Single-threaded (`Rc` + `RefCell`), matching the UI event loop. Writes
//! made from inside a listener are coalesced: the current notification round
//! finishes, then every listener is notified again with the latest state.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::state::AuthState;

type Listener<U, P> = Rc<dyn Fn(&AuthState<U, P>)>;

struct Inner<U, P> {
    state: RefCell<AuthState<U, P>>,
    listeners: RefCell<Vec<(u64, Listener<U, P>)>>,
    next_id: Cell<u64>,
    notifying: Cell<bool>,
    dirty: Cell<bool>,
}

/// Shared handle to an auth state and its subscribers.
///
/// Cloning the handle shares the same state.
pub struct AuthProvider<U, P> {
    inner: Rc<Inner<U, P>>,
}

impl<U, P> Clone for AuthProvider<U, P> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<U, P> Default for AuthProvider<U, P>
where
    U: Clone + 'static,
    P: Clone + 'static,
{
    /// A provider that has not resolved its initial check.
    fn default() -> Self {
        Self::new(AuthState::loading())
    }
}

impl<U, P> AuthProvider<U, P>
where
    U: Clone + 'static,
    P: Clone + 'static,
{
    #[must_use]
    pub fn new(initial: AuthState<U, P>) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(initial),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                notifying: Cell::new(false),
                dirty: Cell::new(false),
            }),
        }
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> AuthState<U, P> {
        self.inner.state.borrow().clone()
    }

    /// Replace the state and notify subscribers.
    pub fn set(&self, state: AuthState<U, P>) {
        *self.inner.state.borrow_mut() = state;
        self.notify();
    }

    /// Mutate the state in place and notify subscribers.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut AuthState<U, P>),
    {
        f(&mut *self.inner.state.borrow_mut());
        self.notify();
    }

    /// Register a listener called with the new state after every write.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// disposed or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&AuthState<U, P>) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::new(listener)));

        let weak: Weak<Inner<U, P>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.inner.listeners.borrow().iter().any(|(lid, _)| *lid == id)
    }

    fn notify(&self) {
        if self.inner.notifying.get() {
            self.inner.dirty.set(true);
            return;
        }
        loop {
            self.inner.notifying.set(true);
            self.inner.dirty.set(false);

            let snapshot = self.snapshot();
            let listeners: Vec<(u64, Listener<U, P>)> =
                self.inner.listeners.borrow().iter().map(|(id, l)| (*id, Rc::clone(l))).collect();
            for (id, listener) in listeners {
                // Skip listeners disposed earlier in this round.
                if self.is_registered(id) {
                    listener(&snapshot);
                }
            }

            self.inner.notifying.set(false);
            if !self.inner.dirty.get() {
                break;
            }
        }
    }
}

/// Registration handle returned by [`AuthProvider::subscribe`].
///
/// Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F>(dispose: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self { dispose: Some(Box::new(dispose)) }
    }

    /// Unsubscribe now.
    pub fn dispose(mut self) {
        self.run_dispose();
    }

    fn run_dispose(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_dispose();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.dispose.is_some()).finish()
    }
}
