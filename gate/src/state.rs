//! Auth-session snapshot as published by the auth provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns and mutates this value; guards only ever read a clone.
//! `user` and `profile` resolve independently because the profile fetch runs
//! after sign-in and may lag or fail.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Authentication state tracking the session, the profile, and loading status.
///
/// `U` is the opaque session/identity record and `P` the application-level
/// profile record. The guard only inspects their presence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState<U, P> {
    /// Identity record, present once sign-in completes.
    pub user: Option<U>,
    /// Application profile, present once the profile fetch resolves.
    pub profile: Option<P>,
    /// True until the provider resolves its initial auth check.
    #[serde(default)]
    pub loading: bool,
}

impl<U, P> Default for AuthState<U, P> {
    fn default() -> Self {
        Self { user: None, profile: None, loading: false }
    }
}

impl<U, P> AuthState<U, P> {
    /// State of a provider that has not finished its initial check.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, profile: None, loading: true }
    }

    /// Resolved state with no session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolved state with both a session and a profile.
    #[must_use]
    pub fn signed_in(user: U, profile: P) -> Self {
        Self { user: Some(user), profile: Some(profile), loading: false }
    }

    /// Whether both the session and the profile are present.
    ///
    /// A session whose profile has not resolved counts as not yet
    /// authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.profile.is_some()
    }
}
