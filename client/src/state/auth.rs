//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided app-wide as `RwSignal<AuthState>`; the signal is the auth
//! provider. `util::auth` writes it, `PrivateRoute` and user-aware components
//! read it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{User, UserProfile};

/// Session plus profile, with loading status, as seen by the route guard.
pub type AuthState = gate::AuthState<User, UserProfile>;

/// Name to greet the player with: profile name first, then account name.
pub fn display_name(state: &AuthState) -> Option<String> {
    state
        .profile
        .as_ref()
        .map(|p| p.display_name.clone())
        .or_else(|| state.user.as_ref().map(|u| u.name.clone()))
}
