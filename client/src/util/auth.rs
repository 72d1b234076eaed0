//! Client-side auth provider lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app-wide `RwSignal<AuthState>` starts in the loading state. On hydrate
//! the bootstrap resolves the session and then the profile, and publishes the
//! result in one write so guards never observe a half-resolved state as
//! final. Every path out of `resolve_auth` clears `loading`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::AuthState;

/// Fetch the session and, when present, its profile.
pub async fn resolve_auth() -> AuthState {
    let Some(user) = api::fetch_current_user().await else {
        return AuthState::anonymous();
    };
    let profile = api::fetch_user_profile(&user.id).await;
    #[cfg(feature = "hydrate")]
    if profile.is_none() {
        log::info!("session {} has no profile yet", user.id);
    }
    AuthState { user: Some(user), profile, loading: false }
}

/// Start resolving auth in the background and publish the result to `auth`.
pub fn install_auth_bootstrap(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let state = resolve_auth().await;
        log::debug!("auth resolved: signed_in={}", state.is_authenticated());
        auth.set(state);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// End the session. Guards on protected routes react to the anonymous state
/// and redirect to sign-in.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        api::logout().await;
        auth.set(AuthState::anonymous());
    });
    #[cfg(not(feature = "hydrate"))]
    auth.set(AuthState::anonymous());
}
