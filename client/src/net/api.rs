//! REST calls backing the client-side auth provider.
//!
//! In the browser (hydrate) these issue real requests via `gloo-net`; during
//! SSR and native tests they resolve to `None`/`Err` immediately, so the auth
//! bootstrap always finishes.
//!
//! ERROR HANDLING
//! ==============
//! A failed session or profile fetch becomes an absent field rather than an
//! error. The route guard treats absence as "not signed in", never as a fault.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{User, UserProfile};

pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";
pub const LOGOUT_ENDPOINT: &str = "/api/auth/logout";

/// Browser entry point of the OAuth sign-in flow. The server sends the
/// visitor back to `return_to` once the session cookie is set.
pub const OAUTH_START_ENDPOINT: &str = "/auth/github";

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(user_id: &str) -> String {
    format!("/api/users/{}/profile", urlencoding::encode(user_id))
}

/// Sign-in URL that returns the visitor to `return_to` afterwards.
pub fn sign_in_url(return_to: &str) -> String {
    format!("{OAUTH_START_ENDPOINT}?return_to={}", urlencoding::encode(return_to))
}

/// Fetch the signed-in identity from `/api/auth/me`.
/// Returns `None` if not authenticated, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        match resp.json::<User>().await {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("auth/me returned an unreadable body: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session with `POST /api/auth/logout`. Failures are logged only.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}

/// Fetch the player profile for `user_id` from `/api/users/{user_id}/profile`.
///
/// Profiles are created on first game launch, so a signed-in user can
/// legitimately have none yet.
pub async fn fetch_user_profile(user_id: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let url = user_profile_endpoint(user_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        match resp.json::<UserProfile>().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("profile for {user_id} returned an unreadable body: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}
