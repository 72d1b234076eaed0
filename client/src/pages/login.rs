//! Sign-in page, shown only to anonymous visitors.
//!
//! A guarded route that turned the visitor away attaches `?from=<location>`.
//! The sign-in link forwards that location to the OAuth flow so the server
//! can send the player back there.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gate::RouteGuard;
use gate::decision::FROM_PARAM;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let guard = use_context::<RouteGuard>().unwrap_or_default();
    let query = use_query_map();

    let href = move || sign_in_href(&guard, query.with(|q| q.get(FROM_PARAM)).as_deref());

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Gauntlet Arena"</h1>
                <p class="login-card__subtitle">"Sign in to play"</p>
                <a href=href class="login-button" rel="external">
                    "Sign in with GitHub"
                </a>
            </div>
        </div>
    }
}

/// OAuth sign-in link that returns the player to a safe `from` location.
pub fn sign_in_href(guard: &RouteGuard, from: Option<&str>) -> String {
    api::sign_in_url(&guard.return_path(from))
}
