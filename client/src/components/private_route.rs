//! Route wrapper that gates its children on auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route mounts one `PrivateRoute`. It reads the app-wide
//! `RwSignal<AuthState>` and re-runs `gate::RouteGuard::evaluate` whenever the
//! signal or the location changes. Redirects replace the history entry so
//! back-navigation never returns to the gated route.
//!
//! `require_auth = true` (default) protects the children; `false` makes them
//! anonymous-only, for the sign-in screen.

#[cfg(test)]
#[path = "private_route_test.rs"]
mod private_route_test;

use gate::{GuardConfig, NavigationIntent, RenderDecision, RouteGuard};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading_screen::LoadingScreen;
use crate::state::auth::AuthState;

#[component]
pub fn PrivateRoute(#[prop(default = true)] require_auth: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let guard = use_context::<RouteGuard>().unwrap_or_default();
    let location = use_location();
    let config = GuardConfig { require_auth };

    let decision = Memo::new(move |_| {
        let here = current_location(&location.pathname.get(), &location.search.get());
        auth.with(|state| guard.evaluate(state, config, &here))
    });

    guarded_view(decision.into(), children)
}

/// Map a guard decision onto the placeholder, a redirect, or the children.
pub fn guarded_view(decision: Signal<RenderDecision>, children: ChildrenFn) -> impl IntoView {
    move || match decision.get() {
        RenderDecision::ShowLoading { message } => view! { <LoadingScreen message=message/> }.into_any(),
        RenderDecision::RedirectToLogin(intent) | RenderDecision::RedirectToHome(intent) => {
            #[cfg(feature = "hydrate")]
            log::debug!("guard redirect to {}", intent.href());
            view! { <Redirect path=intent.href() options=redirect_options(&intent)/> }.into_any()
        }
        RenderDecision::RenderChildren => children().into_any(),
    }
}

/// Path plus query string, as attached to login redirects.
pub fn current_location(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}

/// Router options for a guard redirect.
pub fn redirect_options(intent: &NavigationIntent) -> NavigateOptions {
    NavigateOptions { replace: intent.replace, ..NavigateOptions::default() }
}
