//! Root application component with routing and the auth provider context.

use gate::RouteGuard;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::private_route::PrivateRoute;
use crate::pages::{game::GamePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::util::auth::install_auth_bootstrap;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth signal (initially loading) and the route guard, then
/// wraps every route in a `PrivateRoute`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::loading());
    let guard = RouteGuard::default();
    let home = guard.targets().home.clone();
    provide_context(auth);
    provide_context(guard);
    install_auth_bootstrap(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/gauntlet-arena.css"/>
        <Title text="Gauntlet Arena"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("auth")
                    view=|| view! { <PrivateRoute require_auth=false><LoginPage/></PrivateRoute> }
                />
                <Route
                    path=StaticSegment("game")
                    view=|| view! { <PrivateRoute><GamePage/></PrivateRoute> }
                />
                <Route path=StaticSegment("") view=move || view! { <Redirect path=home.clone()/> }/>
            </Routes>
        </Router>
    }
}
