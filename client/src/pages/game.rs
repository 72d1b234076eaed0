//! Game lobby page, shown only to signed-in players with a profile.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use leptos::prelude::*;

use crate::state::auth::{AuthState, display_name};
use crate::util::auth::sign_out;

#[component]
pub fn GamePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let title = move || auth.with(|state| greeting(display_name(state).as_deref()));
    let games_played = move || auth.with(|state| state.profile.as_ref().map_or(0, |p| p.games_played));

    view! {
        <div class="game-page">
            <header class="game-page__header">
                <h1>{title}</h1>
                <button class="game-page__sign-out" on:click=move |_| sign_out(auth)>
                    "Sign out"
                </button>
            </header>
            <p class="game-page__stats">"Games played: " {games_played}</p>
            <div id="game-root" class="game-page__stage"></div>
        </div>
    }
}

pub fn greeting(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Welcome back, {}", name.trim()),
        _ => "Welcome back".to_owned(),
    }
}
