//! Reusable view components.

pub mod loading_screen;
pub mod private_route;
