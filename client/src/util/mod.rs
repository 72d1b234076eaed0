//! Browser-facing helpers kept out of pages and components.

pub mod auth;
