//! Networking modules for the auth and profile REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON schema.

pub mod api;
pub mod types;
