//! Route access guard shared by the game client and developer tooling.
//!
//! This crate owns the decision a gated route makes every time the auth
//! provider's state changes: show a loading placeholder, redirect to sign-in,
//! redirect away from an anonymous-only view, or render the wrapped content.
//! It performs no I/O; rendering and navigation belong to the caller.
//!
//! ARCHITECTURE
//! ============
//! - `state`: the provider-owned auth snapshot.
//! - `config`: per-route guard options and the named redirect targets.
//! - `decision`: the pure `RouteGuard::evaluate` decision table.
//! - `provider`: push-based auth state owner with disposable subscriptions.
//! - `mount`: a guard bound to a provider and a navigator for one mount.

pub mod config;
pub mod decision;
pub mod mount;
pub mod provider;
pub mod state;

pub use config::{ConfigError, GuardConfig, RouteTargets};
pub use decision::{NavigationIntent, RenderDecision, RouteGuard};
pub use mount::{GuardMount, Navigator};
pub use provider::{AuthProvider, Subscription};
pub use state::AuthState;
