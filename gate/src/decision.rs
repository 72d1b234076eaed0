//! Route guard decision table.
//!
//! DESIGN
//! ======
//! The guard is a pure function of `(auth state, guard config, location)`.
//! Checks run in a fixed order and the first match wins:
//!
//! 1. provider still loading -> show the loading placeholder
//! 2. protected view, session or profile missing -> redirect to login
//! 3. anonymous-only view, session and profile present -> redirect home
//! 4. otherwise -> render the wrapped view
//!
//! Loading outranks everything so an in-flight check is never cut short by
//! a stale anonymous read.

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use serde::{Deserialize, Serialize};

use crate::config::{GuardConfig, RouteTargets};
use crate::state::AuthState;

/// Query parameter carrying the redirect-return location.
pub const FROM_PARAM: &str = "from";

/// Instruction to send the visitor to another route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationIntent {
    /// Destination path.
    pub to: String,
    /// Location the visitor was turned away from, for returning after sign-in.
    pub from: Option<String>,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigationIntent {
    /// Destination with the return location added as a `from` query
    /// parameter, ahead of any `#fragment`.
    #[must_use]
    pub fn href(&self) -> String {
        let Some(from) = &self.from else {
            return self.to.clone();
        };
        let (base, fragment) = match self.to.split_once('#') {
            Some((base, fragment)) => (base, Some(fragment)),
            None => (self.to.as_str(), None),
        };
        let sep = if base.contains('?') { '&' } else { '?' };
        let mut href = format!("{base}{sep}{FROM_PARAM}={}", urlencoding::encode(from));
        if let Some(fragment) = fragment {
            href.push('#');
            href.push_str(fragment);
        }
        href
    }
}

/// What a guarded route should do for the current auth snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderDecision {
    /// Auth check still in flight; show a placeholder.
    ShowLoading { message: String },
    /// Protected view without a full session.
    RedirectToLogin(NavigationIntent),
    /// Anonymous-only view with a full session.
    RedirectToHome(NavigationIntent),
    /// Render the wrapped view.
    RenderChildren,
}

impl RenderDecision {
    /// The navigation this decision asks for, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<&NavigationIntent> {
        match self {
            Self::RedirectToLogin(intent) | Self::RedirectToHome(intent) => Some(intent),
            Self::ShowLoading { .. } | Self::RenderChildren => None,
        }
    }

    /// Short label used in logs and CLI output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShowLoading { .. } => "loading",
            Self::RedirectToLogin(_) => "redirect-login",
            Self::RedirectToHome(_) => "redirect-home",
            Self::RenderChildren => "render",
        }
    }
}

/// Evaluates auth snapshots against a fixed set of redirect targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGuard {
    targets: RouteTargets,
}

impl RouteGuard {
    #[must_use]
    pub fn new(targets: RouteTargets) -> Self {
        Self { targets }
    }

    #[must_use]
    pub fn targets(&self) -> &RouteTargets {
        &self.targets
    }

    /// Decide what the route mounted at `location` should do.
    ///
    /// `location` is the path (plus query) where the guard is mounted and is
    /// attached to login redirects as the return location.
    #[must_use]
    pub fn evaluate<U, P>(&self, state: &AuthState<U, P>, config: GuardConfig, location: &str) -> RenderDecision {
        if state.loading {
            return RenderDecision::ShowLoading { message: self.targets.loading_message.clone() };
        }

        let authenticated = state.is_authenticated();
        if config.require_auth && !authenticated {
            return RenderDecision::RedirectToLogin(NavigationIntent {
                to: self.targets.login.clone(),
                from: Some(location.to_owned()),
                replace: true,
            });
        }
        if !config.require_auth && authenticated {
            return RenderDecision::RedirectToHome(NavigationIntent {
                to: self.targets.home.clone(),
                from: None,
                replace: true,
            });
        }

        RenderDecision::RenderChildren
    }

    /// Resolve a `from` value handed back to the login page into a safe
    /// in-app destination.
    ///
    /// Only absolute same-origin paths are accepted; anything else (absent,
    /// protocol-relative, scheme-qualified, or pointing back at login) falls
    /// back to home. Control characters are rejected outright: browsers drop
    /// tab, CR and LF while parsing a URL, so `/\t/host` would become `//host`.
    #[must_use]
    pub fn return_path(&self, from: Option<&str>) -> String {
        let Some(raw) = from.map(str::trim) else {
            return self.targets.home.clone();
        };
        let same_origin = raw.starts_with('/')
            && !raw.starts_with("//")
            && !raw.contains('\\')
            && !raw.chars().any(char::is_control);
        let path_only = raw.split(['?', '#']).next().unwrap_or_default();
        if !same_origin || path_only == self.targets.login {
            return self.targets.home.clone();
        }
        raw.to_owned()
    }
}
