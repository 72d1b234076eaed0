//! Guard options and redirect targets.
//!
//! `GuardConfig` is chosen per mounted route. `RouteTargets` is app-wide and
//! can be read from the environment by native tooling; the browser client
//! uses the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_PATH: &str = "/auth";
pub const DEFAULT_HOME_PATH: &str = "/game";
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

pub const LOGIN_PATH_ENV: &str = "GATE_LOGIN_PATH";
pub const HOME_PATH_ENV: &str = "GATE_HOME_PATH";
pub const LOADING_MESSAGE_ENV: &str = "GATE_LOADING_MESSAGE";

/// Error returned when route targets are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A redirect target is not an absolute in-app path.
    #[error("{var} must be an absolute path starting with '/', got {value:?}")]
    RelativePath { var: &'static str, value: String },
    /// A redirect target carries a `#fragment`.
    #[error("{var} must not contain a '#' fragment, got {value:?}")]
    Fragment { var: &'static str, value: String },
    /// Login and home resolve to the same route, which would redirect in a loop.
    #[error("login and home paths must differ (both are {0:?})")]
    SamePath(String),
}

/// Per-route guard options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Whether the wrapped view needs a signed-in session with a profile.
    /// When false the view is anonymous-only (e.g. the sign-in page).
    pub require_auth: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::protected()
    }
}

impl GuardConfig {
    /// Options for a view that requires a session and a profile.
    #[must_use]
    pub fn protected() -> Self {
        Self { require_auth: true }
    }

    /// Options for a view only shown to anonymous visitors.
    #[must_use]
    pub fn anonymous_only() -> Self {
        Self { require_auth: false }
    }
}

/// Named redirect destinations and loading copy shared by every guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTargets {
    /// Where unauthenticated visitors are sent.
    pub login: String,
    /// Where signed-in visitors are sent from anonymous-only views.
    pub home: String,
    /// Text shown while the provider resolves.
    pub loading_message: String,
}

impl Default for RouteTargets {
    fn default() -> Self {
        Self {
            login: DEFAULT_LOGIN_PATH.to_owned(),
            home: DEFAULT_HOME_PATH.to_owned(),
            loading_message: DEFAULT_LOADING_MESSAGE.to_owned(),
        }
    }
}

impl RouteTargets {
    /// Build route targets from environment variables.
    ///
    /// Optional:
    /// - `GATE_LOGIN_PATH`: default `/auth`
    /// - `GATE_HOME_PATH`: default `/game`
    /// - `GATE_LOADING_MESSAGE`: default `Loading...`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a path is relative, carries a fragment, or
    /// equals the other target.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build route targets from an arbitrary key lookup.
    ///
    /// Blank values fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`RouteTargets::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };
        Self {
            login: read(LOGIN_PATH_ENV, DEFAULT_LOGIN_PATH),
            home: read(HOME_PATH_ENV, DEFAULT_HOME_PATH),
            loading_message: read(LOADING_MESSAGE_ENV, DEFAULT_LOADING_MESSAGE),
        }
        .validated()
    }

    /// Check that both targets are absolute, fragment-free, and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativePath`], [`ConfigError::Fragment`] or
    /// [`ConfigError::SamePath`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        check_target(LOGIN_PATH_ENV, &self.login)?;
        check_target(HOME_PATH_ENV, &self.home)?;
        if self.login == self.home {
            return Err(ConfigError::SamePath(self.login));
        }
        Ok(self)
    }
}

fn check_target(var: &'static str, value: &str) -> Result<(), ConfigError> {
    if !value.starts_with('/') || value.starts_with("//") {
        return Err(ConfigError::RelativePath { var, value: value.to_owned() });
    }
    if value.contains('#') {
        return Err(ConfigError::Fragment { var, value: value.to_owned() });
    }
    Ok(())
}
