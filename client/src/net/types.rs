//! Wire DTOs for the auth and profile endpoints.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON payloads. Numeric fields tolerate floats
//! because some backends serialize every number as `f64`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Signed-in identity returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Authentication method used to create the session (e.g. `"github"`, `"email"`).
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
}

fn default_auth_method() -> String {
    "session".to_owned()
}

/// Player profile returned by `/api/users/{id}/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Same identifier as the owning [`User`].
    pub id: String,
    /// In-game name shown to other players.
    pub display_name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Completed games.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub games_played: i64,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Number(number) = value else {
        return Err(D::Error::custom(format!("expected integer, got {value}")));
    };
    if let Some(int) = number.as_i64() {
        return Ok(int);
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if let Some(float) = number.as_f64()
        && float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        return Ok(float as i64);
    }
    Err(D::Error::custom("expected integer-compatible number"))
}
