//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Idle timeout in minutes for plain sessions. Renewed on every
    /// authenticated request (rolling expiry).
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_minutes: u64,
    /// Absolute lifetime in hours for remember-me sessions.
    #[serde(default = "default_remember_ttl")]
    pub remember_me_ttl_hours: u64,
    /// Whether the cookie is marked `Secure` (HTTPS only).
    #[serde(default)]
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_ttl_minutes: default_idle_ttl(),
            remember_me_ttl_hours: default_remember_ttl(),
            secure_cookie: false,
        }
    }
}

fn default_cookie_name() -> String {
    "ghiaccio_sid".to_string()
}

fn default_idle_ttl() -> u64 {
    60
}

fn default_remember_ttl() -> u64 {
    168
}
