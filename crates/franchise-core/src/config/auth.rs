//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Development-only signing secret used when none is configured.
pub const DEV_JWT_SECRET: &str = "default_secret_key_for_development";

/// Token signing and credential policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256), shared by the whole process.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
    /// Allowed clock skew when checking expiry, in seconds.
    #[serde(default)]
    pub leeway_seconds: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Whether the built-in development secret is still in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_hours: default_refresh_ttl(),
            leeway_seconds: 0,
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    DEV_JWT_SECRET.to_string()
}

fn default_access_ttl() -> u64 {
    24 * 60
}

fn default_refresh_ttl() -> u64 {
    7 * 24
}

fn default_password_min() -> usize {
    8
}
