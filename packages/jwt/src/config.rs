//! Codec configuration: the signing secret and default token lifetime.

use crate::crypto::SecretKey;
use crate::error::{JwtError, JwtResult};
use crate::types::DEFAULT_TTL_SECONDS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::warn;

/// Environment variable holding the signing secret
pub const SECRET_ENV: &str = "SIGIL_JWT_SECRET";
/// Environment variable holding the default lifetime in seconds
pub const TTL_ENV: &str = "SIGIL_JWT_TTL_SECONDS";

/// Configuration for a [`TokenCodec`](crate::TokenCodec).
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC secret, used as UTF-8 bytes
    pub secret: String,
    /// Lifetime applied when the caller supplies no `exp`
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

fn default_ttl_seconds() -> u64 {
    DEFAULT_TTL_SECONDS
}

impl JwtConfig {
    /// Configuration with the default lifetime
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds: default_ttl_seconds(),
        }
    }

    /// Override the default lifetime
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_seconds = ttl.as_secs();
        self
    }

    /// Load from `SIGIL_JWT_SECRET` and `SIGIL_JWT_TTL_SECONDS`.
    ///
    /// # Errors
    /// Returns `JwtError::Configuration` if the secret is missing or empty, or
    /// the lifetime is not a whole number of seconds
    pub fn from_env() -> JwtResult<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` in place of the process environment.
    ///
    /// # Errors
    /// Same as [`JwtConfig::from_env`]
    pub fn from_vars<F>(lookup: F) -> JwtResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(SECRET_ENV).unwrap_or_default();
        if secret.is_empty() {
            warn!(var = SECRET_ENV, "Signing secret is not configured");
            return Err(JwtError::Configuration(format!("{SECRET_ENV} is not set")));
        }

        let ttl_seconds = match lookup(TTL_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                warn!(var = TTL_ENV, error = %e, "Invalid token lifetime");
                JwtError::Configuration(format!("{TTL_ENV} must be whole seconds: {e}"))
            })?,
            None => default_ttl_seconds(),
        };

        Ok(Self {
            secret,
            ttl_seconds,
        })
    }

    /// Parse from a JSON document
    ///
    /// # Errors
    /// Returns `JwtError::Configuration` for malformed JSON or a missing secret
    pub fn from_json(json: &str) -> JwtResult<Self> {
        serde_json::from_str(json).map_err(|e| JwtError::Configuration(e.to_string()))
    }

    /// The secret as key material
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the secret is empty
    pub fn secret_key(&self) -> JwtResult<SecretKey> {
        SecretKey::from_text(&self.secret)
    }

    /// Default lifetime in seconds, clamped to `i64`
    #[must_use]
    pub fn ttl_seconds_i64(&self) -> i64 {
        i64::try_from(self.ttl_seconds).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}
