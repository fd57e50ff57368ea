//! HS256 builder: async front end over [`TokenCodec`]

use super::async_result::AsyncJwtResult;
use crate::{
    claims::ClaimSet,
    codec::TokenCodec,
    config::JwtConfig,
    crypto::SecretKey,
    error::JwtResult,
    types::ExpirationStatus,
};
use std::{sync::Arc, time::Duration};
use tokio::sync::oneshot;
use tracing::{debug, warn};

/// Entry point for the builder API
pub struct Jwt;

impl Jwt {
    /// HS256 token operations
    #[must_use]
    pub fn hs256() -> Hs256Builder {
        Hs256Builder::new()
    }
}

/// HS256 builder - initial state
#[derive(Debug, Default)]
pub struct Hs256Builder;

impl Hs256Builder {
    /// Create a builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Use `secret` as the HMAC key. An empty secret surfaces as
    /// `JwtError::InvalidKey` from the first operation.
    #[must_use]
    pub fn with_secret(self, secret: &[u8]) -> Hs256WithSecret {
        Hs256WithSecret {
            codec: SecretKey::new(secret).map(|key| Arc::new(TokenCodec::new(key))),
        }
    }

    /// Use a loaded configuration
    #[must_use]
    pub fn with_config(self, config: &JwtConfig) -> Hs256WithSecret {
        Hs256WithSecret {
            codec: TokenCodec::from_config(config).map(Arc::new),
        }
    }

    /// Use an existing codec
    #[must_use]
    pub fn with_codec(self, codec: TokenCodec) -> Hs256WithSecret {
        Hs256WithSecret {
            codec: Ok(Arc::new(codec)),
        }
    }
}

/// HS256 builder with a key configured.
///
/// Operations run on the Tokio runtime and must be called from within one.
#[derive(Debug, Clone)]
pub struct Hs256WithSecret {
    codec: JwtResult<Arc<TokenCodec>>,
}

impl Hs256WithSecret {
    /// Lifetime applied to claims without `exp`
    #[must_use]
    pub fn with_expiry(self, duration: Duration) -> Self {
        Self {
            codec: self
                .codec
                .map(|codec| Arc::new(TokenCodec::clone(&codec).with_ttl(duration))),
        }
    }

    /// Sign `claims`
    pub fn sign(&self, claims: ClaimSet) -> AsyncJwtResult<String> {
        self.spawn(move |codec| {
            codec.generate(&claims).inspect_err(|e| {
                warn!(operation = "jwt_signing", algorithm = "HS256", error = %e, "Token signing failed");
            })
        })
    }

    /// Verify `token` and return its claims
    pub fn verify(&self, token: impl Into<String>) -> AsyncJwtResult<ClaimSet> {
        let token = token.into();
        self.spawn(move |codec| {
            codec.decode(&token).inspect_err(|e| {
                debug!(operation = "jwt_verification", algorithm = "HS256", error = %e, "Token rejected");
            })
        })
    }

    /// Remaining lifetime of `token`
    pub fn expiration_status(&self, token: impl Into<String>) -> AsyncJwtResult<ExpirationStatus> {
        let token = token.into();
        self.spawn(move |codec| Ok(codec.expiration_status(&token)))
    }

    fn spawn<T, F>(&self, op: F) -> AsyncJwtResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&TokenCodec) -> JwtResult<T> + Send + 'static,
    {
        let codec = match &self.codec {
            Ok(codec) => Arc::clone(codec),
            Err(e) => {
                warn!(algorithm = "HS256", error = %e, "Token builder has no usable key");
                return AsyncJwtResult::ready(Err(e.clone()));
            }
        };

        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = tx.send(op(&codec));
        });
        AsyncJwtResult::new(rx)
    }
}
