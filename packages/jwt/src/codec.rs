//! HS256 token codec.
//!
//! A token is `b64url(header).b64url(claims).b64url(hmac)`, where the MAC is
//! taken over the first two encoded segments joined by a dot. Verification
//! authenticates those segments before anything in the payload is decoded,
//! and only then applies the `exp` check.

use crate::claims::ClaimSet;
use crate::config::JwtConfig;
use crate::crypto::{HmacSha256Signer, SecretKey};
use crate::encoding::{base64_url_decode, base64_url_encode};
use crate::error::{JwtError, JwtResult};
use crate::time::now_unix;
use crate::types::{DEFAULT_TTL_SECONDS, ExpirationStatus, HEADER_JSON};
use std::time::Duration;
use tracing::{debug, trace};

/// Issues and verifies HS256 tokens for one secret.
///
/// The codec holds no mutable state, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    signer: HmacSha256Signer,
    ttl_seconds: i64,
}

impl TokenCodec {
    /// Codec with the default one hour lifetime
    #[must_use]
    pub fn new(secret: SecretKey) -> Self {
        Self {
            signer: HmacSha256Signer::new(secret),
            ttl_seconds: DEFAULT_TTL_SECONDS as i64,
        }
    }

    /// Codec from configuration
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the configured secret is empty
    pub fn from_config(config: &JwtConfig) -> JwtResult<Self> {
        let codec = Self::new(config.secret_key()?);
        Ok(Self {
            ttl_seconds: config.ttl_seconds_i64(),
            ..codec
        })
    }

    /// Override the lifetime applied when claims carry no `exp`
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl_seconds = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        self
    }

    /// Lifetime applied when claims carry no `exp`
    #[inline]
    #[must_use]
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// The signer backing this codec
    #[inline]
    #[must_use]
    pub fn signer(&self) -> &HmacSha256Signer {
        &self.signer
    }

    /// Issue a token for `claims`.
    ///
    /// `iat` is always set to the current time and `exp` defaults to
    /// `iat + ttl` when absent. The caller's claim set is left untouched.
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the claims cannot be encoded
    pub fn generate(&self, claims: &ClaimSet) -> JwtResult<String> {
        self.generate_at(claims, now_unix())
    }

    /// [`TokenCodec::generate`] with an explicit issue time
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the claims cannot be encoded
    pub fn generate_at(&self, claims: &ClaimSet, now: i64) -> JwtResult<String> {
        self.issue_at(claims, now).map(|(token, _)| token)
    }

    /// Issue a token and return it with the stamped claims it carries
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the claims cannot be encoded
    pub fn issue(&self, claims: &ClaimSet) -> JwtResult<(String, ClaimSet)> {
        self.issue_at(claims, now_unix())
    }

    /// [`TokenCodec::issue`] with an explicit issue time
    ///
    /// # Errors
    /// Returns `JwtError::Serialization` if the claims cannot be encoded
    pub fn issue_at(&self, claims: &ClaimSet, now: i64) -> JwtResult<(String, ClaimSet)> {
        let stamped = claims.stamped(now, self.ttl_seconds);

        let claims_json = serde_json::to_string(stamped.as_map())
            .map_err(|e| JwtError::Serialization(format!("Failed to serialize claims: {e}")))?;

        let header_b64 = base64_url_encode(HEADER_JSON.as_bytes());
        let claims_b64 = base64_url_encode(claims_json.as_bytes());
        let signing_input = format!("{header_b64}.{claims_b64}");
        let signature_b64 = self.signer.sign_encoded(&signing_input)?;

        trace!(iat = now, claims = stamped.len(), "Issued token");
        Ok((format!("{signing_input}.{signature_b64}"), stamped))
    }

    /// Whether `token` is authentic and unexpired.
    ///
    /// Every failure (segment count, signature, unreadable payload, expiry)
    /// yields `false`.
    #[must_use]
    pub fn verify(&self, token: &str) -> bool {
        self.verify_at(token, now_unix())
    }

    /// [`TokenCodec::verify`] against an explicit current time
    #[must_use]
    pub fn verify_at(&self, token: &str, now: i64) -> bool {
        self.decode_at(token, now).is_ok()
    }

    /// Verify `token` and return its claims.
    ///
    /// # Errors
    /// `InvalidFormat` unless there are exactly three segments,
    /// `InvalidSignature` on a MAC mismatch, `InvalidPayload` /
    /// `InvalidClaims` when the authenticated payload is unusable, and
    /// `TokenExpired` once `now > exp`
    pub fn decode(&self, token: &str) -> JwtResult<ClaimSet> {
        self.decode_at(token, now_unix())
    }

    /// [`TokenCodec::decode`] against an explicit current time
    ///
    /// # Errors
    /// See [`TokenCodec::decode`]
    pub fn decode_at(&self, token: &str, now: i64) -> JwtResult<ClaimSet> {
        let claims = self.authenticate(token)?;

        if let Some(exp) = claims.expiration().inspect_err(|e| {
            debug!(error = %e, "Rejected token: unusable exp claim");
        })? {
            if now > exp {
                debug!(exp, now, "Rejected token: expired");
                return Err(JwtError::TokenExpired);
            }
        }

        Ok(claims)
    }

    /// Seconds until `token` expires; `0` when the token is invalid or has no
    /// `exp`. Use [`TokenCodec::expiration_status`] to tell those apart.
    #[must_use]
    pub fn time_until_expiration(&self, token: &str) -> i64 {
        self.expiration_status(token).as_seconds()
    }

    /// [`TokenCodec::time_until_expiration`] against an explicit current time
    #[must_use]
    pub fn time_until_expiration_at(&self, token: &str, now: i64) -> i64 {
        self.expiration_status_at(token, now).as_seconds()
    }

    /// Remaining lifetime of an authentic token. Expiry itself is not
    /// enforced here: a lapsed token reports a negative count.
    #[must_use]
    pub fn expiration_status(&self, token: &str) -> ExpirationStatus {
        self.expiration_status_at(token, now_unix())
    }

    /// [`TokenCodec::expiration_status`] against an explicit current time
    #[must_use]
    pub fn expiration_status_at(&self, token: &str, now: i64) -> ExpirationStatus {
        let Ok(claims) = self.authenticate(token) else {
            return ExpirationStatus::Invalid;
        };
        match claims.expiration() {
            Ok(Some(exp)) => ExpirationStatus::SecondsRemaining(exp.saturating_sub(now)),
            Ok(None) => ExpirationStatus::NoExpiration,
            Err(_) => ExpirationStatus::Invalid,
        }
    }

    /// Structure and signature checks, then payload decoding. No time checks.
    fn authenticate(&self, token: &str) -> JwtResult<ClaimSet> {
        let segments: Vec<&str> = token.split('.').collect();
        let &[header_b64, claims_b64, signature_b64] = segments.as_slice() else {
            debug!(segments = segments.len(), "Rejected token: wrong segment count");
            return Err(JwtError::InvalidFormat);
        };

        let signing_input = format!("{header_b64}.{claims_b64}");
        if !self.signer.verify_encoded(&signing_input, signature_b64)? {
            debug!("Rejected token: signature mismatch");
            return Err(JwtError::InvalidSignature);
        }

        let claims_json = base64_url_decode(claims_b64).map_err(|e| {
            debug!(error = %e, "Rejected token: claims segment is not base64url");
            JwtError::InvalidPayload(format!("claims segment is not base64url: {e}"))
        })?;

        ClaimSet::from_slice(&claims_json).inspect_err(|e| {
            debug!(error = %e, "Rejected token: unreadable claims");
        })
    }
}
