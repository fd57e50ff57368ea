//! HMAC-SHA256 operations for token signing and verification

use super::hmac_key::SecretKey;
use crate::encoding::base64_url_encode;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 output length in bytes
pub const SIGNATURE_LEN: usize = 32;

/// HMAC-SHA256 over the UTF-8 bytes of `message`, keyed with `secret`.
///
/// # Errors
/// Returns `JwtError::InvalidKey` for an empty secret
pub fn hmac_sha256_sign(message: &str, secret: &[u8]) -> JwtResult<[u8; SIGNATURE_LEN]> {
    if secret.is_empty() {
        return Err(JwtError::invalid_key("HMAC secret must not be empty"));
    }
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(message.as_bytes());

    let mut signature = [0u8; SIGNATURE_LEN];
    signature.copy_from_slice(&mac.finalize().into_bytes());
    Ok(signature)
}

/// Stateless HS256 signer bound to one secret.
#[derive(Debug, Clone)]
pub struct HmacSha256Signer {
    secret: SecretKey,
}

impl HmacSha256Signer {
    /// Header `alg` value
    pub const ALGORITHM: &'static str = "HS256";

    /// Create a signer for `secret`
    #[must_use]
    pub fn new(secret: SecretKey) -> Self {
        Self { secret }
    }

    /// Raw signature over `message`
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the HMAC primitive rejects the key
    pub fn sign(&self, message: &str) -> JwtResult<[u8; SIGNATURE_LEN]> {
        hmac_sha256_sign(message, self.secret.as_bytes())
    }

    /// Signature over `message` as an unpadded base64url segment
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the HMAC primitive rejects the key
    pub fn sign_encoded(&self, message: &str) -> JwtResult<String> {
        self.sign(message).map(|signature| base64_url_encode(&signature))
    }

    /// Check an encoded signature segment against `message`.
    ///
    /// The comparison runs in constant time over the encoded text, so the
    /// segment has to match byte-for-byte.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the HMAC primitive rejects the key
    pub fn verify_encoded(&self, message: &str, encoded_signature: &str) -> JwtResult<bool> {
        let expected = self.sign_encoded(message)?;
        Ok(expected.as_bytes().ct_eq(encoded_signature.as_bytes()).into())
    }
}
