//! HMAC secret key material

use crate::error::{JwtError, JwtResult};
use std::fmt;
use zeroize::Zeroizing;

/// Secret used for every signature a codec produces or checks.
///
/// The bytes are wiped on drop and never printed.
#[derive(Clone)]
pub struct SecretKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SecretKey {
    /// Create a secret from raw bytes.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if `bytes` is empty
    pub fn new(bytes: impl Into<Vec<u8>>) -> JwtResult<Self> {
        let bytes = Zeroizing::new(bytes.into());
        if bytes.is_empty() {
            return Err(JwtError::invalid_key("HMAC secret must not be empty"));
        }
        Ok(Self { bytes })
    }

    /// Create a secret from the UTF-8 bytes of `text`.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if `text` is empty
    pub fn from_text(text: &str) -> JwtResult<Self> {
        Self::new(text.as_bytes())
    }

    /// Raw key bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; empty keys are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {} bytes])", self.bytes.len())
    }
}
