//! Token error types

use thiserror::Error;

/// Token operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Token error types
///
/// Verification failures (`InvalidFormat`, `InvalidSignature`,
/// `InvalidPayload`, `InvalidClaims`, `TokenExpired`) all mean the same thing
/// to [`TokenCodec::verify`](crate::TokenCodec::verify): the token is not
/// acceptable. The variants only exist so [`TokenCodec::decode`](crate::TokenCodec::decode)
/// can report why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Token does not have exactly three dot-separated segments
    #[error("Invalid token format")]
    InvalidFormat,
    /// Recomputed signature does not match the signature segment
    #[error("Invalid token signature")]
    InvalidSignature,
    /// Claims segment is not base64url encoded JSON
    #[error("Invalid token payload: {0}")]
    InvalidPayload(String),
    /// Claims decoded but are unusable (not an object, non-numeric `exp`)
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),
    /// Token has expired
    #[error("Token has expired")]
    TokenExpired,
    /// Secret key is unusable
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    /// Claims could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The process-wide codec was already installed
    #[error("Token codec already initialized")]
    AlreadyInitialized,
    /// The process-wide codec has not been installed yet
    #[error("Token codec not initialized")]
    NotInitialized,
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl JwtError {
    /// Create an invalid payload error
    #[inline]
    #[must_use]
    pub fn invalid_payload(msg: &str) -> Self {
        JwtError::InvalidPayload(msg.to_string())
    }

    /// Create an invalid claims error
    #[inline]
    #[must_use]
    pub fn invalid_claims(msg: &str) -> Self {
        JwtError::InvalidClaims(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        JwtError::Serialization(msg.to_string())
    }

    /// Create a configuration error
    #[inline]
    #[must_use]
    pub fn configuration(msg: &str) -> Self {
        JwtError::Configuration(msg.to_string())
    }

    /// Create an internal error
    #[inline]
    #[must_use]
    pub fn internal(msg: &str) -> Self {
        JwtError::Internal(msg.to_string())
    }

    /// Whether this error is a rejection of the token itself, as opposed to a
    /// configuration or setup fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            JwtError::InvalidFormat
                | JwtError::InvalidSignature
                | JwtError::InvalidPayload(_)
                | JwtError::InvalidClaims(_)
                | JwtError::TokenExpired
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_separated_from_faults() {
        assert!(JwtError::InvalidFormat.is_rejection());
        assert!(JwtError::TokenExpired.is_rejection());
        assert!(JwtError::invalid_payload("bad base64").is_rejection());
        assert!(!JwtError::invalid_key("empty").is_rejection());
        assert!(!JwtError::NotInitialized.is_rejection());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = JwtError::invalid_claims("exp must be a number");
        assert_eq!(err.to_string(), "Invalid claims: exp must be a number");
    }
}
