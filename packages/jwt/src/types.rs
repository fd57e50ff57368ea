//! Token type definitions

/// Fixed token header. It is written on every token and never parsed back;
/// verification only uses the encoded segment as signing input.
pub const HEADER_JSON: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Default token lifetime when the caller supplies no `exp`
pub const DEFAULT_TTL_SECONDS: u64 = 3600;

/// Outcome of inspecting a token's remaining lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpirationStatus {
    /// Wrong segment count, bad signature or unreadable claims
    Invalid,
    /// Authentic token without an `exp` claim
    NoExpiration,
    /// Authentic token; `exp - now`, negative once expired
    SecondsRemaining(i64),
}

impl ExpirationStatus {
    /// Collapse to a plain second count: `0` for both `Invalid` and
    /// `NoExpiration`.
    #[inline]
    #[must_use]
    pub fn as_seconds(self) -> i64 {
        match self {
            ExpirationStatus::SecondsRemaining(seconds) => seconds,
            ExpirationStatus::Invalid | ExpirationStatus::NoExpiration => 0,
        }
    }

    /// Whether the token was authentic
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        !matches!(self, ExpirationStatus::Invalid)
    }

    /// Whether the token carries an `exp` that has already passed
    #[inline]
    #[must_use]
    pub fn is_expired(self) -> bool {
        matches!(self, ExpirationStatus::SecondsRemaining(seconds) if seconds < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_literal() {
        let header: serde_json::Value =
            serde_json::from_str(HEADER_JSON).expect("header is valid JSON");
        assert_eq!(header["alg"], "HS256");
        assert_eq!(header["typ"], "JWT");
    }

    #[test]
    fn test_legacy_seconds() {
        assert_eq!(ExpirationStatus::Invalid.as_seconds(), 0);
        assert_eq!(ExpirationStatus::NoExpiration.as_seconds(), 0);
        assert_eq!(ExpirationStatus::SecondsRemaining(-12).as_seconds(), -12);
    }

    #[test]
    fn test_expired_means_strictly_past() {
        assert!(!ExpirationStatus::SecondsRemaining(0).is_expired());
        assert!(ExpirationStatus::SecondsRemaining(-1).is_expired());
        assert!(!ExpirationStatus::Invalid.is_expired());
        assert!(!ExpirationStatus::Invalid.is_valid());
        assert!(ExpirationStatus::NoExpiration.is_valid());
    }
}
