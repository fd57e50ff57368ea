//! Claim set carried in the token payload.
//!
//! A [`ClaimSet`] is an insertion-ordered mapping from claim name to a JSON
//! value. Values are the tagged union `serde_json::Value` (string, integer,
//! float, boolean, mapping, sequence, null), so arbitrary caller claims pass
//! through unchanged. Two names are reserved: `iat` and `exp`, both whole
//! Unix seconds.

use crate::error::{JwtError, JwtResult};
use crate::time::{now_unix, numeric_date};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;
use std::time::Duration;

/// Issued-at claim name
pub const ISSUED_AT: &str = "iat";
/// Expiration claim name
pub const EXPIRATION: &str = "exp";
/// Subject claim name
pub const SUBJECT: &str = "sub";

/// Ordered token claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: Map<String, Value>,
}

impl ClaimSet {
    /// Create an empty claim set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { claims: Map::new() }
    }

    /// Insert a claim, replacing any previous value under the same name.
    /// Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.claims.insert(name.into(), value.into())
    }

    /// Builder form of [`ClaimSet::insert`]
    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set the subject (`sub`) claim
    #[must_use]
    pub fn with_subject(self, subject: impl Into<String>) -> Self {
        self.with_claim(SUBJECT, subject.into())
    }

    /// Set an absolute expiration (`exp`) in Unix seconds
    #[must_use]
    pub fn with_expiration(self, exp: i64) -> Self {
        self.with_claim(EXPIRATION, exp)
    }

    /// Set the expiration relative to now
    #[must_use]
    pub fn expires_in(self, lifetime: Duration) -> Self {
        let seconds = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);
        self.with_expiration(now_unix().saturating_add(seconds))
    }

    /// Get a claim by name
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Whether a claim is present
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.claims.contains_key(name)
    }

    /// Remove a claim, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.claims.shift_remove(name)
    }

    /// Number of claims
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether there are no claims
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.claims.iter()
    }

    /// Borrow the underlying JSON object
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Take the underlying JSON object
    #[inline]
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.claims
    }

    /// Subject claim, if present and a string
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.get_str(SUBJECT)
    }

    /// String claim by name
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.claims.get(name).and_then(Value::as_str)
    }

    /// Integer claim by name
    #[must_use]
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.claims.get(name).and_then(Value::as_i64)
    }

    /// Boolean claim by name
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.claims.get(name).and_then(Value::as_bool)
    }

    /// Issued-at time in whole seconds.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidClaims` if `iat` is present but not a number
    pub fn issued_at(&self) -> JwtResult<Option<i64>> {
        self.numeric_claim(ISSUED_AT)
    }

    /// Expiration time in whole seconds.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidClaims` if `exp` is present but not a number
    pub fn expiration(&self) -> JwtResult<Option<i64>> {
        self.numeric_claim(EXPIRATION)
    }

    fn numeric_claim(&self, name: &str) -> JwtResult<Option<i64>> {
        self.claims
            .get(name)
            .map(|value| numeric_date(name, value))
            .transpose()
    }

    /// Copy of this claim set with `iat` set to `now` and, when absent,
    /// `exp` defaulted to `now + ttl_seconds`.
    pub(crate) fn stamped(&self, now: i64, ttl_seconds: i64) -> Self {
        let mut stamped = self.clone();
        stamped.insert(ISSUED_AT, now);
        if !stamped.contains(EXPIRATION) {
            stamped.insert(EXPIRATION, now.saturating_add(ttl_seconds));
        }
        stamped
    }

    /// Parse a claim set from JSON bytes. The document must be an object.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidPayload` for malformed JSON and
    /// `JwtError::InvalidClaims` for a JSON value that is not an object
    pub fn from_slice(json: &[u8]) -> JwtResult<Self> {
        let value: Value = serde_json::from_slice(json)
            .map_err(|e| JwtError::InvalidPayload(format!("claims are not valid JSON: {e}")))?;
        Self::try_from(value)
    }
}

impl TryFrom<Value> for ClaimSet {
    type Error = JwtError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(claims) => Ok(Self { claims }),
            _ => Err(JwtError::invalid_claims("claims must be a JSON object")),
        }
    }
}

impl From<Map<String, Value>> for ClaimSet {
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}

impl From<ClaimSet> for Value {
    fn from(claims: ClaimSet) -> Self {
        Value::Object(claims.claims)
    }
}

impl FromStr for ClaimSet {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut claims = Self::new();
        for (name, value) in iter {
            claims.insert(name, value);
        }
        claims
    }
}

impl<'a> IntoIterator for &'a ClaimSet {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.claims.iter()
    }
}
