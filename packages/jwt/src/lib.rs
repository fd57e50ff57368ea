//! Compact HS256 tokens.
//!
//! This crate issues and validates JWT-shaped tokens signed with
//! HMAC-SHA256:
//! - a fixed `{"alg":"HS256","typ":"JWT"}` header that is never trusted on input
//! - `iat` stamping and a default `exp` of one hour
//! - constant-time signature checks before any payload is decoded
//! - strict expiry (`now > exp` rejects), no leeway
//!
//! ```
//! use sigil_jwt::{ClaimSet, SecretKey, TokenCodec};
//!
//! let codec = TokenCodec::new(SecretKey::from_text("mi_clave_secreta_123")?);
//! let token = codec.generate(&ClaimSet::new().with_subject("Usuario123"))?;
//! assert!(codec.verify(&token));
//! assert!(codec.time_until_expiration(&token) > 3590);
//! # Ok::<(), sigil_jwt::JwtError>(())
//! ```

pub mod api;
pub mod claims;
pub mod codec;
pub mod config;
pub mod crypto;
pub(crate) mod encoding;
mod error;
pub mod global;
pub mod time;
mod types;

pub use api::{AsyncJwtResult, Hs256Builder, Hs256WithSecret, Jwt};
pub use claims::ClaimSet;
pub use codec::TokenCodec;
pub use config::JwtConfig;
pub use crypto::{HmacSha256Signer, SecretKey, hmac_sha256_sign};
pub use error::*;
pub use types::*;
