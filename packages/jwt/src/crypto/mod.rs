//! Signing primitives

pub mod hmac_key;
pub mod hmac_sha256;

pub use hmac_key::SecretKey;
pub use hmac_sha256::{HmacSha256Signer, SIGNATURE_LEN, hmac_sha256_sign};
