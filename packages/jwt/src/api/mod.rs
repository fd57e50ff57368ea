//! Async builder API
//!
//! Thin wrapper that runs [`TokenCodec`](crate::TokenCodec) operations as
//! Tokio tasks:
//!
//! ```no_run
//! # async fn demo() -> sigil_jwt::JwtResult<()> {
//! use sigil_jwt::{ClaimSet, Jwt};
//!
//! let jwt = Jwt::hs256().with_secret(b"mi_clave_secreta_123");
//! let token = jwt.sign(ClaimSet::new().with_subject("Usuario123")).await?;
//! let claims = jwt.verify(token).await?;
//! assert_eq!(claims.subject(), Some("Usuario123"));
//! # Ok(())
//! # }
//! ```

pub mod async_result;
pub mod hs256_builder;

pub use async_result::AsyncJwtResult;
pub use hs256_builder::{Hs256Builder, Hs256WithSecret, Jwt};
