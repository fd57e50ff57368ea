//! Process-wide codec, set once at startup and read-only afterwards.

use crate::codec::TokenCodec;
use crate::config::JwtConfig;
use crate::error::{JwtError, JwtResult};
use once_cell::sync::OnceCell;
use tracing::{info, warn};

static CODEC: OnceCell<TokenCodec> = OnceCell::new();

/// Install the process-wide codec built from `config`.
///
/// # Errors
/// Returns `JwtError::InvalidKey` for an empty secret and
/// `JwtError::AlreadyInitialized` if a codec is already installed
pub fn install(config: &JwtConfig) -> JwtResult<&'static TokenCodec> {
    install_codec(TokenCodec::from_config(config)?)
}

/// Install an already built codec as the process-wide codec.
///
/// # Errors
/// Returns `JwtError::AlreadyInitialized` if a codec is already installed
pub fn install_codec(codec: TokenCodec) -> JwtResult<&'static TokenCodec> {
    CODEC.set(codec).map_err(|_| {
        warn!("Token codec already initialized; keeping the existing one");
        JwtError::AlreadyInitialized
    })?;
    info!(ttl_seconds = ?CODEC.get().map(TokenCodec::ttl_seconds), "Token codec initialized");
    CODEC.get().ok_or(JwtError::NotInitialized)
}

/// The installed codec.
///
/// # Errors
/// Returns `JwtError::NotInitialized` before [`install`] succeeds
pub fn codec() -> JwtResult<&'static TokenCodec> {
    CODEC.get().ok_or(JwtError::NotInitialized)
}

/// The installed codec, initializing it from the environment on first use.
///
/// Concurrent first callers block until one initialization finishes; a failed
/// initialization leaves the cell empty so a later call can retry.
///
/// # Errors
/// Returns the configuration error from [`JwtConfig::from_env`] when nothing
/// is installed yet and the environment is incomplete
pub fn codec_or_init_from_env() -> JwtResult<&'static TokenCodec> {
    CODEC.get_or_try_init(|| TokenCodec::from_config(&JwtConfig::from_env()?))
}
