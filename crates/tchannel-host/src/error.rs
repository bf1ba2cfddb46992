//! Host-side error type.

use thiserror::Error;

use tchannel_core::ParseError;

/// Shared result type.
pub type Result<T> = std::result::Result<T, HostError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}
