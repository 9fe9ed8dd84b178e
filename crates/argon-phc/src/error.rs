//! Error types for argon-phc.
//!
//! All errors are strongly typed and propagated without panicking.
//! Password and derived key bytes are never included in error messages.

use crate::record::DecodeError;

/// Errors produced by hashing, verification and record inspection.
#[derive(Debug, thiserror::Error)]
pub enum PhcError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid hash parameters: {0}")]
    InvalidParameters(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(#[from] DecodeError),

    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Random source failed: {0}")]
    EntropySource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, PhcError>;
