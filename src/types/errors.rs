//! Error types used above the boolean filesystem contract.
//!
//! The contract itself reports failure as a single bit per operation; these
//! types serve the layers that parse and validate structured inputs (fixture
//! manifests) where a caller can act on the distinction.
use thiserror::Error;

/// High-level error categories.
#[derive(Debug, Copy, Clone, Error)]
pub enum ErrorKind {
    #[error("invalid path")]
    InvalidPath,
    #[error("parse error")]
    Parse,
    #[error("io error")]
    Io,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, msg: msg.into() }
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
