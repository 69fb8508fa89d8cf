//! Shared error type across gha-scaleset crates.

use thiserror::Error;

/// Machine-readable error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or out-of-range configuration.
    InvalidConfig,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// A metric name is already present in the target registry.
    AlreadyRegistered,
    /// Anything else (I/O, bind failures, metrics library errors).
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and process exit messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::AlreadyRegistered => "ALREADY_REGISTERED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ScaleSetError>;

/// Unified error type used by core and metrics.
#[derive(Debug, Error)]
pub enum ScaleSetError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("metric already registered: {0}")]
    AlreadyRegistered(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ScaleSetError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ScaleSetError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            ScaleSetError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            ScaleSetError::AlreadyRegistered(_) => ErrorCode::AlreadyRegistered,
            ScaleSetError::Internal(_) => ErrorCode::Internal,
        }
    }
}
