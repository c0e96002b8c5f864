//! Shared error type across mediaguard crates.

use thiserror::Error;

/// Failure raised by a decision while evaluating a path.
///
/// Kept as a boxed trait object so the registry can hand it back to the
/// caller unchanged; callers downcast to recover the concrete type.
pub type DecisionError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Credentials were presented but rejected.
    AuthFailed,
    /// Resource missing or restricted. The two are deliberately the same code.
    NotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MediaGuardError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum MediaGuardError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("auth failed")]
    AuthFailed,
    #[error("not found")]
    NotFound,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
    #[error("policy evaluation failed for {path}: {source}")]
    Policy {
        path: String,
        #[source]
        source: DecisionError,
    },
}

impl MediaGuardError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            MediaGuardError::BadRequest(_) => ClientCode::BadRequest,
            MediaGuardError::AuthFailed => ClientCode::AuthFailed,
            MediaGuardError::NotFound => ClientCode::NotFound,
            MediaGuardError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            MediaGuardError::Internal(_) => ClientCode::Internal,
            MediaGuardError::Policy { .. } => ClientCode::Internal,
        }
    }

    /// Wrap a decision failure with the path it was raised for.
    pub fn policy(path: impl Into<String>, source: DecisionError) -> Self {
        MediaGuardError::Policy {
            path: path.into(),
            source,
        }
    }
}
