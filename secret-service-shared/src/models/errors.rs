//! # Error Types
//!
//! Failures crossing the identity provider and session storage boundaries.

use thiserror::Error;

/// Result type alias for identity provider operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Failure reported by the identity provider.
///
/// Only two kinds are distinguished: an unknown account, which the gate turns
/// into a registration attempt, and everything else. Both display as the raw
/// provider message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No account exists for the submitted email
    #[error("{message}")]
    UserNotFound { message: String },

    /// Any other rejection: bad password, malformed email, network failure
    #[error("{message}")]
    Other { message: String },
}

impl AuthError {
    /// Create a new user-not-found error
    pub fn user_not_found<T: Into<String>>(message: T) -> Self {
        Self::UserNotFound {
            message: message.into(),
        }
    }

    /// Create a new error for any other provider rejection
    pub fn other<T: Into<String>>(message: T) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether this failure should fall through to registration.
    #[must_use]
    pub const fn is_user_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound { .. })
    }

    /// The human-readable provider message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::UserNotFound { message } | Self::Other { message } => message,
        }
    }
}

/// Failure reading or writing the persisted session flag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Browser storage is disabled or not reachable from this context
    #[error("session storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// The storage backend rejected the write (quota, privacy mode)
    #[error("session storage write failed: {reason}")]
    WriteFailed { reason: String },
}
