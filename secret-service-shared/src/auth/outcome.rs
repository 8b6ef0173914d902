use crate::models::{Destination, Session};
use std::fmt;

/// How a session came to be established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    /// An existing account signed in.
    SignIn,
    /// The email was unknown, so an account was created on the spot.
    Registration,
}

/// Result of one login attempt.
#[derive(Debug)]
pub enum AuthOutcome {
    /// The session flag is set; the caller should navigate to `redirect`.
    Authenticated {
        session: Session,
        method: AuthMethod,
        redirect: Destination,
    },
    /// Nothing changed; the caller should show `notice` to the user.
    Rejected(AuthNotice),
}

impl AuthOutcome {
    /// Navigation target, if this outcome calls for one.
    #[must_use]
    pub fn redirect(&self) -> Option<Destination> {
        match self {
            Self::Authenticated { redirect, .. } => Some(*redirect),
            Self::Rejected(_) => None,
        }
    }

    /// The notice to surface, if the attempt was rejected.
    #[must_use]
    pub fn notice(&self) -> Option<&AuthNotice> {
        match self {
            Self::Authenticated { .. } => None,
            Self::Rejected(notice) => Some(notice),
        }
    }
}

/// Which step of the attempt produced a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    LoginFailed,
    RegistrationFailed,
    AttemptInProgress,
}

/// User-facing description of a rejected attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthNotice {
    pub kind: NoticeKind,
    /// Raw provider message; empty for [`NoticeKind::AttemptInProgress`].
    pub message: String,
}

impl AuthNotice {
    pub fn login_failed(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::LoginFailed,
            message: message.into(),
        }
    }

    pub fn registration_failed(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::RegistrationFailed,
            message: message.into(),
        }
    }

    pub fn attempt_in_progress() -> Self {
        Self {
            kind: NoticeKind::AttemptInProgress,
            message: String::new(),
        }
    }
}

impl fmt::Display for AuthNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::LoginFailed => write!(f, "Login failed: {}", self.message),
            NoticeKind::RegistrationFailed => write!(f, "Registration failed: {}", self.message),
            NoticeKind::AttemptInProgress => {
                f.write_str("A sign-in attempt is already in progress.")
            }
        }
    }
}
