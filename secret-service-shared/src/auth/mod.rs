//! # Authentication
//!
//! The identity provider contract, the persisted session flag, and the gate
//! that orchestrates sign-in with its registration fallback.

mod gate;
mod outcome;

pub use gate::AuthGate;
pub use outcome::{AuthMethod, AuthNotice, AuthOutcome, NoticeKind};

use crate::models::{AuthResult, Credentials, Session, StoreError};
use async_trait::async_trait;
#[cfg(test)]
use std::cell::Cell;

/// External identity service.
///
/// Futures are not required to be `Send`; in the browser every call runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Authenticate an existing account.
    ///
    /// # Errors
    /// [`crate::models::AuthError::UserNotFound`] when no account exists for
    /// the email, [`crate::models::AuthError::Other`] for any other rejection.
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session>;

    /// Create an account and authenticate it.
    ///
    /// # Errors
    /// Returns an error if the provider rejects the registration.
    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<Session>;

    /// End the current provider session.
    ///
    /// # Errors
    /// Returns an error if the provider could not be reached.
    async fn sign_out(&self) -> AuthResult<()>;
}

/// Persisted "logged in" flag.
///
/// The flag is a local proxy for "a session was established in this browser
/// at some point". It is never re-validated against the provider.
pub trait SessionStore {
    /// Whether the flag is currently set.
    fn is_logged_in(&self) -> bool;

    /// Set the flag.
    ///
    /// # Errors
    /// Returns an error if the backing storage rejected the write.
    fn mark_logged_in(&self) -> Result<(), StoreError>;

    /// Remove the flag. Clearing an absent flag is a no-op.
    ///
    /// # Errors
    /// Returns an error if the backing storage rejected the removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Session flag kept in memory only, for exercising the gate natively.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    logged_in: Cell<bool>,
}

#[cfg(test)]
impl MemorySessionStore {
    /// Start with the flag absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the flag already set, as after a reload of a signed-in tab.
    pub fn logged_in() -> Self {
        Self {
            logged_in: Cell::new(true),
        }
    }
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }

    fn mark_logged_in(&self) -> Result<(), StoreError> {
        self.logged_in.set(true);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.logged_in.set(false);
        Ok(())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }

    fn mark_logged_in(&self) -> Result<(), StoreError> {
        (**self).mark_logged_in()
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

#[async_trait(?Send)]
impl<P: IdentityProvider + ?Sized> IdentityProvider for &P {
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        (**self).sign_in(credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<Session> {
        (**self).sign_up(credentials).await
    }

    async fn sign_out(&self) -> AuthResult<()> {
        (**self).sign_out().await
    }
}
