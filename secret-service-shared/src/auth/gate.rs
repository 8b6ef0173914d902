use super::outcome::{AuthMethod, AuthNotice, AuthOutcome};
use super::{IdentityProvider, SessionStore};
use crate::models::{Credentials, Destination, Session};
use std::cell::Cell;
use std::fmt;
use tracing::{debug, info, warn};

/// Where a successful login sends the user.
const LOGIN_REDIRECT: Destination = Destination::Members;

/// Where a logout sends the user.
const LOGOUT_REDIRECT: Destination = Destination::Home;

/// Orchestrates sign-in, the registration fallback, and logout against an
/// [`IdentityProvider`], keeping a [`SessionStore`] flag in step.
///
/// An unknown email is treated as a first-time visitor: the gate registers the
/// account with the same credentials instead of reporting the failure. Only
/// one login attempt runs at a time; a submission made while another is
/// pending is rejected without reaching the provider.
pub struct AuthGate<P, S> {
    provider: P,
    store: S,
    in_flight: Cell<bool>,
}

impl<P, S> AuthGate<P, S>
where
    P: IdentityProvider,
    S: SessionStore,
{
    pub fn new(provider: P, store: S) -> Self {
        Self {
            provider,
            store,
            in_flight: Cell::new(false),
        }
    }

    /// Whether a login attempt is awaiting the provider.
    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Sign in, falling back to registration when the account does not exist.
    ///
    /// On success the session flag is set and the outcome redirects to the
    /// members area. On any rejection the flag is left as it was.
    pub async fn attempt_login(&self, credentials: &Credentials) -> AuthOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("login attempt rejected: another attempt is in flight");
            return AuthOutcome::Rejected(AuthNotice::attempt_in_progress());
        };

        match self.provider.sign_in(credentials).await {
            Ok(session) => self.establish(session, AuthMethod::SignIn),
            Err(err) if err.is_user_not_found() => {
                debug!(email = credentials.email(), "no account found, registering");
                match self.provider.sign_up(credentials).await {
                    Ok(session) => self.establish(session, AuthMethod::Registration),
                    Err(err) => {
                        warn!(error = %err, "registration failed");
                        AuthOutcome::Rejected(AuthNotice::registration_failed(err.message()))
                    }
                }
            }
            Err(err) => {
                warn!(error = %err, "sign-in failed");
                AuthOutcome::Rejected(AuthNotice::login_failed(err.message()))
            }
        }
    }

    /// Sign out and clear the session flag.
    ///
    /// The flag is cleared whatever the provider answers; there is no retry
    /// and no rollback. Always redirects home.
    pub async fn logout(&self) -> Destination {
        if let Err(err) = self.provider.sign_out().await {
            warn!(error = %err, "provider sign-out failed, clearing local session anyway");
        }
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to clear persisted session flag");
        }
        info!("signed out");
        LOGOUT_REDIRECT
    }

    fn establish(&self, session: Session, method: AuthMethod) -> AuthOutcome {
        if let Err(err) = self.store.mark_logged_in() {
            warn!(error = %err, "failed to persist session flag");
        }
        info!(subject = %session.subject, ?method, "session established");
        AuthOutcome::Authenticated {
            session,
            method,
            redirect: LOGIN_REDIRECT,
        }
    }
}

impl<P, S> fmt::Debug for AuthGate<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate")
            .field("in_flight", &self.in_flight.get())
            .finish_non_exhaustive()
    }
}

/// Holds the in-flight flag for the lifetime of one attempt.
struct InFlightGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemorySessionStore, NoticeKind};
    use crate::models::{AuthError, AuthResult, StoreError};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn issue(email: &str) -> Session {
        Session::new(format!("uid-{email}"), email, "id-token", "refresh-token", 3600)
    }

    /// Provider answering each operation with a fixed script.
    struct ScriptedProvider {
        sign_in: Result<(), AuthError>,
        sign_up: Result<(), AuthError>,
        sign_out: Result<(), AuthError>,
        sign_in_calls: Cell<usize>,
        sign_up_calls: Cell<usize>,
        sign_out_calls: Cell<usize>,
    }

    impl ScriptedProvider {
        fn new(sign_in: Result<(), AuthError>, sign_up: Result<(), AuthError>) -> Self {
            Self {
                sign_in,
                sign_up,
                sign_out: Ok(()),
                sign_in_calls: Cell::new(0),
                sign_up_calls: Cell::new(0),
                sign_out_calls: Cell::new(0),
            }
        }

        fn failing_sign_out(mut self) -> Self {
            self.sign_out = Err(AuthError::other("network request failed"));
            self
        }
    }

    #[async_trait(?Send)]
    impl IdentityProvider for ScriptedProvider {
        async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
            self.sign_in_calls.set(self.sign_in_calls.get() + 1);
            self.sign_in.clone().map(|()| issue(credentials.email()))
        }

        async fn sign_up(&self, credentials: &Credentials) -> AuthResult<Session> {
            self.sign_up_calls.set(self.sign_up_calls.get() + 1);
            self.sign_up.clone().map(|()| issue(credentials.email()))
        }

        async fn sign_out(&self) -> AuthResult<()> {
            self.sign_out_calls.set(self.sign_out_calls.get() + 1);
            self.sign_out.clone()
        }
    }

    /// Provider whose sign-in waits until released.
    struct HeldProvider {
        release: Notify,
        sign_in_calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl IdentityProvider for HeldProvider {
        async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
            self.sign_in_calls.set(self.sign_in_calls.get() + 1);
            self.release.notified().await;
            Ok(issue(credentials.email()))
        }

        async fn sign_up(&self, _credentials: &Credentials) -> AuthResult<Session> {
            Err(AuthError::other("unexpected sign-up"))
        }

        async fn sign_out(&self) -> AuthResult<()> {
            Ok(())
        }
    }

    /// Store whose writes always fail.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn is_logged_in(&self) -> bool {
            false
        }

        fn mark_logged_in(&self) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed {
                reason: "QuotaExceededError".to_string(),
            })
        }

        fn clear(&self) -> Result<(), StoreError> {
            Err(StoreError::Unavailable {
                reason: "storage disabled".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_sign_in_success_sets_flag_and_redirects_to_members() {
        let provider = ScriptedProvider::new(Ok(()), Ok(()));
        let store = MemorySessionStore::new();
        let gate = AuthGate::new(&provider, &store);

        let outcome = gate
            .attempt_login(&Credentials::new("member@x.com", "correct"))
            .await;

        match outcome {
            AuthOutcome::Authenticated {
                session,
                method,
                redirect,
            } => {
                assert_eq!(session.email, "member@x.com");
                assert_eq!(method, AuthMethod::SignIn);
                assert_eq!(redirect, Destination::Members);
            }
            AuthOutcome::Rejected(notice) => panic!("unexpected rejection: {notice}"),
        }
        assert!(store.is_logged_in());
        assert_eq!(provider.sign_in_calls.get(), 1);
        assert_eq!(provider.sign_up_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_unknown_email_registers_new_account() {
        let provider = ScriptedProvider::new(
            Err(AuthError::user_not_found("There is no user record.")),
            Ok(()),
        );
        let store = MemorySessionStore::new();
        let gate = AuthGate::new(&provider, &store);

        let outcome = gate
            .attempt_login(&Credentials::new("new@x.com", "hunter22"))
            .await;

        match outcome {
            AuthOutcome::Authenticated {
                method, redirect, ..
            } => {
                assert_eq!(method, AuthMethod::Registration);
                assert_eq!(redirect, Destination::Members);
                assert_eq!(redirect.path(), "/members");
            }
            AuthOutcome::Rejected(notice) => panic!("unexpected rejection: {notice}"),
        }
        assert!(store.is_logged_in());
        assert_eq!(provider.sign_in_calls.get(), 1);
        assert_eq!(provider.sign_up_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_registration_leaves_flag_unchanged() {
        for preset in [false, true] {
            let provider = ScriptedProvider::new(
                Err(AuthError::user_not_found("There is no user record.")),
                Err(AuthError::other("Password should be at least 6 characters")),
            );
            let store = if preset {
                MemorySessionStore::logged_in()
            } else {
                MemorySessionStore::new()
            };
            let gate = AuthGate::new(&provider, &store);

            let outcome = gate.attempt_login(&Credentials::new("new@x.com", "abc")).await;

            let notice = outcome.notice().expect("attempt should be rejected");
            assert_eq!(notice.kind, NoticeKind::RegistrationFailed);
            assert_eq!(notice.message, "Password should be at least 6 characters");
            assert_eq!(
                notice.to_string(),
                "Registration failed: Password should be at least 6 characters"
            );
            assert_eq!(outcome.redirect(), None);
            assert_eq!(store.is_logged_in(), preset);
        }
    }

    #[tokio::test]
    async fn test_other_sign_in_failure_never_registers() {
        let provider = ScriptedProvider::new(Err(AuthError::other("wrong password")), Ok(()));
        let store = MemorySessionStore::new();
        let gate = AuthGate::new(&provider, &store);

        let outcome = gate
            .attempt_login(&Credentials::new("bad@x.com", "guess"))
            .await;

        let notice = outcome.notice().expect("attempt should be rejected");
        assert_eq!(notice.kind, NoticeKind::LoginFailed);
        assert_eq!(notice.to_string(), "Login failed: wrong password");
        assert_eq!(outcome.redirect(), None);
        assert!(!store.is_logged_in());
        assert_eq!(provider.sign_up_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_other_sign_in_failure_keeps_existing_flag() {
        let provider = ScriptedProvider::new(Err(AuthError::other("wrong password")), Ok(()));
        let store = MemorySessionStore::logged_in();
        let gate = AuthGate::new(&provider, &store);

        let outcome = gate
            .attempt_login(&Credentials::new("bad@x.com", "guess"))
            .await;

        assert!(outcome.notice().is_some());
        assert!(store.is_logged_in());
    }

    #[tokio::test]
    async fn test_logout_clears_flag_and_redirects_home() {
        let provider = ScriptedProvider::new(Ok(()), Ok(()));
        let store = MemorySessionStore::logged_in();
        let gate = AuthGate::new(&provider, &store);

        let destination = gate.logout().await;

        assert_eq!(destination, Destination::Home);
        assert!(!store.is_logged_in());
        assert_eq!(provider.sign_out_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_logout_when_already_logged_out() {
        let provider = ScriptedProvider::new(Ok(()), Ok(()));
        let store = MemorySessionStore::new();
        let gate = AuthGate::new(&provider, &store);

        assert_eq!(gate.logout().await, Destination::Home);
        assert_eq!(gate.logout().await, Destination::Home);
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_logout_clears_flag_even_when_provider_fails() {
        let provider = ScriptedProvider::new(Ok(()), Ok(())).failing_sign_out();
        let store = MemorySessionStore::logged_in();
        let gate = AuthGate::new(&provider, &store);

        assert_eq!(gate.logout().await, Destination::Home);
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_storage_failure_does_not_block_authentication() {
        let provider = ScriptedProvider::new(Ok(()), Ok(()));
        let gate = AuthGate::new(&provider, BrokenStore);

        let outcome = gate
            .attempt_login(&Credentials::new("member@x.com", "correct"))
            .await;
        assert_eq!(outcome.redirect(), Some(Destination::Members));

        assert_eq!(gate.logout().await, Destination::Home);
    }

    #[tokio::test]
    async fn test_concurrent_attempt_is_rejected_while_one_is_pending() {
        let provider = HeldProvider {
            release: Notify::new(),
            sign_in_calls: Cell::new(0),
        };
        let store = MemorySessionStore::new();
        let gate = AuthGate::new(&provider, &store);
        let first_credentials = Credentials::new("member@x.com", "correct");
        let second_credentials = Credentials::new("member@x.com", "correct");

        let (first, second, ()) = tokio::join!(
            gate.attempt_login(&first_credentials),
            async {
                assert!(gate.is_busy());
                gate.attempt_login(&second_credentials).await
            },
            async {
                provider.release.notify_one();
            },
        );

        assert_eq!(first.redirect(), Some(Destination::Members));
        assert_eq!(
            second.notice().map(|notice| notice.kind),
            Some(NoticeKind::AttemptInProgress)
        );
        assert_eq!(provider.sign_in_calls.get(), 1);
        assert!(store.is_logged_in());
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn test_guard_released_after_rejection() {
        let provider = ScriptedProvider::new(Err(AuthError::other("wrong password")), Ok(()));
        let store = MemorySessionStore::new();
        let gate = AuthGate::new(&provider, &store);
        let credentials = Credentials::new("bad@x.com", "guess");

        gate.attempt_login(&credentials).await;
        assert!(!gate.is_busy());

        let outcome = gate.attempt_login(&credentials).await;
        assert_eq!(outcome.notice().map(|n| n.kind), Some(NoticeKind::LoginFailed));
        assert_eq!(provider.sign_in_calls.get(), 2);
    }
}
