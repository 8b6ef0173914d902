use crate::config::FrontendConfig;
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::Client;
use shared::identity::{PasswordRequest, TokenResponse, classify_payload};
use shared::models::{AuthError, AuthResult, Credentials, Session};
use shared::{IdentityConfig, IdentityProvider};
use std::sync::{Arc, Mutex};

thread_local! {
    static SHARED_PROVIDER: OnceCell<FirebaseIdentityProvider> = OnceCell::new();
}

/// Firebase Identity Toolkit client for email/password accounts.
#[derive(Clone, Debug)]
pub struct FirebaseIdentityProvider {
    config: Arc<IdentityConfig>,
    client: Client,
    active_subject: Arc<Mutex<Option<String>>>,
}

impl FirebaseIdentityProvider {
    /// Create a client for the given project settings.
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: Client::new(),
            active_subject: Arc::new(Mutex::new(None)),
        }
    }

    /// Client built from the compiled-in front-end configuration.
    pub fn shared() -> Self {
        SHARED_PROVIDER.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().identity().clone()))
                .clone()
        })
    }

    /// Subject of the session this client last established, if any.
    pub fn active_subject(&self) -> Option<String> {
        self.active_subject
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn set_active_subject(&self, subject: Option<String>) {
        if let Ok(mut guard) = self.active_subject.lock() {
            *guard = subject;
        }
    }

    async fn exchange(&self, url: String, credentials: &Credentials) -> AuthResult<Session> {
        let response = self
            .client
            .post(url)
            .json(&PasswordRequest::from_credentials(credentials))
            .send()
            .await
            .map_err(|err| AuthError::other(format!("Network request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            return Err(classify_payload(status.as_u16(), &payload));
        }

        let body: TokenResponse = response.json().await.map_err(|err| {
            AuthError::other(format!("Unexpected identity provider response: {err}"))
        })?;
        let session = body.into_session();
        self.set_active_subject(Some(session.subject.clone()));
        Ok(session)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FirebaseIdentityProvider {
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        log::debug!("signing in {}", credentials.email());
        self.exchange(self.config.sign_in_url(), credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<Session> {
        log::debug!("registering {}", credentials.email());
        self.exchange(self.config.sign_up_url(), credentials).await
    }

    /// Identity Toolkit sessions are bearer tokens held by the client, so
    /// signing out means forgetting them. There is nothing to call remotely.
    async fn sign_out(&self) -> AuthResult<()> {
        if let Some(subject) = self.active_subject() {
            log::debug!("dropping provider session for {subject}");
        }
        self.set_active_subject(None);
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn provider() -> FirebaseIdentityProvider {
        FirebaseIdentityProvider::new(IdentityConfig {
            api_key: "AIzaTest".to_string(),
            ..IdentityConfig::with_defaults()
        })
    }

    #[test]
    fn test_new_provider_has_no_active_subject() {
        assert_eq!(provider().active_subject(), None);
    }

    #[test]
    fn test_clones_share_active_subject() {
        let provider = provider();
        let clone = provider.clone();
        provider.set_active_subject(Some("uid-1".to_string()));
        assert_eq!(clone.active_subject().as_deref(), Some("uid-1"));
    }

    #[tokio::test]
    async fn test_sign_out_forgets_subject() {
        let provider = provider();
        provider.set_active_subject(Some("uid-1".to_string()));

        assert!(provider.sign_out().await.is_ok());
        assert_eq!(provider.active_subject(), None);

        // Signing out again is harmless
        assert!(provider.sign_out().await.is_ok());
    }
}
