use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Proof of authenticated identity issued by the identity provider.
///
/// The gate hands this back to its caller and never persists it; only the
/// boolean session flag survives a reload.
pub struct Session {
    /// Provider-side subject identifier.
    pub subject: String,

    /// Email the session was issued for.
    pub email: String,

    id_token: SecretString,
    refresh_token: SecretString,

    /// Seconds until the ID token expires, as reported at issue time.
    pub expires_in_secs: u64,
}

impl Session {
    /// Assemble a session from the provider's token response.
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        id_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in_secs: u64,
    ) -> Self {
        Self {
            subject: subject.into(),
            email: email.into(),
            id_token: SecretString::from(id_token.into()),
            refresh_token: SecretString::from(refresh_token.into()),
            expires_in_secs,
        }
    }

    /// Bearer token for calls made on behalf of this session.
    #[must_use]
    pub fn id_token(&self) -> &str {
        self.id_token.expose_secret()
    }

    /// Token used to mint a fresh ID token.
    #[must_use]
    pub fn refresh_token(&self) -> &str {
        self.refresh_token.expose_secret()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("subject", &self.subject)
            .field("email", &self.email)
            .field("expires_in_secs", &self.expires_in_secs)
            .finish_non_exhaustive()
    }
}
