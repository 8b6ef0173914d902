use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Email and password captured from the login form.
///
/// Lives only for the duration of one submission. The password is wrapped in
/// [`SecretString`] so it never shows up in `Debug` output or logs.
pub struct Credentials {
    email: String,
    password: SecretString,
}

impl Credentials {
    /// Build credentials from raw form values, both taken exactly as typed.
    /// Validation is left to the identity provider.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The submitted email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The submitted password, for the provider request body only.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
