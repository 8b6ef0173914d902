//! # Configuration
//!
//! Settings for the identity provider. Values are supplied by the front-end
//! at build time; this module only holds, derives, and validates them.

use serde::{Deserialize, Serialize};

/// Identity Toolkit REST endpoint used when none is configured.
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase web-app settings plus the REST endpoint the provider client talks to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfig {
    /// Web API key sent as the `key` query parameter
    pub api_key: String,

    /// Auth domain of the Firebase project
    pub auth_domain: String,

    /// Firebase project identifier
    pub project_id: String,

    /// Storage bucket of the Firebase project
    pub storage_bucket: String,

    /// Cloud messaging sender identifier
    pub messaging_sender_id: String,

    /// Firebase web app identifier
    pub app_id: String,

    /// Base URL of the Identity Toolkit REST API
    pub endpoint: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl IdentityConfig {
    /// Generates a default configuration: no project, public endpoint.
    pub fn with_defaults() -> Self {
        Self {
            api_key: String::new(),
            auth_domain: String::new(),
            project_id: String::new(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
            endpoint: DEFAULT_IDENTITY_ENDPOINT.to_string(),
        }
    }

    /// Override the REST endpoint, e.g. to target the auth emulator.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        if !endpoint.trim().is_empty() {
            self.endpoint = endpoint;
        }
        self
    }

    /// URL for email/password sign-in.
    pub fn sign_in_url(&self) -> String {
        self.account_url("signInWithPassword")
    }

    /// URL for email/password registration.
    pub fn sign_up_url(&self) -> String {
        self.account_url("signUp")
    }

    fn account_url(&self, action: &str) -> String {
        format!(
            "{}/accounts:{action}?key={}",
            self.endpoint.trim_end_matches('/'),
            self.api_key
        )
    }

    /// Validate the configuration, reporting every problem found.
    ///
    /// # Errors
    /// Returns the list of problems if any required setting is missing or
    /// malformed.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.api_key.trim().is_empty() {
            errors.push("Firebase API key is not set".to_string());
        }
        if self.project_id.trim().is_empty() {
            errors.push("Firebase project id is not set".to_string());
        }
        if self.auth_domain.trim().is_empty() {
            errors.push("Firebase auth domain is not set".to_string());
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            errors.push(format!(
                "Identity endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
