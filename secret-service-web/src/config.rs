//! Frontend configuration module
//!
//! Settings are compiled in from `SECRET_SERVICE_*` environment variables at
//! build time (`trunk build` forwards the environment to `rustc`).

use shared::IdentityConfig;

const DEFAULT_DONATION_URL: &str = "https://donate.stripe.com/test_dR6eXR1x1gsrfqY4gg";

/// Frontend configuration for the identity provider and external links
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Donation page opened from the home page
    pub donation_url: String,
    /// Firebase project settings
    pub identity: IdentityConfig,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        let identity = IdentityConfig {
            api_key: build_env(option_env!("SECRET_SERVICE_FIREBASE_API_KEY")),
            auth_domain: build_env(option_env!("SECRET_SERVICE_FIREBASE_AUTH_DOMAIN")),
            project_id: build_env(option_env!("SECRET_SERVICE_FIREBASE_PROJECT_ID")),
            storage_bucket: build_env(option_env!("SECRET_SERVICE_FIREBASE_STORAGE_BUCKET")),
            messaging_sender_id: build_env(option_env!(
                "SECRET_SERVICE_FIREBASE_MESSAGING_SENDER_ID"
            )),
            app_id: build_env(option_env!("SECRET_SERVICE_FIREBASE_APP_ID")),
            ..IdentityConfig::with_defaults()
        }
        .with_endpoint(build_env(option_env!("SECRET_SERVICE_IDENTITY_ENDPOINT")));

        Self {
            donation_url: option_env!("SECRET_SERVICE_DONATION_URL")
                .unwrap_or(DEFAULT_DONATION_URL)
                .to_string(),
            identity,
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the donation URL
    pub fn donation_url(&self) -> &str {
        &self.donation_url
    }

    /// Get the identity provider settings
    pub fn identity(&self) -> &IdentityConfig {
        &self.identity
    }

    /// Log every configuration problem; the site still renders without a
    /// working identity provider.
    pub fn report_problems(&self) {
        if let Err(problems) = self.identity.validate() {
            for problem in problems {
                log::warn!("configuration: {problem}");
            }
        }
    }
}

fn build_env(value: Option<&'static str>) -> String {
    value.unwrap_or_default().trim().to_string()
}
