use crate::models::{AuthError, Credentials, Session};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error codes that mean "no account for this email".
const USER_NOT_FOUND_CODES: [&str; 2] = ["EMAIL_NOT_FOUND", "USER_NOT_FOUND"];

/// Body of `accounts:signInWithPassword` and `accounts:signUp`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

impl<'a> PasswordRequest<'a> {
    pub fn from_credentials(credentials: &'a Credentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
            return_secure_token: true,
        }
    }
}

impl fmt::Debug for PasswordRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRequest")
            .field("email", &self.email)
            .field("return_secure_token", &self.return_secure_token)
            .finish_non_exhaustive()
    }
}

/// Successful sign-in or sign-up response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Lifetime in seconds, sent as a decimal string.
    pub expires_in: String,
}

impl TokenResponse {
    pub fn into_session(self) -> Session {
        let expires_in_secs = self.expires_in.trim().parse().unwrap_or_default();
        Session::new(
            self.local_id,
            self.email,
            self.id_token,
            self.refresh_token,
            expires_in_secs,
        )
    }
}

/// Error envelope returned with every non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ProviderErrorDetail {
    /// Either `CODE`, `CODE : detail`, or free text.
    pub message: String,
}

impl ProviderErrorDetail {
    /// The leading error code and optional trailing detail.
    fn split(&self) -> (&str, Option<&str>) {
        match self.message.split_once(" : ") {
            Some((code, detail)) => (code.trim(), Some(detail.trim())),
            None => (self.message.trim(), None),
        }
    }
}

/// Map a provider error envelope onto the two-kind taxonomy, with a readable
/// message.
pub fn classify_error(body: &ProviderErrorBody) -> AuthError {
    let (code, detail) = body.error.split();
    let message = describe(code, detail);
    if USER_NOT_FOUND_CODES.contains(&code) {
        AuthError::user_not_found(message)
    } else {
        AuthError::other(message)
    }
}

/// Classify a raw error response body. Bodies that are not the expected
/// envelope become [`AuthError::Other`] carrying the status and text.
pub fn classify_payload(status: u16, payload: &str) -> AuthError {
    match serde_json::from_str::<ProviderErrorBody>(payload) {
        Ok(body) => classify_error(&body),
        Err(_) if payload.trim().is_empty() => {
            AuthError::other(format!("identity provider returned status {status}"))
        }
        Err(_) => AuthError::other(format!(
            "identity provider returned status {status}: {}",
            payload.trim()
        )),
    }
}

fn describe(code: &str, detail: Option<&str>) -> String {
    let known = match code {
        "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => {
            "There is no user record corresponding to this identifier. The user may have been deleted."
        }
        "INVALID_PASSWORD" => "The password is invalid or the user does not have a password.",
        "INVALID_LOGIN_CREDENTIALS" => "The supplied credentials are incorrect.",
        "INVALID_EMAIL" => "The email address is badly formatted.",
        "MISSING_PASSWORD" => "A password is required.",
        "EMAIL_EXISTS" => "The email address is already in use by another account.",
        "USER_DISABLED" => "The user account has been disabled by an administrator.",
        "OPERATION_NOT_ALLOWED" => "Password sign-in is disabled for this project.",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            "Access to this account has been temporarily disabled due to many failed login attempts. Try again later."
        }
        "WEAK_PASSWORD" => {
            return detail
                .unwrap_or("The password must be 6 characters long or more.")
                .to_string();
        }
        _ => return detail.unwrap_or(code).to_string(),
    };
    known.to_string()
}
