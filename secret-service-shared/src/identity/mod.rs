//! # Identity Provider Wire Format
//!
//! Request and response shapes for the Firebase Identity Toolkit REST API and
//! the mapping from its error codes to [`crate::models::AuthError`].

pub mod firebase;

pub use firebase::{
    PasswordRequest, ProviderErrorBody, TokenResponse, classify_error, classify_payload,
};
