#![cfg_attr(not(test), forbid(unsafe_code))]

//! Shared models and the authentication gate for the Secret Service site.
//!
//! Everything here is target-independent: the web crate supplies the browser
//! identity provider client and storage-backed session flag.

pub mod auth;
pub mod config;
pub mod identity;
pub mod models;

pub use auth::{AuthGate, AuthOutcome, IdentityProvider, SessionStore};
pub use config::IdentityConfig;
pub use models::{AuthError, Credentials, Destination, Session};
