//! Outseta sign-in for Rust hosts.
//!
//! - [`OutsetaStrategy::request_phase`] builds the hosted login redirect.
//! - [`OutsetaStrategy::callback_phase`] / [`TokenVerifier::verify`] check an RS256
//!   access token against the certificate from configuration and return an [`Identity`].
//!
//! Sessions, CSRF state and HTTP routing stay with the host.
pub mod config;
pub mod error;
pub mod services;
pub mod strategy;

pub use config::{Config, ConfigError};
pub use error::{AuthError, Result};
pub use services::auth::{
    Credentials, Extra, Identity, Info, RawClaims, TokenVerifier, TrustedKey, VerifierOptions,
};
pub use services::redirect::authorize_url;
pub use strategy::OutsetaStrategy;
