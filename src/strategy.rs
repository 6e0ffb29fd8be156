/*
 * Responsibility
 * - Two-step sign-in without any HTTP plumbing:
 *   request phase -> redirect URL, callback phase -> verified Identity
 * - The host extracts request parameters and stores the Identity itself
 */
use tracing::warn;

use crate::config::{Config, ConfigError};
use crate::error::{AuthError, Result};
use crate::services::auth::{Identity, TokenVerifier, build_token_verifier};
use crate::services::redirect;

pub const STRATEGY_NAME: &str = "outseta";
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

#[derive(Clone, Debug)]
pub struct OutsetaStrategy {
    subdomain: String,
    provider_host: String,
    verifier: TokenVerifier,
}

impl OutsetaStrategy {
    /// Checks the subdomain and builds the trusted key up front, so bad
    /// configuration fails here and not on the first login.
    pub fn new(config: &Config) -> Result<Self> {
        if config.subdomain.trim().is_empty() {
            return Err(ConfigError::Missing("OUTSETA_SUBDOMAIN").into());
        }
        redirect::validate_subdomain(&config.subdomain)?;

        let verifier = build_token_verifier(config)?;

        Ok(Self {
            subdomain: config.subdomain.clone(),
            provider_host: config.provider_host.clone(),
            verifier,
        })
    }

    pub fn name(&self) -> &'static str {
        STRATEGY_NAME
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }

    /// Where to send the browser to sign in.
    pub fn request_phase(&self, callback_url: &str) -> Result<String> {
        Ok(redirect::authorize_url(
            &self.subdomain,
            &self.provider_host,
            callback_url,
        )?)
    }

    /// Verify the `access_token` parameter of the callback request.
    ///
    /// `params` are the request parameters as the host parsed them; the first
    /// `access_token` wins.
    pub fn callback_phase<I, K, V>(&self, params: I) -> Result<Identity>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let token = params
            .into_iter()
            .find(|(k, _)| k.as_ref() == ACCESS_TOKEN_PARAM)
            .map(|(_, v)| v.as_ref().to_string());

        match token {
            Some(token) if !token.is_empty() => self.verifier.verify(&token),
            _ => {
                warn!("callback request without {}", ACCESS_TOKEN_PARAM);
                Err(AuthError::malformed("missing access_token parameter"))
            }
        }
    }
}
