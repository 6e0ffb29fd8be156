/// Factory: build `TokenVerifier` from `Config`.
use crate::config::Config;
use crate::error::Result;
use crate::services::auth::{TokenVerifier, TrustedKey, VerifierOptions};

pub fn build_token_verifier(config: &Config) -> Result<TokenVerifier> {
    let key = TrustedKey::from_certificate_pem(config.jwt_public_key_pem.as_bytes())?;

    Ok(TokenVerifier::new(
        key,
        VerifierOptions {
            leeway_seconds: config.leeway_seconds,
        },
    ))
}
