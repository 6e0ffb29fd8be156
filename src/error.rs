/*
 * Responsibility
 * - AuthError: the one error type returned by key construction and token verification
 * - Stable error codes so the host can branch (re-authenticate vs. reject)
 * - jsonwebtoken error kinds are mapped here and nowhere else
 */
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, AuthError>;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad certificate or missing settings. Fatal at startup.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Signature did not verify, or the token declared an algorithm other than RS256.
    #[error("invalid token signature")]
    SignatureInvalid,

    #[error("token expired")]
    TokenExpired,
}

impl AuthError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedToken(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            AuthError::Configuration(_) => "CONFIGURATION_ERROR",
            AuthError::MalformedToken(_) => "MALFORMED_TOKEN",
            AuthError::SignatureInvalid => "SIGNATURE_INVALID",
            AuthError::TokenExpired => "TOKEN_EXPIRED",
        }
    }

    /// An expired token is the only failure where sending the user back to the
    /// hosted login page is the expected fix.
    pub fn is_reauthenticate(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }
}

impl From<ConfigError> for AuthError {
    fn from(e: ConfigError) -> Self {
        AuthError::Configuration(e.to_string())
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthError::SignatureInvalid
            }
            ErrorKind::InvalidToken => AuthError::malformed("expected three dot-separated segments"),
            ErrorKind::Base64(_) => AuthError::malformed("segment is not valid base64url"),
            ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                AuthError::malformed("payload is not a JSON claims object")
            }
            ErrorKind::MissingRequiredClaim(claim) => {
                AuthError::malformed(format!("missing '{}' claim", claim))
            }
            // Fail closed on anything else (key/provider errors included).
            _ => AuthError::SignatureInvalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            AuthError::Configuration("x".into()),
            AuthError::malformed("x"),
            AuthError::SignatureInvalid,
            AuthError::TokenExpired,
        ];
        let mut codes: Vec<_> = errors.iter().map(AuthError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn only_expiry_asks_for_reauthentication() {
        assert!(AuthError::TokenExpired.is_reauthenticate());
        assert!(!AuthError::SignatureInvalid.is_reauthenticate());
        assert!(!AuthError::malformed("bad").is_reauthenticate());
    }

    #[test]
    fn jwt_kinds_map_to_taxonomy() {
        let expired: AuthError = JwtError::from(ErrorKind::ExpiredSignature).into();
        assert!(matches!(expired, AuthError::TokenExpired));

        let bad_sig: AuthError = JwtError::from(ErrorKind::InvalidSignature).into();
        assert!(matches!(bad_sig, AuthError::SignatureInvalid));

        let wrong_alg: AuthError = JwtError::from(ErrorKind::InvalidAlgorithm).into();
        assert!(matches!(wrong_alg, AuthError::SignatureInvalid));

        let structure: AuthError = JwtError::from(ErrorKind::InvalidToken).into();
        assert!(matches!(structure, AuthError::MalformedToken(_)));

        let no_exp: AuthError =
            JwtError::from(ErrorKind::MissingRequiredClaim("exp".to_string())).into();
        assert_eq!(no_exp.to_string(), "malformed token: missing 'exp' claim");
    }

    #[test]
    fn config_error_becomes_configuration() {
        let e: AuthError = ConfigError::Missing("OUTSETA_SUBDOMAIN").into();
        assert_eq!(e.code(), "CONFIGURATION_ERROR");
        assert!(e.to_string().contains("OUTSETA_SUBDOMAIN"));
    }
}
