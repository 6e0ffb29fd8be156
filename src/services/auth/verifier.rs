use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use jsonwebtoken::{Algorithm, Validation};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AuthError, Result};
use crate::services::auth::claims::{OutsetaClaims, RawClaims};
use crate::services::auth::identity::Identity;
use crate::services::auth::trusted_key::TrustedKey;

/// The only algorithm Outseta signs access tokens with.
pub const ALLOWED_ALGORITHM: &str = "RS256";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifierOptions {
    /// Clock skew tolerated on `exp`, in seconds.
    pub leeway_seconds: u64,
}

/// RS256 access-token verifier.
///
/// `jsonwebtoken::Validation` is set up to check:
/// - signature (RS256 only)
/// - `exp` (required, `leeway_seconds` of skew)
///
/// `iss`, `aud` and `nbf` are not checked.
#[derive(Clone, Debug)]
pub struct TokenVerifier {
    key: TrustedKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(key: TrustedKey, options: VerifierOptions) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = options.leeway_seconds;
        validation.validate_exp = true;
        validation.validate_nbf = false;
        // Outseta tokens may carry `aud`; without this jsonwebtoken would reject them.
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self { key, validation }
    }

    /// Verify an access token and map its claims to an [`Identity`].
    pub fn verify(&self, token: &str) -> Result<Identity> {
        match self.verify_inner(token) {
            Ok(identity) => {
                debug!(uid = %identity.uid(), "access token verified");
                Ok(identity)
            }
            Err(err) => {
                warn!(code = err.code(), error = %err, "access token verification failed");
                Err(err)
            }
        }
    }

    fn verify_inner(&self, token: &str) -> Result<Identity> {
        check_header(token)?;

        let data =
            jsonwebtoken::decode::<RawClaims>(token, self.key.decoding_key(), &self.validation)?;
        let raw = data.claims;
        let claims = OutsetaClaims::from_raw(&raw)?;

        Ok(Identity::from_claims(token, raw, claims))
    }
}

/// Reads the header ourselves so that any declared algorithm other than RS256
/// (including ones jsonwebtoken cannot even name, like `none`) is a signature
/// failure before the key is touched.
///
/// The signature segment may be empty: an unsigned `alg: none` token is still
/// classified by its algorithm, and an empty RS256 signature fails verification.
fn check_header(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(AuthError::malformed("empty token"));
    }

    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments[0].is_empty() {
        return Err(AuthError::malformed("expected three dot-separated segments"));
    }

    let header_bytes = URL_SAFE_NO_PAD
        .decode(segments[0])
        .map_err(|_| AuthError::malformed("header is not valid base64url"))?;
    let header: Value = serde_json::from_slice(&header_bytes)
        .map_err(|_| AuthError::malformed("header is not valid JSON"))?;

    match header.get("alg") {
        Some(Value::String(alg)) if alg == ALLOWED_ALGORITHM => {}
        Some(Value::String(alg)) => {
            warn!(alg = %alg, "token declares a disallowed algorithm");
            return Err(AuthError::SignatureInvalid);
        }
        _ => return Err(AuthError::malformed("header has no 'alg'")),
    }

    if segments[1].is_empty() {
        return Err(AuthError::malformed("empty payload segment"));
    }

    Ok(())
}
