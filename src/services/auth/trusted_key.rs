use jsonwebtoken::DecodingKey;
use std::sync::Arc;
use tracing::error;

use crate::error::{AuthError, Result};

const CERTIFICATE_TAG: &str = "-----BEGIN CERTIFICATE-----";

/// RSA public key taken from the provider's X.509 signing certificate.
///
/// - Built once at startup; read-only afterwards, so clones share one key.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TrustedKey {
    decoding_key: Arc<DecodingKey>,
}

impl std::fmt::Debug for TrustedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustedKey").finish_non_exhaustive()
    }
}

impl TrustedKey {
    /// `certificate_pem` must be a PEM `CERTIFICATE` block carrying an RSA key.
    pub fn from_certificate_pem(certificate_pem: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(certificate_pem).map_err(|_| {
            error!("jwt public key certificate is not valid UTF-8");
            AuthError::Configuration("certificate is not valid UTF-8 PEM".to_string())
        })?;

        if !text.trim_start().starts_with(CERTIFICATE_TAG) {
            error!("jwt public key is not a PEM encoded X.509 certificate");
            return Err(AuthError::Configuration(
                "expected a PEM encoded X.509 certificate".to_string(),
            ));
        }

        // jsonwebtoken pulls the SubjectPublicKeyInfo out of the certificate itself.
        let decoding_key = DecodingKey::from_rsa_pem(text.trim().as_bytes()).map_err(|e| {
            error!(error = %e, "failed to extract RSA public key from certificate");
            AuthError::Configuration(format!("unusable certificate: {}", e))
        })?;

        Ok(Self {
            decoding_key: Arc::new(decoding_key),
        })
    }

    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}
