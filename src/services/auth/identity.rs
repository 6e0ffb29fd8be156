use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::auth::claims::{OutsetaClaims, RawClaims};

/// Normalised result of a successful verification.
///
/// Only `TokenVerifier::verify` builds this, so holding one means the token
/// behind it was signed by the trusted key and not expired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    uid: String,
    info: Info,
    credentials: Credentials,
    extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Info {
    pub name: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub token: String,
    // Outseta access tokens always carry `exp`.
    pub expires: bool,
    /// Seconds since the Unix epoch.
    pub expires_at: i64,
}

impl Credentials {
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires_at, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extra {
    pub raw_info: RawClaims,
    pub account_uid: Option<String>,
    pub is_primary: bool,
    pub subscription_uid: Option<String>,
    pub plan_uid: Option<String>,
    pub addon_uids: Vec<String>,
}

impl Identity {
    pub(crate) fn from_claims(token: &str, raw: RawClaims, mut claims: OutsetaClaims) -> Self {
        let is_primary = claims.is_primary();
        let expires_at = claims.exp_seconds();
        let addon_uids = claims.take_addon_uids();

        Self {
            uid: claims.sub,
            info: Info {
                name: claims.name,
                email: claims.email,
                first_name: claims.given_name,
                last_name: claims.family_name,
            },
            credentials: Credentials {
                token: token.to_string(),
                expires: true,
                expires_at,
            },
            extra: Extra {
                raw_info: raw,
                account_uid: claims.account_uid,
                is_primary,
                subscription_uid: claims.subscription_uid,
                plan_uid: claims.plan_uid,
                addon_uids,
            },
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn extra(&self) -> &Extra {
        &self.extra
    }
}
