#![allow(dead_code)]

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::{Value, json};

pub const SIGNING_CERT: &str = include_str!("../fixtures/signing_cert.pem");
pub const SIGNING_KEY: &str = include_str!("../fixtures/signing_key.pem");
pub const OTHER_KEY: &str = include_str!("../fixtures/other_key.pem");

/// Signs test tokens the way Outseta does (RS256, `typ: JWT`).
pub struct TestIssuer {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
}

impl TestIssuer {
    pub fn outseta() -> Self {
        Self::rsa(SIGNING_KEY, Algorithm::RS256)
    }

    pub fn untrusted() -> Self {
        Self::rsa(OTHER_KEY, Algorithm::RS256)
    }

    pub fn rsa(private_key_pem: &str, algorithm: Algorithm) -> Self {
        let encoding_key =
            EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).expect("valid rsa private key");
        Self {
            algorithm,
            encoding_key,
        }
    }

    /// HMAC keyed with the certificate text: the classic algorithm-confusion forgery.
    pub fn hmac_with_certificate() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding_key: EncodingKey::from_secret(SIGNING_CERT.as_bytes()),
        }
    }

    pub fn sign<T: Serialize>(&self, claims: &T) -> String {
        let mut header = Header::new(self.algorithm);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, claims, &self.encoding_key).expect("token should be signed")
    }
}

pub fn now() -> i64 {
    Utc::now().timestamp()
}

/// Claims shaped like an Outseta access token, valid for an hour.
pub fn outseta_claims() -> Value {
    json!({
        "nbf": now() - 10,
        "exp": now() + 3600,
        "iss": "https://acme.outseta.com",
        "aud": "acme.outseta.com",
        "sub": "u1",
        "name": "A B",
        "email": "a@b.com",
        "given_name": "A",
        "family_name": "B",
        "outseta:accountUid": "acc1",
        "outseta:isPrimary": "1",
        "outseta:subscriptionUid": "subscr1",
        "outseta:planUid": "plan1",
        "outseta:addonUids": ["addon1", "addon2"],
    })
}

pub fn with(mut claims: Value, key: &str, value: Value) -> Value {
    claims[key] = value;
    claims
}

pub fn without(mut claims: Value, key: &str) -> Value {
    if let Some(map) = claims.as_object_mut() {
        map.remove(key);
    }
    claims
}
