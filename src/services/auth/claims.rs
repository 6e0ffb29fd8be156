use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{AuthError, Result};

/// Every claim of a verified token, keys kept exactly as the provider sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawClaims(Map<String, Value>);

impl RawClaims {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for RawClaims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Typed view over the claims Outseta puts in an access token.
///
/// NOTE:
/// - Unknown keys are ignored here; they stay available through [`RawClaims`].
/// - `sub` and `exp` are required. Everything else is optional.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OutsetaClaims {
    pub sub: String,
    // Any JSON number; fractional seconds are allowed.
    pub exp: Number,

    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,

    #[serde(default, rename = "outseta:accountUid")]
    pub account_uid: Option<String>,
    // Outseta sends "1" / "0" as strings; keep the raw value and decide later.
    #[serde(default, rename = "outseta:isPrimary")]
    pub is_primary: Option<Value>,
    #[serde(default, rename = "outseta:subscriptionUid")]
    pub subscription_uid: Option<String>,
    #[serde(default, rename = "outseta:planUid")]
    pub plan_uid: Option<String>,
    #[serde(default, rename = "outseta:addonUids")]
    pub addon_uids: Option<OneOrMany>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

impl OutsetaClaims {
    /// Build the typed view and enforce a non-empty `sub`.
    pub fn from_raw(raw: &RawClaims) -> Result<Self> {
        let claims: OutsetaClaims = serde_json::from_value(Value::Object(raw.as_map().clone()))
            .map_err(|e| AuthError::malformed(format!("unexpected claims shape: {}", e)))?;

        if claims.sub.trim().is_empty() {
            return Err(AuthError::malformed("empty 'sub' claim"));
        }

        Ok(claims)
    }

    /// `exp` as whole seconds since the epoch.
    pub fn exp_seconds(&self) -> i64 {
        self.exp
            .as_i64()
            .or_else(|| self.exp.as_f64().map(|secs| secs.floor() as i64))
            .unwrap_or(i64::MAX)
    }

    /// Only the exact string "1" marks the primary person on the account.
    pub fn is_primary(&self) -> bool {
        matches!(&self.is_primary, Some(Value::String(s)) if s == "1")
    }

    pub fn take_addon_uids(&mut self) -> Vec<String> {
        self.addon_uids
            .take()
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
    }
}
