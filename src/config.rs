/*
 * Responsibility
 * - Load Outseta settings from the environment (.env via dotenvy)
 * - Validate required values (missing subdomain / certificate fails startup)
 */
use std::fmt;

pub const DEFAULT_PROVIDER_HOST: &str = "outseta.com";

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone)]
pub struct Config {
    pub subdomain: String,
    // X.509 certificate (PEM) whose public key signs access tokens
    pub jwt_public_key_pem: String,
    pub provider_host: String,
    // Clock skew tolerated on `exp` (seconds)
    pub leeway_seconds: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Certificate body is noise in logs
        f.debug_struct("Config")
            .field("subdomain", &self.subdomain)
            .field("provider_host", &self.provider_host)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn new(subdomain: impl Into<String>, jwt_public_key_pem: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            jwt_public_key_pem: jwt_public_key_pem.into(),
            provider_host: DEFAULT_PROVIDER_HOST.to_string(),
            leeway_seconds: 0,
        }
    }

    pub fn with_leeway_seconds(mut self, leeway_seconds: u64) -> Self {
        self.leeway_seconds = leeway_seconds;
        self
    }

    pub fn with_provider_host(mut self, provider_host: impl Into<String>) -> Self {
        self.provider_host = provider_host.into();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same rules as [`Config::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let subdomain = required("OUTSETA_SUBDOMAIN")?.trim().to_string();

        let jwt_public_key_pem = required("OUTSETA_JWT_PUBLIC_KEY")?.replace("\\n", "\n");

        let provider_host = lookup("OUTSETA_HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PROVIDER_HOST.to_string());

        let leeway_seconds = lookup("OUTSETA_LEEWAY_SECONDS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(0);

        Ok(Self {
            subdomain,
            jwt_public_key_pem,
            provider_host,
            leeway_seconds,
        })
    }
}
