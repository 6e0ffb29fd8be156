/*
 * Responsibility
 * - Build the hosted-login redirect: https://{subdomain}.{host}/auth?authenticationCallbackUrl=...
 * - Escaping is application/x-www-form-urlencoded (space -> '+')
 */
use url::Url;

use crate::config::ConfigError;

pub const CALLBACK_PARAM: &str = "authenticationCallbackUrl";

/// A subdomain is a single DNS label: `[A-Za-z0-9-]+`.
pub fn validate_subdomain(subdomain: &str) -> Result<(), ConfigError> {
    if subdomain.is_empty()
        || !subdomain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Invalid("OUTSETA_SUBDOMAIN"));
    }
    Ok(())
}

pub fn authorize_url(
    subdomain: &str,
    provider_host: &str,
    callback_url: &str,
) -> Result<String, ConfigError> {
    validate_subdomain(subdomain)?;

    let mut url = Url::parse(&format!("https://{}.{}/auth", subdomain, provider_host))
        .map_err(|_| ConfigError::Invalid("OUTSETA_HOST"))?;

    url.query_pairs_mut()
        .append_pair(CALLBACK_PARAM, callback_url);

    Ok(url.into())
}
