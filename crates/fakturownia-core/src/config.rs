//! Process-wide configuration.
//!
//! Read once at startup and carried explicitly through request state from
//! then on; nothing below the HTTP boundary reads the environment.

use serde_json::Value;

use crate::credentials::Credentials;
use crate::error::{CoreError, CoreResult};

pub const ENV_DOMAIN: &str = "FAKTUROWNIA_DOMAIN";
pub const ENV_API_TOKEN: &str = "FAKTUROWNIA_API_TOKEN";
pub const ENV_API_BASE: &str = "FAKTUROWNIA_API_BASE";

/// Process-wide defaults for outbound calls.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Default account domain (`FAKTUROWNIA_DOMAIN`); empty means unset.
    pub domain: String,
    /// Default API token (`FAKTUROWNIA_API_TOKEN`); empty means unset.
    pub api_token: String,
    /// Optional base URL replacing the `https://{domain}.fakturownia.pl`
    /// template (`FAKTUROWNIA_API_BASE`). Intended for staging and tests.
    pub api_base: Option<String>,
}

impl Config {
    /// Load the configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            domain: std::env::var(ENV_DOMAIN).unwrap_or_default(),
            api_token: std::env::var(ENV_API_TOKEN).unwrap_or_default(),
            api_base: std::env::var(ENV_API_BASE).ok().filter(|v| !v.is_empty()),
        }
    }

    /// Resolve credentials for one call.
    ///
    /// Configured values take precedence; only where a configured value is
    /// empty does the corresponding tool argument (`domain` / `api_token`)
    /// fill in. An unresolved pair fails before any network activity.
    pub fn resolve_credentials(&self, arguments: &Value) -> CoreResult<Credentials> {
        let domain = pick(&self.domain, arguments, "domain");
        let api_token = pick(&self.api_token, arguments, "api_token");

        if domain.is_empty() || api_token.is_empty() {
            return Err(CoreError::MissingCredentials);
        }

        Ok(Credentials { domain, api_token })
    }
}

fn pick(configured: &str, arguments: &Value, key: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    arguments
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
