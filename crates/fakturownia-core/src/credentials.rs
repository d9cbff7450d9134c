//! Resolved credentials for one outbound call.

/// A usable `(domain, api_token)` pair.
///
/// Both fields are guaranteed non-empty by construction through
/// [`crate::Config::resolve_credentials`]; no outbound call is ever attempted
/// without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub domain: String,
    pub api_token: String,
}

impl Credentials {
    /// Base URL of the account's Fakturownia instance.
    pub fn base_url(&self) -> String {
        format!("https://{}.fakturownia.pl", self.domain)
    }
}
