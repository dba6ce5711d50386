use std::fmt;

use serde::Deserialize;

/// Decrypted BambooHR credential, as handed over by the host.
///
/// Neither field is checked: a malformed subdomain or key only shows up as a
/// failed probe.
#[derive(Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    subdomain: String,
    api_key: String,
}

impl Credential {
    pub fn new(subdomain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            subdomain: subdomain.into(),
            api_key: api_key.into(),
        }
    }

    /// Company subdomain, as used in the API gateway path.
    pub fn subdomain(&self) -> &str {
        &self.subdomain
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("subdomain", &self.subdomain)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
