use serde::{Deserialize, Serialize};

/// Connection settings for the property analytics API.
///
/// An explicit value handed to the provider constructor; nothing in this
/// workspace reads process-wide state for it. The key and domain travel as
/// query parameters on every request.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. "http://localhost:8000"
    pub base_url: String,

    /// Subscription key
    pub api_key: String,

    /// Domain the subscription key is bound to
    pub domain: String,
}

impl ApiConfig {
    /// Create a config from its three parts.
    pub fn new(base_url: String, api_key: String, domain: String) -> Self {
        Self {
            base_url,
            api_key,
            domain,
        }
    }

    /// True when both credential fields are present. Requests without
    /// credentials are rejected locally before any I/O happens.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.domain.is_empty()
    }
}
