//! Per-provider user settings and static provider configuration.

use serde::{Deserialize, Serialize};

/// Settings a user may attach to one provider.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ProviderSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Static configuration every provider declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Environment key that may override the base URL (none for most providers)
    pub base_url_key: Option<&'static str>,
    /// Environment key holding the API token
    pub api_token_key: &'static str,
    /// Default API base URL
    pub base_url: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_use_camel_case_keys() {
        let settings: ProviderSettings =
            serde_json::from_str(r#"{"enabled":false,"baseUrl":"http://localhost:8080/v1"}"#)
                .unwrap();
        assert_eq!(settings.enabled, Some(false));
        assert_eq!(
            settings.base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
        assert!(settings.api_key.is_none());
    }
}
