//! Layered credential resolution.
//!
//! A provider's base URL and API key can come from several places. The
//! resolver walks them in a fixed order and returns the first non-empty value:
//!
//! - API key: explicit key map (by provider name) > provider settings >
//!   server environment > process environment
//! - Base URL: provider settings > server environment > process environment >
//!   provider default
//!
//! Nothing is cached; every call resolves again.

use crate::error::LlmError;
use crate::types::{ProviderConfig, ProviderSettings};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;

/// Base URL and API key ready to be used for requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub base_url: String,
    api_key: SecretString,
}

impl Credentials {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

/// Borrowed view over the layered configuration sources of one call.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialSources<'a> {
    /// Explicit API keys keyed by provider name
    pub api_keys: Option<&'a HashMap<String, String>>,
    /// Settings of this provider
    pub provider_settings: Option<&'a ProviderSettings>,
    /// Server environment map
    pub server_env: Option<&'a HashMap<String, String>>,
}

/// Outcome of resolution; the API key may be missing.
#[derive(Debug, Clone)]
pub struct ResolvedCredentials {
    pub base_url: String,
    pub api_key: Option<SecretString>,
}

impl ResolvedCredentials {
    /// Turn into usable credentials, failing with `MissingCredential` when no key resolved.
    pub fn require(self, provider: &str) -> Result<Credentials, LlmError> {
        match self.api_key {
            Some(api_key) if !api_key.expose_secret().is_empty() => Ok(Credentials {
                base_url: self.base_url,
                api_key,
            }),
            _ => Err(LlmError::missing_credential(provider)),
        }
    }
}

/// Resolves credentials for a provider from layered sources.
pub trait CredentialResolver: Send + Sync {
    fn resolve(
        &self,
        sources: &CredentialSources<'_>,
        config: &ProviderConfig,
        provider_name: &str,
    ) -> ResolvedCredentials;
}

/// Default resolver walking explicit keys, settings and environments in order.
#[derive(Debug, Clone, Copy)]
pub struct LayeredCredentialResolver {
    process_env: bool,
}

impl Default for LayeredCredentialResolver {
    fn default() -> Self {
        Self { process_env: true }
    }
}

impl LayeredCredentialResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resolver that never reads the process environment.
    pub fn hermetic() -> Self {
        Self { process_env: false }
    }

    fn env_lookup(&self, server_env: Option<&HashMap<String, String>>, key: &str) -> Option<String> {
        non_empty(server_env.and_then(|env| env.get(key)).cloned()).or_else(|| {
            if self.process_env {
                non_empty(std::env::var(key).ok())
            } else {
                None
            }
        })
    }
}

impl CredentialResolver for LayeredCredentialResolver {
    fn resolve(
        &self,
        sources: &CredentialSources<'_>,
        config: &ProviderConfig,
        provider_name: &str,
    ) -> ResolvedCredentials {
        let base_url = non_empty(sources.provider_settings.and_then(|s| s.base_url.clone()))
            .or_else(|| {
                config
                    .base_url_key
                    .and_then(|key| self.env_lookup(sources.server_env, key))
            })
            .unwrap_or_else(|| config.base_url.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        let api_key = non_empty(sources.api_keys.and_then(|keys| keys.get(provider_name)).cloned())
            .or_else(|| non_empty(sources.provider_settings.and_then(|s| s.api_key.clone())))
            .or_else(|| self.env_lookup(sources.server_env, config.api_token_key))
            .map(SecretString::from);

        ResolvedCredentials { base_url, api_key }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
