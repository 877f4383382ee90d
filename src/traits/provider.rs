//! Provider Trait
//!
//! The uniform contract every backend adapter implements: a static model
//! catalog, optional runtime discovery, and construction of model handles.

use crate::error::LlmError;
use crate::providers::openai_compatible::ChatModelHandle;
use crate::types::{ModelDescriptor, ProviderConfig, ProviderSettings};
use async_trait::async_trait;
use std::collections::HashMap;

/// Inputs for [`Provider::model_instance`].
#[derive(Debug, Clone, Copy)]
pub struct ModelInstanceOptions<'a> {
    /// Model identifier passed through to the provider
    pub model: &'a str,
    /// Server environment map
    pub server_env: &'a HashMap<String, String>,
    /// Explicit API keys keyed by provider name
    pub api_keys: Option<&'a HashMap<String, String>>,
    /// Settings of all providers keyed by provider name
    pub provider_settings: Option<&'a HashMap<String, ProviderSettings>>,
}

impl<'a> ModelInstanceOptions<'a> {
    pub fn new(model: &'a str, server_env: &'a HashMap<String, String>) -> Self {
        Self {
            model,
            server_env,
            api_keys: None,
            provider_settings: None,
        }
    }

    pub fn with_api_keys(mut self, api_keys: &'a HashMap<String, String>) -> Self {
        self.api_keys = Some(api_keys);
        self
    }

    pub fn with_provider_settings(
        mut self,
        provider_settings: &'a HashMap<String, ProviderSettings>,
    ) -> Self {
        self.provider_settings = Some(provider_settings);
        self
    }
}

#[async_trait]
pub trait Provider: Send + Sync {
    /// Display name, also the key for explicit API keys and settings maps
    fn name(&self) -> &str;

    /// Where users obtain an API key
    fn api_key_link(&self) -> &str;

    fn config(&self) -> &ProviderConfig;

    /// Models known at build time, in a fixed order.
    fn static_models(&self) -> Vec<ModelDescriptor>;

    /// Models discovered from the provider at runtime, excluding static ones.
    ///
    /// Providers without a listing endpoint discover nothing.
    async fn dynamic_models(
        &self,
        _api_keys: Option<&HashMap<String, String>>,
        _settings: Option<&ProviderSettings>,
        _server_env: Option<&HashMap<String, String>>,
    ) -> Result<Vec<ModelDescriptor>, LlmError> {
        Ok(Vec::new())
    }

    /// Build a handle for `options.model`. No request is sent.
    fn model_instance(&self, options: ModelInstanceOptions<'_>)
    -> Result<ChatModelHandle, LlmError>;

    /// Static catalog followed by dynamically discovered models.
    async fn all_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: Option<&HashMap<String, String>>,
    ) -> Result<Vec<ModelDescriptor>, LlmError> {
        let mut models = self.static_models();
        models.extend(self.dynamic_models(api_keys, settings, server_env).await?);
        Ok(models)
    }

    /// Providers are enabled unless their settings say otherwise.
    fn is_enabled(&self, settings: Option<&ProviderSettings>) -> bool {
        settings.and_then(|s| s.enabled).unwrap_or(true)
    }
}
