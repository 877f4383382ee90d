//! `Cerebras` provider adapter.

use super::models::{self, PROVIDER_NAME};
use crate::auth::{CredentialResolver, CredentialSources, Credentials, LayeredCredentialResolver};
use crate::error::LlmError;
use crate::execution::http::{HttpTransport, ReqwestTransport};
use crate::providers::openai_compatible::{
    ChatModelHandle, HttpModelDirectory, OpenAiCompatibleFactory,
};
use crate::traits::{ModelClientFactory, ModelDirectory, ModelInstanceOptions, Provider};
use crate::types::{HttpConfig, ModelDescriptor, ProviderConfig, ProviderSettings};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

const CONFIG: ProviderConfig = ProviderConfig {
    base_url_key: None,
    api_token_key: "CEREBRAS_API_KEY",
    base_url: "https://api.cerebras.ai/v1",
};

const API_KEY_LINK: &str = "https://cloud.cerebras.ai/";

/// Adapter exposing Cerebras through the [`Provider`] contract.
#[derive(Clone)]
pub struct CerebrasProvider {
    resolver: Arc<dyn CredentialResolver>,
    directory: Arc<dyn ModelDirectory>,
    factory: Arc<dyn ModelClientFactory>,
}

impl CerebrasProvider {
    /// Provider with the default resolver and a shared `reqwest` transport.
    pub fn new() -> Self {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::default());
        Self {
            resolver: Arc::new(LayeredCredentialResolver::new()),
            directory: Arc::new(HttpModelDirectory::new(transport.clone())),
            factory: Arc::new(OpenAiCompatibleFactory::new(transport)),
        }
    }

    pub fn builder() -> CerebrasProviderBuilder {
        CerebrasProviderBuilder::default()
    }

    fn resolve(&self, sources: &CredentialSources<'_>) -> Result<Credentials, LlmError> {
        self.resolver
            .resolve(sources, &CONFIG, PROVIDER_NAME)
            .require(PROVIDER_NAME)
    }
}

impl Default for CerebrasProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CerebrasProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CerebrasProvider")
            .field("name", &PROVIDER_NAME)
            .field("base_url", &CONFIG.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for CerebrasProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn api_key_link(&self) -> &str {
        API_KEY_LINK
    }

    fn config(&self) -> &ProviderConfig {
        &CONFIG
    }

    fn static_models(&self) -> Vec<ModelDescriptor> {
        models::static_descriptors()
    }

    async fn dynamic_models(
        &self,
        api_keys: Option<&HashMap<String, String>>,
        settings: Option<&ProviderSettings>,
        server_env: Option<&HashMap<String, String>>,
    ) -> Result<Vec<ModelDescriptor>, LlmError> {
        let credentials = self.resolve(&CredentialSources {
            api_keys,
            provider_settings: settings,
            server_env,
        })?;

        match self.directory.list_models(PROVIDER_NAME, &credentials).await {
            Ok(listing) => Ok(listing
                .into_iter()
                .filter(|m| m.object == "model" && !models::is_static_model(&m.id))
                .map(|m| models::discovered_descriptor(&m.id))
                .collect()),
            Err(e) => {
                tracing::warn!(
                    provider = PROVIDER_NAME,
                    error = %e,
                    "Failed to fetch dynamic models for {PROVIDER_NAME}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn model_instance(
        &self,
        options: ModelInstanceOptions<'_>,
    ) -> Result<ChatModelHandle, LlmError> {
        let credentials = self.resolve(&CredentialSources {
            api_keys: options.api_keys,
            provider_settings: options
                .provider_settings
                .and_then(|all| all.get(PROVIDER_NAME)),
            server_env: Some(options.server_env),
        })?;

        Ok(self
            .factory
            .language_model(PROVIDER_NAME, credentials, options.model))
    }
}

/// Builder for swapping the collaborators of a [`CerebrasProvider`].
#[derive(Default)]
pub struct CerebrasProviderBuilder {
    resolver: Option<Arc<dyn CredentialResolver>>,
    directory: Option<Arc<dyn ModelDirectory>>,
    factory: Option<Arc<dyn ModelClientFactory>>,
    transport: Option<Arc<dyn HttpTransport>>,
    http_config: Option<HttpConfig>,
}

impl CerebrasProviderBuilder {
    pub fn with_credential_resolver(mut self, resolver: Arc<dyn CredentialResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_model_directory(mut self, directory: Arc<dyn ModelDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_client_factory(mut self, factory: Arc<dyn ModelClientFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    /// Transport used by the default directory and factory.
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// HTTP settings for the default `reqwest` transport (timeouts, proxy, headers).
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    pub fn build(self) -> Result<CerebrasProvider, LlmError> {
        let http_config = self.http_config.unwrap_or_default();
        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::from_config(&http_config)?),
        };
        let user_agent = http_config.user_agent_or_default().to_string();

        let resolver: Arc<dyn CredentialResolver> = match self.resolver {
            Some(resolver) => resolver,
            None => Arc::new(LayeredCredentialResolver::new()),
        };
        let directory: Arc<dyn ModelDirectory> = match self.directory {
            Some(directory) => directory,
            None => Arc::new(HttpModelDirectory::new(transport.clone()).with_user_agent(user_agent)),
        };
        let factory: Arc<dyn ModelClientFactory> = match self.factory {
            Some(factory) => factory,
            None => Arc::new(OpenAiCompatibleFactory::new(transport).with_http_config(http_config)),
        };

        Ok(CerebrasProvider {
            resolver,
            directory,
            factory,
        })
    }
}
