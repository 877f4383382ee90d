//! `GET {base_url}/models` directory for OpenAI-compatible providers.

use crate::auth::Credentials;
use crate::error::LlmError;
use crate::execution::http::{
    HttpHeaderBuilder, HttpRequestContext, HttpTransport, HttpTransportRequest,
};
use crate::traits::ModelDirectory;
use crate::types::{DEFAULT_USER_AGENT, ModelListResponse, RemoteModel};
use async_trait::async_trait;
use reqwest::Method;
use secrecy::ExposeSecret;
use std::sync::Arc;

/// Lists models through an OpenAI-style `/models` endpoint.
#[derive(Clone)]
pub struct HttpModelDirectory {
    transport: Arc<dyn HttpTransport>,
    user_agent: String,
}

impl HttpModelDirectory {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl std::fmt::Debug for HttpModelDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpModelDirectory")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ModelDirectory for HttpModelDirectory {
    async fn list_models(
        &self,
        provider_id: &str,
        credentials: &Credentials,
    ) -> Result<Vec<RemoteModel>, LlmError> {
        let url = format!("{}/models", credentials.base_url.trim_end_matches('/'));
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth(credentials.api_key().expose_secret())?
            .with_user_agent(&self.user_agent)?
            .build();

        let response = self
            .transport
            .execute_json(HttpTransportRequest {
                ctx: HttpRequestContext {
                    provider_id: provider_id.to_string(),
                    url: url.clone(),
                },
                method: Method::GET,
                url,
                headers,
                body: None,
            })
            .await?;

        if !response.is_success() {
            return Err(LlmError::upstream_http(
                response.status,
                response.status_text(),
            ));
        }

        let listing: ModelListResponse = response.json()?;
        Ok(listing.into_models())
    }
}
