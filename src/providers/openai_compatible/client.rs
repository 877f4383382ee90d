//! OpenAI-compatible client and chat model handle.
//!
//! `OpenAiCompatibleFactory` → `OpenAiCompatibleClient` (bound to credentials)
//! → `ChatModelHandle` (bound to one model id). Only invoking the handle
//! touches the network.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope};
use crate::auth::Credentials;
use crate::error::LlmError;
use crate::execution::http::{
    HttpHeaderBuilder, HttpRequestContext, HttpTransport, HttpTransportRequest, ReqwestTransport,
};
use crate::traits::{ChatCapability, ModelClient, ModelClientFactory};
use crate::types::{ChatMessage, ChatResponse, DEFAULT_USER_AGENT, FinishReason, HttpConfig};
use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default factory producing OpenAI-compatible clients over a shared transport.
#[derive(Clone)]
pub struct OpenAiCompatibleFactory {
    transport: Arc<dyn HttpTransport>,
    http_config: HttpConfig,
}

impl OpenAiCompatibleFactory {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            http_config: HttpConfig::default(),
        }
    }

    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = config;
        self
    }
}

impl Default for OpenAiCompatibleFactory {
    fn default() -> Self {
        Self::new(Arc::new(ReqwestTransport::default()))
    }
}

impl std::fmt::Debug for OpenAiCompatibleFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleFactory")
            .field("http_config", &self.http_config)
            .finish_non_exhaustive()
    }
}

impl ModelClientFactory for OpenAiCompatibleFactory {
    fn build(&self, provider_id: &str, credentials: Credentials) -> Arc<dyn ModelClient> {
        Arc::new(OpenAiCompatibleClient {
            provider_id: provider_id.to_string(),
            credentials,
            transport: self.transport.clone(),
            http_config: self.http_config.clone(),
        })
    }
}

/// Client bound to one provider's base URL and API key.
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    provider_id: String,
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
    http_config: HttpConfig,
}

impl std::fmt::Debug for OpenAiCompatibleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatibleClient")
            .field("provider_id", &self.provider_id)
            .field("base_url", &self.credentials.base_url)
            .finish_non_exhaustive()
    }
}

impl ModelClient for OpenAiCompatibleClient {
    fn language_model(&self, model: &str) -> ChatModelHandle {
        ChatModelHandle {
            provider_id: self.provider_id.clone(),
            model_id: model.to_string(),
            credentials: self.credentials.clone(),
            transport: self.transport.clone(),
            http_config: self.http_config.clone(),
            max_tokens: None,
            temperature: None,
        }
    }
}

/// A callable reference to one remote model.
#[derive(Clone)]
pub struct ChatModelHandle {
    provider_id: String,
    model_id: String,
    credentials: Credentials,
    transport: Arc<dyn HttpTransport>,
    http_config: HttpConfig,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

impl ChatModelHandle {
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn base_url(&self) -> &str {
        &self.credentials.base_url
    }

    pub fn api_key(&self) -> &SecretString {
        self.credentials.api_key()
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.credentials.base_url.trim_end_matches('/')
        )
    }
}

impl std::fmt::Debug for ChatModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatModelHandle")
            .field("provider_id", &self.provider_id)
            .field("model_id", &self.model_id)
            .field("base_url", &self.credentials.base_url)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatCapability for ChatModelHandle {
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, LlmError> {
        let body = serde_json::to_value(ChatCompletionRequest {
            model: &self.model_id,
            messages: &messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            stream: false,
        })?;

        let user_agent = self
            .http_config
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT);
        let headers = HttpHeaderBuilder::new()
            .with_bearer_auth(self.credentials.api_key().expose_secret())?
            .with_json_content_type()
            .with_user_agent(user_agent)?
            .build();

        let url = self.chat_url();
        let response = self
            .transport
            .execute_json(HttpTransportRequest {
                ctx: HttpRequestContext {
                    provider_id: self.provider_id.clone(),
                    url: url.clone(),
                },
                method: Method::POST,
                url,
                headers,
                body: Some(body),
            })
            .await?;

        if !response.is_success() {
            let text = response.text();
            let details: Option<serde_json::Value> = serde_json::from_str(&text).ok();
            let message = serde_json::from_str::<ErrorEnvelope>(&text)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| {
                    if text.is_empty() {
                        response.status_text()
                    } else {
                        text.clone()
                    }
                });
            return Err(LlmError::ApiError {
                code: response.status,
                message: format!("{} chat API error: {}", self.provider_id, message),
                details,
            });
        }

        let completion: ChatCompletionResponse = response.json()?;
        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            LlmError::ParseError("Chat completion response contained no choices".to_string())
        })?;

        Ok(ChatResponse {
            id: completion.id,
            model: completion.model,
            content: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from),
            usage: completion.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::http::HttpTransportResponse;
    use reqwest::header::{AUTHORIZATION, HeaderMap};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<HttpTransportRequest>>,
        status: u16,
        body: serde_json::Value,
    }

    #[async_trait]
    impl HttpTransport for RecordingTransport {
        async fn execute_json(
            &self,
            request: HttpTransportRequest,
        ) -> Result<HttpTransportResponse, LlmError> {
            self.requests.lock().unwrap().push(request);
            Ok(HttpTransportResponse {
                status: self.status,
                headers: HeaderMap::new(),
                body: serde_json::to_vec(&self.body).unwrap(),
            })
        }
    }

    fn handle_over(transport: Arc<RecordingTransport>) -> ChatModelHandle {
        OpenAiCompatibleFactory::new(transport).language_model(
            "test",
            Credentials::new("https://api.example.com/v1/", "test-key"),
            "llama-3.3-70b",
        )
    }

    #[tokio::test]
    async fn chat_posts_openai_body_and_parses_reply() {
        let transport = Arc::new(RecordingTransport {
            status: 200,
            body: serde_json::json!({
                "id": "chatcmpl-1",
                "model": "llama-3.3-70b",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "Hi!"}, "finish_reason": "stop"}
                ],
                "usage": {"prompt_tokens": 3, "completion_tokens": 2, "total_tokens": 5}
            }),
            ..Default::default()
        });
        let handle = handle_over(transport.clone()).with_max_tokens(64);

        let response = handle
            .chat(vec![ChatMessage::system("be brief"), ChatMessage::user("hello")])
            .await
            .unwrap();
        assert_eq!(response.content, "Hi!");
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.unwrap().total_tokens, 5);

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://api.example.com/v1/chat/completions");
        assert_eq!(
            request.headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer test-key"
        );
        let body = request.body.as_ref().unwrap();
        assert_eq!(body["model"], "llama-3.3-70b");
        assert_eq!(body["max_tokens"], 64);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "hello");
        assert!(body.get("temperature").is_none());
    }

    #[tokio::test]
    async fn chat_maps_error_envelope() {
        let transport = Arc::new(RecordingTransport {
            status: 404,
            body: serde_json::json!({
                "error": {"message": "Model not found", "type": "invalid_request_error"}
            }),
            ..Default::default()
        });

        let err = handle_over(transport)
            .chat(vec![ChatMessage::user("hello")])
            .await
            .unwrap_err();
        match err {
            LlmError::ApiError {
                code,
                message,
                details,
            } => {
                assert_eq!(code, 404);
                assert!(message.contains("Model not found"));
                assert!(details.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_choices_is_a_parse_error() {
        let transport = Arc::new(RecordingTransport {
            status: 200,
            body: serde_json::json!({"id": "x", "choices": []}),
            ..Default::default()
        });

        let err = handle_over(transport)
            .chat(vec![ChatMessage::user("hello")])
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }
}
