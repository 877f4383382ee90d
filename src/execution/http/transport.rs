//! HTTP transport abstraction.
//!
//! Every outbound request goes through an injectable transport that sees the
//! final URL, headers and body and returns the raw response. The default
//! implementation is backed by `reqwest`; tests substitute their own.

use crate::error::LlmError;
use crate::types::HttpConfig;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};

/// Context describing which provider issued a request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub provider_id: String,
    pub url: String,
}

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status code (e.g. `Internal Server Error`).
    pub fn status_text(&self) -> String {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string()
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, LlmError> {
        serde_json::from_slice(&self.body)
            .map_err(|e| LlmError::ParseError(format!("Invalid response body: {e}")))
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Custom HTTP transport for JSON requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, LlmError> {
        Ok(Self::new(build_http_client(config)?))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_json(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, LlmError> {
        tracing::debug!(
            provider = %request.ctx.provider_id,
            method = %request.method,
            url = %request.url,
            "sending request"
        );

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(
            provider = %request.ctx.provider_id,
            url = %request.url,
            status,
            "response received"
        );

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

/// Build a `reqwest::Client` from `HttpConfig`.
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client, LlmError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }
    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| LlmError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if !config.headers.is_empty() {
        let headers = super::headers::HttpHeaderBuilder::new()
            .with_custom_headers(&config.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| LlmError::ConfigurationError(format!("Failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_uses_canonical_reason() {
        let response = HttpTransportResponse {
            status: 500,
            headers: HeaderMap::new(),
            body: Vec::new(),
        };
        assert!(!response.is_success());
        assert_eq!(response.status_text(), "Internal Server Error");
    }

    #[test]
    fn invalid_default_header_is_rejected() {
        let config = HttpConfig::default().header("bad header", "x");
        let err = build_http_client(&config).unwrap_err();
        assert!(matches!(err, LlmError::ConfigurationError(_)));
    }
}
