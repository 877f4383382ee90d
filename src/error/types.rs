//! Core error types.

use thiserror::Error;

/// Errors produced by the provider adapter and the model handles it builds.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    /// No API key could be resolved from any configured source.
    #[error("Missing API key configuration for {provider} provider")]
    MissingCredential { provider: String },

    /// The model directory answered with a non-success status.
    #[error("HTTP {status}: {status_text}")]
    UpstreamHttp { status: u16, status_text: String },

    /// The provider rejected a generation request.
    #[error("API error {code}: {message}")]
    ApiError {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Transport level failure (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The response body did not have the expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Invalid client configuration (header values, proxy, client build).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Coarse classification used by callers deciding how to report an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Client,
    Server,
    Network,
    Parsing,
    Configuration,
}

impl LlmError {
    pub fn missing_credential(provider: impl Into<String>) -> Self {
        Self::MissingCredential {
            provider: provider.into(),
        }
    }

    pub fn upstream_http(status: u16, status_text: impl Into<String>) -> Self {
        Self::UpstreamHttp {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UpstreamHttp { status, .. } => Some(*status),
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential { .. } => ErrorCategory::Authentication,
            Self::UpstreamHttp { .. } | Self::ApiError { .. } => {
                match self.status_code().unwrap_or_default() {
                    401 | 403 => ErrorCategory::Authentication,
                    429 => ErrorCategory::RateLimit,
                    500..=599 => ErrorCategory::Server,
                    _ => ErrorCategory::Client,
                }
            }
            Self::HttpError(_) => ErrorCategory::Network,
            Self::ParseError(_) | Self::JsonError(_) => ErrorCategory::Parsing,
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
        }
    }

    /// Whether a caller could reasonably try again.
    ///
    /// Informational only: nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Server | ErrorCategory::Network
        )
    }

    pub fn is_auth_error(&self) -> bool {
        self.category() == ErrorCategory::Authentication
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_auth_and_not_retryable() {
        let err = LlmError::missing_credential("Cerebras");
        assert!(err.is_auth_error());
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "Missing API key configuration for Cerebras provider"
        );
    }

    #[test]
    fn upstream_status_drives_category() {
        let err = LlmError::upstream_http(500, "Internal Server Error");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");

        assert_eq!(
            LlmError::api_error(429, "slow down").category(),
            ErrorCategory::RateLimit
        );
        assert_eq!(
            LlmError::api_error(404, "no such model").category(),
            ErrorCategory::Client
        );
    }
}
