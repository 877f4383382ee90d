//! Error Handling Module
//!
//! This module provides error handling for the provider adapter, including:
//! - Core error types (`LlmError`, `ErrorCategory`)
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use siumai_provider_cerebras::error::{ErrorCategory, LlmError};
//!
//! let error = LlmError::missing_credential("Cerebras");
//! assert_eq!(error.category(), ErrorCategory::Authentication);
//! assert!(!error.is_retryable());
//! ```

// Module declarations
mod conversions;
pub mod types;

// Re-exports for public API
pub use types::*;
