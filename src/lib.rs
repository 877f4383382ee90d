//! siumai-provider-cerebras
//!
//! Cerebras provider adapter built on the OpenAI-like protocol: a static model
//! catalog, optional discovery through `GET /models`, and construction of
//! callable model handles from layered credentials.
#![deny(unsafe_code)]

pub mod auth;
pub mod error;
pub mod execution;
pub mod providers;
pub mod traits;
pub mod types;

pub use error::LlmError;

/// Commonly used items.
pub mod prelude {
    pub use crate::auth::{
        CredentialResolver, CredentialSources, Credentials, LayeredCredentialResolver,
    };
    pub use crate::error::LlmError;
    pub use crate::providers::cerebras::{CerebrasProvider, CerebrasProviderBuilder, models};
    pub use crate::providers::openai_compatible::ChatModelHandle;
    pub use crate::traits::{
        ChatCapability, ModelClient, ModelClientFactory, ModelDirectory, ModelInstanceOptions,
        Provider,
    };
    pub use crate::types::{ChatMessage, HttpConfig, ModelDescriptor, ProviderSettings};
}
