//! Shared types.

pub mod chat;
pub mod http;
pub mod models;
pub mod settings;

pub use chat::{ChatMessage, ChatResponse, FinishReason, MessageRole, Usage};
pub use http::{DEFAULT_USER_AGENT, HttpConfig};
pub use models::{ModelDescriptor, ModelListResponse, RemoteModel};
pub use settings::{ProviderConfig, ProviderSettings};
