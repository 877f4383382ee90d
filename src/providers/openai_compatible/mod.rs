//! OpenAI-compatible building blocks
//!
//! Shared by providers that speak the OpenAI wire protocol:
//! - `models.rs` - `/models` directory
//! - `client.rs` - client factory and chat model handle

mod client;
mod models;
mod types;

pub use client::{ChatModelHandle, OpenAiCompatibleClient, OpenAiCompatibleFactory};
pub use models::HttpModelDirectory;
