//! `Cerebras` Provider Module
//!
//! Thin adapter over the OpenAI-compatible building blocks.
//!
//! # Architecture
//! - `models.rs` - Built-in model catalog
//! - `provider.rs` - `Provider` implementation and builder
//!
//! # Example Usage
//! ```rust,no_run
//! use siumai_provider_cerebras::prelude::*;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CerebrasProvider::new();
//!     let server_env: HashMap<String, String> =
//!         [("CEREBRAS_API_KEY".to_string(), "your-api-key".to_string())].into();
//!
//!     let extra = provider.dynamic_models(None, None, Some(&server_env)).await?;
//!     println!("{} extra models", extra.len());
//!
//!     let model = provider.model_instance(ModelInstanceOptions::new(
//!         models::LLAMA_3_3_70B,
//!         &server_env,
//!     ))?;
//!     let reply = model.ask("Hello, world!".to_string()).await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

pub mod models;
mod provider;

pub use provider::{CerebrasProvider, CerebrasProviderBuilder};
