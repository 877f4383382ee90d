//! Capability traits shared by providers.

pub mod chat;
pub mod model_client;
pub mod model_listing;
pub mod provider;

pub use chat::ChatCapability;
pub use model_client::{ModelClient, ModelClientFactory};
pub use model_listing::ModelDirectory;
pub use provider::{ModelInstanceOptions, Provider};
