//! Model client traits

use crate::auth::Credentials;
use crate::providers::openai_compatible::ChatModelHandle;
use std::sync::Arc;

/// A client bound to one provider's resolved credentials.
pub trait ModelClient: Send + Sync {
    /// Bind a model id. The id is not validated against any catalog.
    fn language_model(&self, model: &str) -> ChatModelHandle;
}

/// Builds a client bound to resolved credentials.
///
/// The client is cheap to create and performs no I/O; requests happen when a
/// model handle obtained from it is invoked.
pub trait ModelClientFactory: Send + Sync {
    fn build(&self, provider_id: &str, credentials: Credentials) -> Arc<dyn ModelClient>;

    /// Shorthand for `build(..).language_model(model)`.
    fn language_model(
        &self,
        provider_id: &str,
        credentials: Credentials,
        model: &str,
    ) -> ChatModelHandle {
        self.build(provider_id, credentials).language_model(model)
    }
}
