//! Model listing capability trait

use crate::auth::Credentials;
use crate::error::LlmError;
use crate::types::RemoteModel;
use async_trait::async_trait;

/// A remote directory of the models a provider currently serves.
#[async_trait]
pub trait ModelDirectory: Send + Sync {
    /// Fetch the raw model listing. Non-success responses are errors.
    async fn list_models(
        &self,
        provider_id: &str,
        credentials: &Credentials,
    ) -> Result<Vec<RemoteModel>, LlmError>;
}
