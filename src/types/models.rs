//! Model descriptors
//!
//! Provider-agnostic description of a model a provider can serve. Static
//! catalogs and dynamically discovered models share this shape.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A model known to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Model identifier sent to the provider (unique per provider)
    pub name: String,
    /// Human readable label
    pub label: String,
    /// Name of the provider serving this model
    pub provider: String,
    /// Context-length ceiling for this model
    pub max_token_allowed: u32,
}

impl ModelDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        provider: impl Into<String>,
        max_token_allowed: u32,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            provider: provider.into(),
            max_token_allowed,
        }
    }
}

/// One entry of an OpenAI-style `GET /models` listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteModel {
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
}

impl RemoteModel {
    /// Read one listing entry field by field.
    ///
    /// Returns `None` when the entry has no string `id`. Other fields with an
    /// unexpected type are treated as absent.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let id = entry.get("id")?.as_str()?;
        let text = |field: &str| entry.get(field).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            id: id.to_string(),
            object: text("object").unwrap_or_default(),
            owned_by: text("owned_by"),
            created: entry.get("created").and_then(Value::as_u64),
        })
    }
}

/// Body of an OpenAI-style `GET /models` response.
///
/// Entries stay raw so one malformed entry cannot reject the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<Value>,
}

impl ModelListResponse {
    /// Entries that carry a usable `id`, in listing order.
    pub fn into_models(self) -> Vec<RemoteModel> {
        self.data.iter().filter_map(RemoteModel::from_entry).collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}
