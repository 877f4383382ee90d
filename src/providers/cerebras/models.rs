//! `Cerebras` model catalog
//!
//! Model ids known at build time. Cerebras does not report context length in
//! its listing endpoint, so every model shares one ceiling.

use crate::types::ModelDescriptor;

/// Provider display name
pub const PROVIDER_NAME: &str = "Cerebras";

/// Context-length ceiling applied to every Cerebras model
pub const DEFAULT_MAX_TOKENS: u32 = 32000;

pub const LLAMA_4_SCOUT_17B_16E_INSTRUCT: &str = "llama-4-scout-17b-16e-instruct";
pub const LLAMA_3_1_8B: &str = "llama3.1-8b";
pub const LLAMA_3_3_70B: &str = "llama-3.3-70b";
pub const QWEN_3_32B: &str = "qwen-3-32b";
pub const DEEPSEEK_R1_DISTILL_LLAMA_70B: &str = "deepseek-r1-distill-llama-70b";

/// Static catalog as `(id, label)` pairs, in display order
pub const CATALOG: &[(&str, &str)] = &[
    (LLAMA_4_SCOUT_17B_16E_INSTRUCT, "Llama 4 Scout (17B)"),
    (LLAMA_3_1_8B, "Llama 3.1 8B"),
    (LLAMA_3_3_70B, "Llama 3.3 70B"),
    (QWEN_3_32B, "Qwen 3 32B"),
    (DEEPSEEK_R1_DISTILL_LLAMA_70B, "DeepSeek R1 Distill Llama 70B"),
];

/// All static model ids
pub fn all_models() -> Vec<String> {
    CATALOG.iter().map(|(id, _)| id.to_string()).collect()
}

pub fn is_static_model(id: &str) -> bool {
    CATALOG.iter().any(|(known, _)| *known == id)
}

pub(crate) fn static_descriptors() -> Vec<ModelDescriptor> {
    CATALOG
        .iter()
        .map(|(id, label)| ModelDescriptor::new(*id, *label, PROVIDER_NAME, DEFAULT_MAX_TOKENS))
        .collect()
}

/// Descriptor for a model discovered at runtime; its label is its id.
pub(crate) fn discovered_descriptor(id: &str) -> ModelDescriptor {
    ModelDescriptor::new(id, id, PROVIDER_NAME, DEFAULT_MAX_TOKENS)
}
