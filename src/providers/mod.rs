//! Provider implementations.

pub mod cerebras;
pub mod openai_compatible;
