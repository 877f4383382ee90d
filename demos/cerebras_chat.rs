//! Cerebras Chat Example
//!
//! Builds a model handle from layered credentials and sends one prompt.
//!
//! ## Run
//!
//! ```bash
//! export CEREBRAS_API_KEY=your-api-key-here
//! cargo run --example cerebras_chat -- "Why is fast inference useful?"
//! ```

use siumai_provider_cerebras::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Say hello in one sentence.".to_string());

    // Bounded latency is opt-in.
    let provider = CerebrasProvider::builder()
        .with_http_config(HttpConfig::default().with_timeout(Duration::from_secs(60)))
        .build()?;

    let server_env: HashMap<String, String> = std::env::vars()
        .filter(|(k, _)| k.starts_with("CEREBRAS_"))
        .collect();

    let model = provider
        .model_instance(ModelInstanceOptions::new(models::LLAMA_3_3_70B, &server_env))?
        .with_max_tokens(256);

    let response = model.chat(vec![ChatMessage::user(prompt)]).await?;
    println!("{}", response.content);
    if let Some(usage) = response.usage {
        println!("\n[{} prompt + {} completion tokens]", usage.prompt_tokens, usage.completion_tokens);
    }

    Ok(())
}
