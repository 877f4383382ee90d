//! Cerebras Model Listing Example
//!
//! Prints the static catalog, then any extra models the Cerebras API reports.
//!
//! ## Setup
//!
//! ```bash
//! export CEREBRAS_API_KEY=your-api-key-here
//! ```
//!
//! ## Run
//!
//! ```bash
//! RUST_LOG=siumai_provider_cerebras=debug cargo run --example cerebras_models
//! ```

use siumai_provider_cerebras::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let provider = CerebrasProvider::new();

    println!("Static models for {}:", provider.name());
    for model in provider.static_models() {
        println!("  {:<36} {} ({} tokens)", model.name, model.label, model.max_token_allowed);
    }

    // The key is read from CEREBRAS_API_KEY in the process environment.
    let discovered = provider.dynamic_models(None, None, None).await?;
    if discovered.is_empty() {
        println!("\nNo additional models discovered.");
    } else {
        println!("\nDiscovered models:");
        for model in discovered {
            println!("  {}", model.name);
        }
    }

    Ok(())
}
