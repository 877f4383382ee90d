//! Cerebras Mock API Tests
//!
//! These tests verify the HTTP layer interaction with the Cerebras API using
//! wiremock and the default `reqwest` transport.

use serde::de::DeserializeOwned;
use siumai_provider_cerebras::prelude::*;
use siumai_provider_cerebras::types::FinishReason;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("cerebras")
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> T {
    let text = std::fs::read_to_string(path).expect("read fixture json");
    serde_json::from_str(&text).expect("parse fixture json")
}

fn provider() -> CerebrasProvider {
    CerebrasProvider::builder()
        .with_credential_resolver(Arc::new(LayeredCredentialResolver::hermetic()))
        .build()
        .expect("build provider")
}

/// Settings pointing the provider at the mock server.
fn settings_for(server: &MockServer) -> ProviderSettings {
    ProviderSettings::new().with_base_url(format!("{}/v1/", server.uri()))
}

fn server_env() -> HashMap<String, String> {
    HashMap::from([("CEREBRAS_API_KEY".to_string(), "test-api-key".to_string())])
}

#[tokio::test]
async fn test_cerebras_dynamic_models_from_models_endpoint() {
    let server = MockServer::start().await;
    let body: serde_json::Value = read_json(fixtures_dir().join("models").join("list.json"));

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(header_regex("user-agent", "^siumai-provider-cerebras/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let env = server_env();
    let models = provider()
        .dynamic_models(None, Some(&settings), Some(&env))
        .await
        .expect("dynamic models");

    assert_eq!(models.len(), 1);
    assert_eq!(models[0].name, "new-model-x");
    assert_eq!(models[0].label, "new-model-x");
    assert_eq!(models[0].max_token_allowed, 32000);
}

#[tokio::test]
async fn test_cerebras_explicit_key_takes_precedence() {
    let server = MockServer::start().await;
    let body: serde_json::Value = read_json(fixtures_dir().join("models").join("list.json"));

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(header("authorization", "Bearer explicit-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let env = server_env();
    let api_keys = HashMap::from([("Cerebras".to_string(), "explicit-key".to_string())]);
    let models = provider()
        .dynamic_models(Some(&api_keys), Some(&settings), Some(&env))
        .await
        .expect("dynamic models");

    assert_eq!(models.len(), 1);
}

#[tokio::test]
async fn test_cerebras_server_error_yields_no_extra_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .expect(2)
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let env = server_env();
    let provider = provider();
    let models = provider
        .dynamic_models(None, Some(&settings), Some(&env))
        .await
        .expect("discovery failure is not an error");
    assert!(models.is_empty());

    let all = provider
        .all_models(None, Some(&settings), Some(&env))
        .await
        .expect("static catalog survives");
    assert_eq!(all, provider.static_models());
}

#[tokio::test]
async fn test_cerebras_unreachable_directory_yields_no_extra_models() {
    // Nothing listens on the discard port.
    let settings = ProviderSettings::new().with_base_url("http://127.0.0.1:9/v1");
    let env = server_env();

    let models = provider()
        .dynamic_models(None, Some(&settings), Some(&env))
        .await
        .expect("discovery failure is not an error");
    assert!(models.is_empty());
}

#[tokio::test]
async fn test_cerebras_missing_key_does_not_hit_network() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let settings = settings_for(&server);
    let err = provider()
        .dynamic_models(None, Some(&settings), Some(&HashMap::new()))
        .await
        .expect_err("missing key must surface");
    assert!(matches!(err, LlmError::MissingCredential { .. }));
}

#[tokio::test]
async fn test_cerebras_model_handle_chat_round_trip() {
    let server = MockServer::start().await;
    let body: serde_json::Value = read_json(fixtures_dir().join("chat").join("completion.json"));

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-api-key"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "model": "llama-3.3-70b",
            "stream": false,
            "messages": [{"role": "user", "content": "Why does speed matter?"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let env = server_env();
    let settings = HashMap::from([("Cerebras".to_string(), settings_for(&server))]);
    let handle = provider()
        .model_instance(
            ModelInstanceOptions::new(models::LLAMA_3_3_70B, &env).with_provider_settings(&settings),
        )
        .expect("model handle");

    let response = handle
        .chat(vec![ChatMessage::user("Why does speed matter?")])
        .await
        .expect("chat ok");

    assert_eq!(
        response.content,
        "Fast inference keeps conversations interactive."
    );
    assert_eq!(response.finish_reason, Some(FinishReason::Stop));
    assert_eq!(response.model.as_deref(), Some("llama-3.3-70b"));
    assert_eq!(response.usage.map(|u| u.total_tokens), Some(21));
}

#[tokio::test]
async fn test_cerebras_model_handle_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Wrong API Key",
            "type": "invalid_request_error",
            "param": "api_key",
            "code": "wrong_api_key"
        })))
        .mount(&server)
        .await;

    let env = server_env();
    let settings = HashMap::from([("Cerebras".to_string(), settings_for(&server))]);
    let handle = provider()
        .model_instance(
            ModelInstanceOptions::new(models::LLAMA_3_1_8B, &env).with_provider_settings(&settings),
        )
        .expect("model handle");

    let err = handle
        .chat(vec![ChatMessage::user("hello")])
        .await
        .expect_err("401 must surface");
    assert_eq!(err.status_code(), Some(401));
    assert!(err.is_auth_error());
}
