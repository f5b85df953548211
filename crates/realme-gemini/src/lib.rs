// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini adapter for Realme flows.
//!
//! Implements [`GenerationAdapter`] on top of the Gemini `generateContent`
//! endpoint with JSON-schema-constrained output.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use realme_config::model::GeminiConfig;
use realme_core::{
    AdapterType, GenerationAdapter, GenerationRequest, GenerationResponse, HealthStatus,
    PluginAdapter, RealmeError,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::GeminiClient;
use crate::types::GenerateContentRequest;

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini-backed structured generation.
///
/// API key resolution order: config -> `GEMINI_API_KEY` env var -> error.
#[derive(Debug, Clone)]
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    pub fn new(config: &GeminiConfig) -> Result<Self, RealmeError> {
        let api_key = resolve_api_key(&config.api_key)?;
        let client = GeminiClient::new(
            &api_key,
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        info!(model = %config.model, "Gemini generator initialized");
        Ok(Self { client })
    }

    pub fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PluginAdapter for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Generation
    }

    async fn health_check(&self) -> Result<HealthStatus, RealmeError> {
        // No probe call: it would spend quota.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), RealmeError> {
        debug!("Gemini generator shutting down");
        Ok(())
    }
}

#[async_trait]
impl GenerationAdapter for GeminiGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, RealmeError> {
        let api_request = GenerateContentRequest::structured(
            request.prompt,
            response_schema(request.output_schema),
        );
        let response = self.client.generate_content(&api_request).await?;

        let Some(text) = response.text() else {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone());
            warn!(flow = %request.flow, ?finish_reason, "Gemini returned no text");
            return Ok(GenerationResponse {
                output: None,
                model: response.model_version,
            });
        };

        let output: Value = serde_json::from_str(&text).map_err(|e| RealmeError::Generation {
            message: format!("reply is not valid JSON: {e}"),
            source: Some(Box::new(e)),
        })?;

        Ok(GenerationResponse {
            output: Some(output),
            model: response
                .model_version
                .or_else(|| Some(self.client.model().to_string())),
        })
    }
}

/// Strips the `$schema` meta keyword, which the API does not accept.
fn response_schema(mut schema: Value) -> Value {
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}

/// Resolves the API key from config, falling back to `GEMINI_API_KEY`.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, RealmeError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            RealmeError::Config(format!(
                "Gemini API key not found. Set gemini.api_key in config or the {API_KEY_ENV} environment variable."
            ))
        })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serial_test::serial;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn generator(server: &MockServer) -> GeminiGenerator {
        let config = GeminiConfig {
            api_key: Some("test-key".into()),
            base_url: server.uri(),
            ..GeminiConfig::default()
        };
        GeminiGenerator::new(&config).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            flow: "vetStory".into(),
            prompt: "Vet this story".into(),
            output_schema: json!({
                "$schema": "https://json-schema.org/draft/2020-12/schema",
                "type": "object",
                "properties": {"approved": {"type": "boolean"}},
                "required": ["approved"]
            }),
        }
    }

    #[tokio::test]
    async fn parses_structured_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "{\"approved\": true}"}]}}]
            })))
            .mount(&server)
            .await;

        let resp = generator(&server).generate(request()).await.unwrap();
        assert_eq!(resp.output, Some(json!({"approved": true})));
        assert_eq!(resp.model.as_deref(), Some("gemini-2.0-flash"));
    }

    #[tokio::test]
    async fn schema_is_sent_without_meta_keyword() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "generationConfig": {"responseJsonSchema": {"required": ["approved"]}}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        generator(&server).generate(request()).await.unwrap();

        let received = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&received[0].body).unwrap();
        assert!(body["generationConfig"]["responseJsonSchema"].get("$schema").is_none());
    }

    #[tokio::test]
    async fn blocked_reply_is_empty_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"finishReason": "SAFETY"}]
            })))
            .mount(&server)
            .await;

        let resp = generator(&server).generate(request()).await.unwrap();
        assert!(resp.output.is_none());
    }

    #[tokio::test]
    async fn non_json_text_is_a_generation_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "Sure! Here you go"}]}}]
            })))
            .mount(&server)
            .await;

        let err = generator(&server).generate(request()).await.unwrap_err();
        assert!(matches!(err, RealmeError::Generation { .. }));
    }

    #[test]
    fn api_key_from_config_wins() {
        assert_eq!(resolve_api_key(&Some("cfg-key".into())).unwrap(), "cfg-key");
    }

    #[test]
    #[serial]
    fn api_key_falls_back_to_env() {
        // SAFETY: serialized with the other env-mutating test.
        unsafe { std::env::set_var(API_KEY_ENV, "env-key") };
        let key = resolve_api_key(&Some(String::new()));
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert_eq!(key.unwrap(), "env-key");
    }

    #[test]
    #[serial]
    fn missing_api_key_is_config_error() {
        // SAFETY: serialized with the other env-mutating test.
        unsafe { std::env::remove_var(API_KEY_ENV) };
        let err = resolve_api_key(&None).unwrap_err();
        assert!(matches!(err, RealmeError::Config(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
