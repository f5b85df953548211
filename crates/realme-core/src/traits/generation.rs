// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structured generation capability (Gemini, mocks, etc.).

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RealmeError;
use crate::traits::adapter::PluginAdapter;

/// A rendered prompt plus the JSON schema the reply must conform to.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Name of the flow issuing the request, for logging.
    pub flow: String,
    /// Fully rendered prompt text.
    pub prompt: String,
    /// JSON schema describing the expected structured output.
    pub output_schema: Value,
}

/// The reply of a structured generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerationResponse {
    /// Structured output. `None` means the call succeeded but produced nothing,
    /// which is distinct from an error.
    pub output: Option<Value>,
    /// Model that served the request, when the backend reports it.
    pub model: Option<String>,
}

impl GenerationResponse {
    pub fn with_output(output: Value) -> Self {
        Self {
            output: Some(output),
            model: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Adapter for schema-constrained text generation.
///
/// Implementations perform exactly one backend call per `generate`; retrying
/// is the caller's concern.
#[async_trait]
pub trait GenerationAdapter: PluginAdapter {
    /// Submits a prompt and output schema, returning the structured reply.
    async fn generate(&self, request: GenerationRequest)
    -> Result<GenerationResponse, RealmeError>;
}
