// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Flow` trait: one named, schema-typed prompt.

use schemars::JsonSchema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A single AI-backed operation: a prompt template plus request/response schemas.
pub trait Flow: Send + Sync {
    /// Request record, validated against its schema before anything is sent.
    type Input: Serialize + JsonSchema + Send + Sync;
    /// Response record the generated output must conform to exactly.
    type Output: DeserializeOwned + JsonSchema + Send;

    /// Stable flow name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Renders the prompt for a validated request.
    fn render_prompt(&self, input: &Self::Input) -> String;

    /// Returns a response without calling the generation capability, when the
    /// request makes generation pointless.
    fn short_circuit(&self, _input: &Self::Input) -> Option<Self::Output> {
        None
    }
}
