// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation adapter for deterministic testing.
//!
//! `MockGenerator` implements `GenerationAdapter` by replaying a script of
//! replies and recording every request it receives.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use realme_core::{
    AdapterType, GenerationAdapter, GenerationRequest, GenerationResponse, HealthStatus,
    PluginAdapter, RealmeError,
};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// One scripted outcome of a `generate` call.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Structured output, returned as-is (it may or may not match the schema).
    Output(Value),
    /// A successful call that carries no structured output.
    Empty,
    /// A transport-level failure with the given message.
    Fail(String),
}

#[derive(Debug, Default)]
struct Recorded {
    requests: Vec<GenerationRequest>,
    instants: Vec<Instant>,
}

/// A generation adapter that pops replies from a FIFO script.
///
/// When the script runs out every further call fails, so a test that
/// under-scripts shows up as a failed flow rather than a hang.
#[derive(Clone, Default)]
pub struct MockGenerator {
    script: Arc<Mutex<VecDeque<MockReply>>>,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with the given replies.
    pub fn with_replies(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(replies.into_iter().collect())),
            recorded: Arc::default(),
        }
    }

    /// Shorthand for a mock that succeeds once with `output`.
    pub fn returning(output: Value) -> Self {
        Self::with_replies([MockReply::Output(output)])
    }

    /// Shorthand for a mock whose every call fails.
    pub fn failing() -> Self {
        Self::new()
    }

    pub async fn push(&self, reply: MockReply) {
        self.script.lock().await.push_back(reply);
    }

    /// Number of `generate` calls received so far.
    pub async fn calls(&self) -> usize {
        self.recorded.lock().await.requests.len()
    }

    /// Every request received, oldest first.
    pub async fn requests(&self) -> Vec<GenerationRequest> {
        self.recorded.lock().await.requests.clone()
    }

    /// The prompt of the most recent request.
    pub async fn last_prompt(&self) -> Option<String> {
        self.recorded
            .lock()
            .await
            .requests
            .last()
            .map(|r| r.prompt.clone())
    }

    /// Tokio instants at which each call arrived.
    pub async fn call_instants(&self) -> Vec<Instant> {
        self.recorded.lock().await.instants.clone()
    }
}

#[async_trait]
impl PluginAdapter for MockGenerator {
    fn name(&self) -> &str {
        "mock-generator"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Generation
    }

    async fn health_check(&self) -> Result<HealthStatus, RealmeError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), RealmeError> {
        Ok(())
    }
}

#[async_trait]
impl GenerationAdapter for MockGenerator {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, RealmeError> {
        {
            let mut recorded = self.recorded.lock().await;
            recorded.requests.push(request);
            recorded.instants.push(Instant::now());
        }

        match self.script.lock().await.pop_front() {
            Some(MockReply::Output(value)) => Ok(GenerationResponse::with_output(value)),
            Some(MockReply::Empty) => Ok(GenerationResponse::empty()),
            Some(MockReply::Fail(message)) => Err(RealmeError::Generation {
                message,
                source: None,
            }),
            None => Err(RealmeError::Generation {
                message: "mock generator has no scripted reply".to_string(),
                source: None,
            }),
        }
    }
}
