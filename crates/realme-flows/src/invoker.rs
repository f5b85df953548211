// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flow invoker: validate, render, generate, validate, retry.

use std::sync::Arc;

use realme_core::{GenerationAdapter, GenerationRequest, PluginAdapter, RealmeError};
use realme_resilience::{RetryPolicy, retry_with_policy};
use tracing::{debug, info};

use crate::flow::Flow;
use crate::schema::SchemaContract;

/// Runs any [`Flow`] against a generation capability under one retry policy.
///
/// Each call is an independent invocation: no result caching and no
/// de-duplication of concurrent identical requests.
#[derive(Clone)]
pub struct FlowInvoker {
    generator: Arc<dyn GenerationAdapter>,
    policy: RetryPolicy,
}

impl FlowInvoker {
    pub fn new(generator: Arc<dyn GenerationAdapter>, policy: RetryPolicy) -> Self {
        Self { generator, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Invokes `flow` with `input`.
    ///
    /// A flow's short circuit is consulted first and wins over input
    /// validation. Input schema violations fail immediately with
    /// [`RealmeError::InvalidInput`] and no generation attempt. Otherwise the
    /// rendered prompt is submitted up to `max_attempts` times; transport
    /// errors, empty replies and schema-violating replies all count as failed
    /// attempts. The terminal error is [`RealmeError::FlowFailed`].
    pub async fn invoke<F: Flow>(&self, flow: &F, input: &F::Input) -> Result<F::Output, RealmeError> {
        let name = flow.name();

        if let Some(output) = flow.short_circuit(input) {
            debug!(flow = name, "short-circuited, generation skipped");
            return Ok(output);
        }

        let input_value = serde_json::to_value(input)
            .map_err(|e| RealmeError::Internal(format!("{name}: cannot serialize input: {e}")))?;
        if let Err(violations) = SchemaContract::for_type::<F::Input>(name)?.check(&input_value) {
            debug!(flow = name, ?violations, "input rejected");
            return Err(RealmeError::InvalidInput {
                flow: name.to_string(),
                violations,
            });
        }

        let contract = SchemaContract::for_type::<F::Output>(name)?;
        let prompt = flow.render_prompt(input);
        let generator = self.generator.as_ref();
        let contract = &contract;
        let prompt = prompt.as_str();

        let output = retry_with_policy(&self.policy, name, |_attempt| async move {
            let response = generator
                .generate(GenerationRequest {
                    flow: name.to_string(),
                    prompt: prompt.to_string(),
                    output_schema: contract.schema().clone(),
                })
                .await?;
            let value = response.output.ok_or_else(|| RealmeError::EmptyOutput {
                flow: name.to_string(),
            })?;
            contract.decode::<F::Output>(value)
        })
        .await?;

        info!(flow = name, "flow completed");
        Ok(output)
    }
}

impl std::fmt::Debug for FlowInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowInvoker")
            .field("generator", &self.generator.name())
            .field("policy", &self.policy)
            .finish()
    }
}
