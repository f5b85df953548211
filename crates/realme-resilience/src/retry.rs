// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The shared retry loop.

use std::future::Future;

use realme_core::RealmeError;
use tracing::{debug, warn};

use crate::policy::RetryPolicy;
use crate::state::InvocationState;

/// Runs `op` until it succeeds or the policy's attempts are exhausted.
///
/// `op` receives the 1-based attempt number. Attempts are strictly
/// sequential. Every error counts as a failed attempt; after the last one the
/// error is wrapped in [`RealmeError::FlowFailed`]. There is no wait after
/// the final attempt.
pub async fn retry_with_policy<T, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut op: F,
) -> Result<T, RealmeError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, RealmeError>>,
{
    let mut state = InvocationState::Idle.start();

    loop {
        let InvocationState::Attempting { attempt } = state else {
            return Err(RealmeError::Internal(format!(
                "{label}: retry loop reached unexpected state {state:?}"
            )));
        };
        debug!(flow = label, attempt, "attempt started");

        let error = match op(attempt).await {
            Ok(value) => {
                state = state.succeed();
                debug!(flow = label, ?state, "invocation finished");
                return Ok(value);
            }
            Err(e) => e,
        };

        state = state.fail(policy);
        match state {
            InvocationState::RetryWait { delay, .. } => {
                warn!(
                    flow = label,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %error,
                    "attempt failed, will retry"
                );
                tokio::time::sleep(delay).await;
                state = state.resume();
            }
            InvocationState::Failed { attempts } => {
                warn!(flow = label, attempts, error = %error, "retries exhausted");
                return Err(RealmeError::FlowFailed {
                    flow: label.to_string(),
                    attempts,
                    source: Box::new(error),
                });
            }
            other => {
                return Err(RealmeError::Internal(format!(
                    "{label}: retry loop reached unexpected state {other:?}"
                )));
            }
        }
    }
}
