// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-invocation state machine.
//!
//! ```text
//! Idle -> Attempting(1) -> Success
//!                       -> RetryWait(n) -> Attempting(n+1)   while n < max
//!                       -> Failed                            when n == max
//! ```

use std::time::Duration;

use crate::policy::RetryPolicy;

/// Where a single invocation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationState {
    /// Not started.
    Idle,
    /// Attempt `attempt` (1-based) is in flight.
    Attempting { attempt: u32 },
    /// Attempt `attempt` failed; waiting `delay` before the next one.
    RetryWait { attempt: u32, delay: Duration },
    /// An attempt produced valid output.
    Success { attempts: u32 },
    /// Every allowed attempt failed.
    Failed { attempts: u32 },
}

impl InvocationState {
    /// `Idle -> Attempting(1)`. Any other state is returned unchanged.
    pub fn start(self) -> Self {
        match self {
            InvocationState::Idle => InvocationState::Attempting { attempt: 1 },
            other => other,
        }
    }

    /// The in-flight attempt succeeded.
    pub fn succeed(self) -> Self {
        match self {
            InvocationState::Attempting { attempt } => InvocationState::Success { attempts: attempt },
            other => other,
        }
    }

    /// The in-flight attempt failed; consult the policy for what comes next.
    pub fn fail(self, policy: &RetryPolicy) -> Self {
        match self {
            InvocationState::Attempting { attempt } if policy.allows_retry_after(attempt) => {
                InvocationState::RetryWait {
                    attempt,
                    delay: policy.delay_after(attempt),
                }
            }
            InvocationState::Attempting { attempt } => InvocationState::Failed { attempts: attempt },
            other => other,
        }
    }

    /// The backoff elapsed; begin the next attempt.
    pub fn resume(self) -> Self {
        match self {
            InvocationState::RetryWait { attempt, .. } => InvocationState::Attempting {
                attempt: attempt + 1,
            },
            other => other,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InvocationState::Success { .. } | InvocationState::Failed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attempt_success() {
        let state = InvocationState::Idle.start().succeed();
        assert_eq!(state, InvocationState::Success { attempts: 1 });
        assert!(state.is_terminal());
    }

    #[test]
    fn walks_to_failed_after_max_attempts() {
        let policy = RetryPolicy::default();
        let mut state = InvocationState::Idle.start();
        let mut waits = Vec::new();

        loop {
            state = state.fail(&policy);
            match state {
                InvocationState::RetryWait { delay, .. } => {
                    waits.push(delay);
                    state = state.resume();
                }
                InvocationState::Failed { attempts } => {
                    assert_eq!(attempts, 3);
                    break;
                }
                other => panic!("unexpected state {other:?}"),
            }
        }

        assert_eq!(
            waits,
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
    }

    #[test]
    fn success_after_retry_counts_attempts() {
        let policy = RetryPolicy::default();
        let state = InvocationState::Idle
            .start()
            .fail(&policy)
            .resume()
            .succeed();
        assert_eq!(state, InvocationState::Success { attempts: 2 });
    }

    #[test]
    fn terminal_states_absorb_events() {
        let policy = RetryPolicy::default();
        let done = InvocationState::Success { attempts: 1 };
        assert_eq!(done.fail(&policy), done);
        assert_eq!(done.resume(), done);
        assert_eq!(done.start(), done);
        assert!(!InvocationState::Idle.is_terminal());
    }
}
