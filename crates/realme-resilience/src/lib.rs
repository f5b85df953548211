// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resilience primitives for the Realme wellness toolkit.
//!
//! - [`RetryPolicy`]: bounded attempts with linearly increasing backoff
//! - [`InvocationState`]: the per-invocation state machine
//! - [`retry_with_policy`]: the single retry loop every flow runs through

pub mod policy;
pub mod retry;
pub mod state;

pub use policy::RetryPolicy;
pub use retry::retry_with_policy;
pub use state::InvocationState;
