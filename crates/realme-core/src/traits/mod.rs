// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boundary trait definitions.
//!
//! All adapters extend the [`PluginAdapter`] base trait and use
//! `#[async_trait]` for dynamic dispatch compatibility.

pub mod adapter;
pub mod generation;
pub mod persistence;

pub use adapter::PluginAdapter;
pub use generation::{GenerationAdapter, GenerationRequest, GenerationResponse};
pub use persistence::KeyValueStore;
