// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Realme wellness toolkit.
//!
//! This crate provides the error type, shared domain types, and the
//! boundary traits behind which the generation and persistence
//! capabilities live.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RealmeError;
pub use types::{AdapterType, HealthStatus, Icon, Identity, Mood, MoodEntry};

pub use traits::{
    GenerationAdapter, GenerationRequest, GenerationResponse, KeyValueStore, PluginAdapter,
};
