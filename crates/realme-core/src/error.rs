// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Realme wellness toolkit.

use thiserror::Error;

/// The primary error type used across all Realme adapter traits and core operations.
#[derive(Debug, Error)]
pub enum RealmeError {
    /// Configuration errors (invalid TOML, missing API key, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Structured generation errors (API failure, network error, unparseable reply).
    #[error("generation error: {message}")]
    Generation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A flow request failed its declared input schema. No generation is attempted.
    #[error("invalid input for {flow}: {}", violations.join("; "))]
    InvalidInput {
        flow: String,
        violations: Vec<String>,
    },

    /// Generated output did not conform to the flow's declared output schema.
    #[error("output of {flow} violates its schema: {}", violations.join("; "))]
    SchemaViolation {
        flow: String,
        violations: Vec<String>,
    },

    /// The generation capability succeeded but returned no structured output.
    #[error("{flow} returned no structured output")]
    EmptyOutput { flow: String },

    /// A flow exhausted its retry budget. Carries the last attempt's error.
    #[error("{flow} failed after {attempts} attempts: {source}")]
    FlowFailed {
        flow: String,
        attempts: u32,
        source: Box<RealmeError>,
    },

    /// The caller's identity is not allowed to perform the operation.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A referenced record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl RealmeError {
    /// A short, non-technical sentence suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            RealmeError::InvalidInput { violations, .. } => match violations.first() {
                Some(first) => format!("Please check your input: {first}."),
                None => "Please check your input and try again.".to_string(),
            },
            RealmeError::FlowFailed { .. }
            | RealmeError::Generation { .. }
            | RealmeError::SchemaViolation { .. }
            | RealmeError::EmptyOutput { .. } => {
                "We couldn't get a response right now. Please try again in a moment.".to_string()
            }
            RealmeError::Unauthorized(_) => {
                "You don't have access to this view.".to_string()
            }
            RealmeError::NotFound { kind, .. } => format!("That {kind} no longer exists."),
            RealmeError::Config(_)
            | RealmeError::Storage { .. }
            | RealmeError::Internal(_) => "Something went wrong on our side.".to_string(),
        }
    }
}
