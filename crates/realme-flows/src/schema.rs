// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declared schemas for flow requests and responses, enforced locally.
//!
//! Schemas are derived from the Rust types with `schemars` and checked with
//! `jsonschema`, independent of whichever generation backend is in use.

use jsonschema::Validator;
use realme_core::RealmeError;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A JSON schema plus its compiled validator.
pub struct SchemaContract {
    flow: &'static str,
    schema: Value,
    validator: Validator,
}

impl std::fmt::Debug for SchemaContract {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaContract")
            .field("flow", &self.flow)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl SchemaContract {
    /// Derives and compiles the schema of `T`.
    pub fn for_type<T: JsonSchema>(flow: &'static str) -> Result<Self, RealmeError> {
        let schema = serde_json::to_value(schemars::schema_for!(T)).map_err(|e| {
            RealmeError::Internal(format!("{flow}: cannot serialize schema: {e}"))
        })?;
        let validator = jsonschema::validator_for(&schema).map_err(|e| {
            RealmeError::Internal(format!("{flow}: cannot compile schema: {e}"))
        })?;
        Ok(Self {
            flow,
            schema,
            validator,
        })
    }

    /// The schema as submitted to the generation capability.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Returns every violation of `instance` against the schema.
    pub fn check(&self, instance: &Value) -> Result<(), Vec<String>> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Validates generated output and converts it to its typed form.
    ///
    /// Anything the schema accepts but the type rejects is still a violation;
    /// a partially-typed value is never returned.
    pub fn decode<T: DeserializeOwned>(&self, instance: Value) -> Result<T, RealmeError> {
        self.check(&instance)
            .map_err(|violations| RealmeError::SchemaViolation {
                flow: self.flow.to_string(),
                violations,
            })?;
        serde_json::from_value(instance).map_err(|e| RealmeError::SchemaViolation {
            flow: self.flow.to_string(),
            violations: vec![e.to_string()],
        })
    }
}
