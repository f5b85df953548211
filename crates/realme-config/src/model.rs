// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Realme toolkit.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Realme configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RealmeConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Gemini structured generation settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Flow invocation policy.
    #[serde(default)]
    pub flows: FlowsConfig,

    /// Key-value persistence settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in log lines and CLI output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "realme".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires the `GEMINI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for every flow.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL, up to and including the version segment.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP client timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

/// Retry policy and short-circuit thresholds shared by every flow.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FlowsConfig {
    /// Total generation attempts per invocation, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base backoff; the wait after attempt `n` is `n * backoff_ms`.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// Texts shorter than this (after trimming) skip correction entirely.
    #[serde(default = "default_correct_text_min_chars")]
    pub correct_text_min_chars: usize,
}

impl Default for FlowsConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            correct_text_min_chars: default_correct_text_min_chars(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    1000
}

fn default_correct_text_min_chars() -> usize {
    5
}

/// Key-value persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database holding per-user records.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("realme").join("realme.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("realme.db"))
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_flow_policy() {
        let config = RealmeConfig::default();
        assert_eq!(config.flows.max_attempts, 3);
        assert_eq!(config.flows.backoff_ms, 1000);
        assert_eq!(config.flows.correct_text_min_chars, 5);
    }

    #[test]
    fn default_database_path_ends_with_realme_db() {
        let config = StorageConfig::default();
        assert!(config.database_path.ends_with("realme.db"));
    }

    #[test]
    fn gemini_defaults() {
        let gemini = GeminiConfig::default();
        assert!(gemini.api_key.is_none());
        assert!(gemini.base_url.ends_with("/v1beta"));
        assert_eq!(gemini.timeout_secs, 120);
    }
}
