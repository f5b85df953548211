// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Journal entry analysis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::PromptTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryInput {
    #[schemars(length(min = 10))]
    pub entry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JournalAnalysis {
    /// One or two words, e.g. "hopeful" or "overwhelmed".
    pub sentiment: String,
    pub themes: Vec<String>,
    pub insights: String,
    pub suggestion: String,
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You are a compassionate journaling companion. Read the entry below and reflect it \
back gently. Do not diagnose.

Identify the overall sentiment in one or two words, list up to five recurring themes, \
offer a short insight the writer may not have noticed, and suggest one small, kind \
next step.

Journal entry:
\"\"\"
{{entry}}
\"\"\"",
);

/// `analyzeJournalEntry`: sentiment, themes and a gentle suggestion.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeJournalEntry;

impl Flow for AnalyzeJournalEntry {
    type Input = JournalEntryInput;
    type Output = JournalAnalysis;

    fn name(&self) -> &'static str {
        "analyzeJournalEntry"
    }

    fn render_prompt(&self, input: &JournalEntryInput) -> String {
        TEMPLATE.render(&[("entry", input.entry.trim())])
    }
}
