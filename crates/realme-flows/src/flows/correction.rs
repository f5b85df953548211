// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Spelling and grammar correction for free text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::PromptTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CorrectTextInput {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorrectedText {
    pub corrected_text: String,
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "Correct the spelling and grammar of the text below. Keep the author's voice, meaning \
and language; do not add or remove content. If nothing needs fixing, return it unchanged.

Text:
{{text}}",
);

/// `correctText`: spelling and grammar fixes.
///
/// Text shorter than `min_chars` (after trimming) is echoed back verbatim.
#[derive(Debug, Clone, Copy)]
pub struct CorrectText {
    pub min_chars: usize,
}

impl Default for CorrectText {
    fn default() -> Self {
        Self { min_chars: 5 }
    }
}

impl Flow for CorrectText {
    type Input = CorrectTextInput;
    type Output = CorrectedText;

    fn name(&self) -> &'static str {
        "correctText"
    }

    fn render_prompt(&self, input: &CorrectTextInput) -> String {
        TEMPLATE.render(&[("text", input.text.as_str())])
    }

    fn short_circuit(&self, input: &CorrectTextInput) -> Option<CorrectedText> {
        (input.text.trim().chars().count() < self.min_chars).then(|| CorrectedText {
            corrected_text: input.text.clone(),
        })
    }
}
