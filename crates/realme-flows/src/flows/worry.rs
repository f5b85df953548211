// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Worry jar: cognitive reframing of a single worry.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::PromptTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorryInput {
    #[schemars(length(min = 5))]
    pub worry: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorryReframe {
    pub reframed_thought: String,
    #[schemars(length(min = 1))]
    pub coping_strategies: Vec<String>,
    /// Whether the worry is about something the user can influence.
    pub within_control: bool,
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You are a calm, supportive guide trained in cognitive reframing.

The user has dropped this worry into their worry jar:
\"{{worry}}\"

Rewrite it as a balanced, realistic thought. Decide whether the situation is within \
the user's control. Offer two to four concrete coping strategies that fit that answer: \
action steps if it is controllable, acceptance and grounding techniques if it is not.",
);

/// `reframeWorry`: balanced reframe plus coping strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReframeWorry;

impl Flow for ReframeWorry {
    type Input = WorryInput;
    type Output = WorryReframe;

    fn name(&self) -> &'static str {
        "reframeWorry"
    }

    fn render_prompt(&self, input: &WorryInput) -> String {
        TEMPLATE.render(&[("worry", input.worry.trim())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worry_is_quoted_and_trimmed() {
        let prompt = ReframeWorry.render_prompt(&WorryInput {
            worry: "  I will fail my exam \n".into(),
        });
        assert!(prompt.contains("\"I will fail my exam\""));
    }
}
