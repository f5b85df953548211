// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Moderation of community stories before they are published.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::PromptTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryInput {
    #[schemars(length(min = 20))]
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoryVerdict {
    pub approved: bool,
    /// Shown to the author when the story is rejected.
    pub reason: String,
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You moderate a supportive community where people share recovery and wellbeing stories.

Story:
\"\"\"
{{story}}
\"\"\"

Approve it unless it contains harassment, hate, graphic self-harm instructions, personal \
data about other people, or advertising. Give a short, kind reason either way.",
);

/// `vetStory`: approve or reject a community story.
#[derive(Debug, Clone, Copy, Default)]
pub struct VetStory;

impl Flow for VetStory {
    type Input = StoryInput;
    type Output = StoryVerdict;

    fn name(&self) -> &'static str {
        "vetStory"
    }

    fn render_prompt(&self, input: &StoryInput) -> String {
        TEMPLATE.render(&[("story", input.story.trim())])
    }
}
