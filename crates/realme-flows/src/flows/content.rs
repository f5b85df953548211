// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Personalized content suggestions and article generation.

use realme_core::Mood;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::{PromptTemplate, bullet_list, optional_field};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentSuggestionsInput {
    /// Summary of the latest assessment, if the user has taken one.
    #[serde(default)]
    pub assessment_summary: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub recent_mood: Option<Mood>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ContentKind {
    Article,
    Exercise,
    Meditation,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentSuggestion {
    pub title: String,
    pub kind: ContentKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentSuggestions {
    #[schemars(length(min = 1))]
    pub suggestions: Vec<ContentSuggestion>,
}

const SUGGESTIONS_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You curate self-care content for a mental wellness app.

Latest assessment summary: {{assessment}}
Recent mood: {{mood}}
Interests:
{{interests}}

Suggest four to six pieces of content (articles, exercises, meditations or videos) that \
fit this person right now. Give each a title, its kind, and a one-sentence description \
of why it may help.",
);

/// `personalizedContentSuggestions`: a batch of tailored content ideas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonalizedContentSuggestions;

impl Flow for PersonalizedContentSuggestions {
    type Input = ContentSuggestionsInput;
    type Output = ContentSuggestions;

    fn name(&self) -> &'static str {
        "personalizedContentSuggestions"
    }

    fn render_prompt(&self, input: &ContentSuggestionsInput) -> String {
        let assessment = optional_field(input.assessment_summary.as_deref());
        let mood = input
            .recent_mood
            .map(|m| m.to_string())
            .unwrap_or_else(|| optional_field(None));
        let interests = bullet_list(&input.interests);
        SUGGESTIONS_TEMPLATE.render(&[
            ("assessment", assessment.as_str()),
            ("mood", mood.as_str()),
            ("interests", interests.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInput {
    #[schemars(length(min = 3))]
    pub title: String,
    /// Who the article is written for, e.g. "new parents".
    #[serde(default)]
    pub audience: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Article {
    pub title: String,
    /// Markdown body.
    #[schemars(length(min = 1))]
    pub content: String,
    #[schemars(range(min = 1, max = 60))]
    pub reading_minutes: u16,
}

const ARTICLE_TEMPLATE: PromptTemplate = PromptTemplate::new(
    "Write an encouraging, evidence-informed wellness article in Markdown.

Title: {{title}}
Audience: {{audience}}

Use short paragraphs and a few subheadings, end with three practical takeaways, and \
estimate the reading time in minutes.",
);

/// `generateArticle`: a full Markdown article for a content card.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateArticle;

impl Flow for GenerateArticle {
    type Input = ArticleInput;
    type Output = Article;

    fn name(&self) -> &'static str {
        "generateArticle"
    }

    fn render_prompt(&self, input: &ArticleInput) -> String {
        let audience = optional_field(input.audience.as_deref());
        ARTICLE_TEMPLATE.render(&[
            ("title", input.title.trim()),
            ("audience", audience.as_str()),
        ])
    }
}
