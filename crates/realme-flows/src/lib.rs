// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema-validated, retrying AI flows for Realme.
//!
//! Each flow is a fixed prompt template with declared request and response
//! schemas. [`RealmeFlows`] exposes one async function per feature; every call
//! validates its input, renders the prompt, submits it to the configured
//! [`GenerationAdapter`], validates the reply and retries on any failure.

pub mod dispatch;
pub mod flow;
pub mod flows;
pub mod invoker;
pub mod schema;
pub mod template;

use std::sync::Arc;
use std::time::Duration;

use realme_config::model::FlowsConfig;
use realme_core::{GenerationAdapter, RealmeError};
use realme_resilience::RetryPolicy;

pub use dispatch::FlowName;
pub use flow::Flow;
pub use flows::*;
pub use invoker::FlowInvoker;
pub use schema::SchemaContract;

/// Builds the retry policy described by the `[flows]` config section.
pub fn retry_policy(config: &FlowsConfig) -> RetryPolicy {
    RetryPolicy::new(config.max_attempts, Duration::from_millis(config.backoff_ms))
}

/// One async function per AI-backed feature.
#[derive(Debug, Clone)]
pub struct RealmeFlows {
    invoker: FlowInvoker,
    correct_text: CorrectText,
}

impl RealmeFlows {
    pub fn new(generator: Arc<dyn GenerationAdapter>, config: &FlowsConfig) -> Self {
        Self {
            invoker: FlowInvoker::new(generator, retry_policy(config)),
            correct_text: CorrectText {
                min_chars: config.correct_text_min_chars,
            },
        }
    }

    /// Uses an explicit policy and the default correction threshold.
    pub fn with_policy(generator: Arc<dyn GenerationAdapter>, policy: RetryPolicy) -> Self {
        Self {
            invoker: FlowInvoker::new(generator, policy),
            correct_text: CorrectText::default(),
        }
    }

    pub fn invoker(&self) -> &FlowInvoker {
        &self.invoker
    }

    pub async fn plan_day(&self, input: &PlanDayInput) -> Result<DayPlan, RealmeError> {
        self.invoker.invoke(&PlanDay, input).await
    }

    pub async fn analyze_journal_entry(
        &self,
        input: &JournalEntryInput,
    ) -> Result<JournalAnalysis, RealmeError> {
        self.invoker.invoke(&AnalyzeJournalEntry, input).await
    }

    pub async fn reframe_worry(&self, input: &WorryInput) -> Result<WorryReframe, RealmeError> {
        self.invoker.invoke(&ReframeWorry, input).await
    }

    pub async fn mental_health_assessment(
        &self,
        input: &AssessmentInput,
    ) -> Result<AssessmentResult, RealmeError> {
        self.invoker.invoke(&MentalHealthAssessment, input).await
    }

    pub async fn personalized_content_suggestions(
        &self,
        input: &ContentSuggestionsInput,
    ) -> Result<ContentSuggestions, RealmeError> {
        self.invoker
            .invoke(&PersonalizedContentSuggestions, input)
            .await
    }

    pub async fn generate_article(&self, input: &ArticleInput) -> Result<Article, RealmeError> {
        self.invoker.invoke(&GenerateArticle, input).await
    }

    /// Returns the fixed no-data response without generation when the
    /// organization has no mood records.
    pub async fn generate_organization_insights(
        &self,
        input: &OrganizationInsightsInput,
    ) -> Result<OrganizationInsights, RealmeError> {
        self.invoker
            .invoke(&GenerateOrganizationInsights, input)
            .await
    }

    pub async fn vet_story(&self, input: &StoryInput) -> Result<StoryVerdict, RealmeError> {
        self.invoker.invoke(&VetStory, input).await
    }

    pub async fn correct_text(
        &self,
        input: &CorrectTextInput,
    ) -> Result<CorrectedText, RealmeError> {
        self.invoker.invoke(&self.correct_text, input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_policy_follows_config() {
        let config = FlowsConfig {
            max_attempts: 5,
            backoff_ms: 250,
            correct_text_min_chars: 5,
        };
        let policy = retry_policy(&config);
        assert_eq!(policy.max_attempts(), 5);
        assert_eq!(policy.delay_after(2), Duration::from_millis(500));
    }
}
