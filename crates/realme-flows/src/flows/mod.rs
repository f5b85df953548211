// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flow catalog.

pub mod assessment;
pub mod content;
pub mod correction;
pub mod journal;
pub mod organization;
pub mod planner;
pub mod story;
pub mod worry;

pub use assessment::{AssessmentAnswer, AssessmentInput, AssessmentResult, MentalHealthAssessment};
pub use content::{
    Article, ArticleInput, ContentKind, ContentSuggestion, ContentSuggestions,
    ContentSuggestionsInput, GenerateArticle, PersonalizedContentSuggestions,
};
pub use correction::{CorrectText, CorrectTextInput, CorrectedText};
pub use journal::{AnalyzeJournalEntry, JournalAnalysis, JournalEntryInput};
pub use organization::{
    GenerateOrganizationInsights, MemberMoods, OrganizationInsights, OrganizationInsightsInput,
};
pub use planner::{DayPlan, EnergyLevel, PlanDay, PlanDayInput, TimeBlock};
pub use story::{StoryInput, StoryVerdict, VetStory};
pub use worry::{ReframeWorry, WorryInput, WorryReframe};
