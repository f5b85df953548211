// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name-based dispatch over raw JSON, for callers that only know a flow by name.

use realme_core::RealmeError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::{Display, EnumIter, EnumString};

use crate::RealmeFlows;
use crate::flow::Flow;
use crate::flows::*;
use crate::invoker::FlowInvoker;

/// Every flow in the catalog, by its public name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum FlowName {
    PlanDay,
    AnalyzeJournalEntry,
    ReframeWorry,
    MentalHealthAssessment,
    PersonalizedContentSuggestions,
    GenerateArticle,
    GenerateOrganizationInsights,
    VetStory,
    CorrectText,
}

impl RealmeFlows {
    /// Runs the named flow on a JSON request and returns its JSON response.
    ///
    /// A request that does not deserialize into the flow's input record is
    /// reported as [`RealmeError::InvalidInput`].
    pub async fn run_json(&self, name: FlowName, input: Value) -> Result<Value, RealmeError> {
        let invoker = self.invoker();
        match name {
            FlowName::PlanDay => run(invoker, &PlanDay, input).await,
            FlowName::AnalyzeJournalEntry => run(invoker, &AnalyzeJournalEntry, input).await,
            FlowName::ReframeWorry => run(invoker, &ReframeWorry, input).await,
            FlowName::MentalHealthAssessment => {
                run(invoker, &MentalHealthAssessment, input).await
            }
            FlowName::PersonalizedContentSuggestions => {
                run(invoker, &PersonalizedContentSuggestions, input).await
            }
            FlowName::GenerateArticle => run(invoker, &GenerateArticle, input).await,
            FlowName::GenerateOrganizationInsights => {
                run(invoker, &GenerateOrganizationInsights, input).await
            }
            FlowName::VetStory => run(invoker, &VetStory, input).await,
            FlowName::CorrectText => run(invoker, &self.correct_text, input).await,
        }
    }
}

async fn run<F>(invoker: &FlowInvoker, flow: &F, input: Value) -> Result<Value, RealmeError>
where
    F: Flow,
    F::Input: DeserializeOwned,
    F::Output: Serialize,
{
    let typed: F::Input = serde_json::from_value(input).map_err(|e| RealmeError::InvalidInput {
        flow: flow.name().to_string(),
        violations: vec![e.to_string()],
    })?;
    let output = invoker.invoke(flow, &typed).await?;
    serde_json::to_value(output)
        .map_err(|e| RealmeError::Internal(format!("{}: cannot serialize output: {e}", flow.name())))
}
