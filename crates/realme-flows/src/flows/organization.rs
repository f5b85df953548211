// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organization insights from anonymized member mood logs.

use std::collections::BTreeMap;

use realme_core::{Mood, MoodEntry};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::PromptTemplate;

/// Mood log of one organization member, keyed by an opaque id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberMoods {
    pub member_id: String,
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInsightsInput {
    #[schemars(length(min = 1))]
    pub organization_name: String,
    #[serde(default)]
    pub members: Vec<MemberMoods>,
}

impl OrganizationInsightsInput {
    /// Total number of mood records across all members.
    pub fn record_count(&self) -> usize {
        self.members.iter().map(|m| m.moods.len()).sum()
    }

    /// Count of records per mood across the organization.
    pub fn distribution(&self) -> BTreeMap<Mood, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.members.iter().flat_map(|m| &m.moods) {
            *counts.entry(entry.mood).or_insert(0) += 1;
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrganizationInsights {
    pub overall_sentiment: String,
    pub summary: String,
    #[schemars(length(min = 1))]
    pub recommendations: Vec<String>,
}

impl OrganizationInsights {
    /// The fixed response for an organization with nothing logged yet.
    pub fn no_data() -> Self {
        Self {
            overall_sentiment: "No data yet".to_string(),
            summary: "None of your team members have logged a mood yet, so there is nothing \
to analyse."
                .to_string(),
            recommendations: vec![
                "Invite your team members to start logging their moods.".to_string(),
            ],
        }
    }
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You advise a team leader on the wellbeing of their organization, \"{{organization}}\". \
The data below is anonymized; never try to identify individuals.

Members reporting: {{members}}
Mood records: {{records}}
Distribution:
{{distribution}}

Per-member recent moods (oldest first):
{{timelines}}

Describe the overall sentiment in a few words, summarise the trend, and give three \
recommendations the leader could act on this week.",
);

/// `generateOrganizationInsights`: leader-facing summary of team mood trends.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOrganizationInsights;

impl Flow for GenerateOrganizationInsights {
    type Input = OrganizationInsightsInput;
    type Output = OrganizationInsights;

    fn name(&self) -> &'static str {
        "generateOrganizationInsights"
    }

    fn render_prompt(&self, input: &OrganizationInsightsInput) -> String {
        let total = input.record_count();
        let distribution = input
            .distribution()
            .into_iter()
            .map(|(mood, count)| format!("- {mood}: {count} ({}%)", count * 100 / total.max(1)))
            .collect::<Vec<_>>()
            .join("\n");
        let timelines = input
            .members
            .iter()
            .filter(|m| !m.moods.is_empty())
            .enumerate()
            .map(|(i, m)| {
                let mut moods = m.moods.clone();
                moods.sort_by_key(|e| e.date);
                let line = moods
                    .iter()
                    .map(|e| e.mood.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("- Member {}: {line}", i + 1)
            })
            .collect::<Vec<_>>()
            .join("\n");
        let members = input.members.len().to_string();
        let records = total.to_string();

        TEMPLATE.render(&[
            ("organization", input.organization_name.trim()),
            ("members", members.as_str()),
            ("records", records.as_str()),
            ("distribution", distribution.as_str()),
            ("timelines", timelines.as_str()),
        ])
    }

    fn short_circuit(&self, input: &OrganizationInsightsInput) -> Option<OrganizationInsights> {
        (input.record_count() == 0).then(OrganizationInsights::no_data)
    }
}
