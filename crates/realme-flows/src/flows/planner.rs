// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily planner.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::flow::Flow;
use crate::template::{PromptTemplate, optional_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize, JsonSchema)]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanDayInput {
    /// What the user wants to get done today.
    #[schemars(length(min = 3))]
    pub priorities: String,
    pub energy_level: EnergyLevel,
    #[schemars(range(min = 1, max = 24))]
    pub available_hours: u8,
    /// Anything else to take into account (appointments, constraints).
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimeBlock {
    pub time: String,
    pub activity: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DayPlan {
    pub summary: String,
    #[schemars(length(min = 1))]
    pub time_blocks: Vec<TimeBlock>,
    pub wellness_tip: String,
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You are a supportive planning coach who balances productivity with mental wellbeing.

Build a realistic schedule for today from the user's priorities. Fit the plan into \
{{hours}} available hours, match the intensity to their energy level, and include at \
least one short break or self-care block. Categorise each block as Work, Personal, \
Self-care or Break.

Priorities:
{{priorities}}

Energy level: {{energy}}
Additional notes: {{notes}}

Finish with one practical wellness tip for the day.",
);

/// `planDay`: turns free-text priorities into a time-blocked day plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanDay;

impl Flow for PlanDay {
    type Input = PlanDayInput;
    type Output = DayPlan;

    fn name(&self) -> &'static str {
        "planDay"
    }

    fn render_prompt(&self, input: &PlanDayInput) -> String {
        let hours = input.available_hours.to_string();
        let energy = input.energy_level.to_string();
        let notes = optional_field(input.notes.as_deref());
        TEMPLATE.render(&[
            ("hours", hours.as_str()),
            ("priorities", input.priorities.trim()),
            ("energy", energy.as_str()),
            ("notes", notes.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(notes: Option<&str>) -> PlanDayInput {
        PlanDayInput {
            priorities: "finish report, call mum".into(),
            energy_level: EnergyLevel::Low,
            available_hours: 6,
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn prompt_includes_every_field() {
        let prompt = PlanDay.render_prompt(&input(Some("dentist at 3pm")));
        assert!(prompt.contains("6 available hours"));
        assert!(prompt.contains("finish report, call mum"));
        assert!(prompt.contains("Energy level: Low"));
        assert!(prompt.contains("Additional notes: dentist at 3pm"));
    }

    #[test]
    fn absent_notes_render_as_none() {
        let prompt = PlanDay.render_prompt(&input(None));
        assert!(prompt.contains("Additional notes: None"));
    }
}
