// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wellness self-assessment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::flow::Flow;
use crate::template::PromptTemplate;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnswer {
    #[schemars(length(min = 1))]
    pub question: String,
    #[schemars(length(min = 1))]
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    #[schemars(length(min = 1))]
    pub answers: Vec<AssessmentAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssessmentResult {
    pub summary: String,
    /// 0 (struggling) to 100 (thriving).
    #[schemars(range(max = 100))]
    pub wellness_score: u8,
    pub strengths: Vec<String>,
    pub areas_for_growth: Vec<String>,
    pub recommendations: Vec<String>,
}

const TEMPLATE: PromptTemplate = PromptTemplate::new(
    "You are a warm wellbeing coach reviewing a self-assessment. This is not a clinical \
diagnosis and must not read like one.

Questions and answers:
{{answers}}

Summarise how the person seems to be doing, give an overall wellness score from 0 \
(struggling) to 100 (thriving), name their strengths, the areas where they could grow, \
and three practical recommendations. If any answer suggests risk of self-harm, the \
first recommendation must be to contact a crisis line or a trusted professional.",
);

/// `mentalHealthAssessment`: scored summary of a questionnaire.
#[derive(Debug, Clone, Copy, Default)]
pub struct MentalHealthAssessment;

impl Flow for MentalHealthAssessment {
    type Input = AssessmentInput;
    type Output = AssessmentResult;

    fn name(&self) -> &'static str {
        "mentalHealthAssessment"
    }

    fn render_prompt(&self, input: &AssessmentInput) -> String {
        let answers = input
            .answers
            .iter()
            .enumerate()
            .map(|(i, a)| format!("{}. Q: {}\n   A: {}", i + 1, a.question.trim(), a.answer.trim()))
            .collect::<Vec<_>>()
            .join("\n");
        TEMPLATE.render(&[("answers", answers.as_str())])
    }
}
