// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end flow invocations against a scripted generator.

use std::sync::Arc;
use std::time::Duration;

use realme_core::{Mood, MoodEntry, RealmeError};
use realme_flows::*;
use realme_resilience::RetryPolicy;
use realme_test_utils::{MockGenerator, MockReply, fixtures};
use serde_json::json;

fn flows(mock: &MockGenerator) -> RealmeFlows {
    RealmeFlows::with_policy(Arc::new(mock.clone()), RetryPolicy::default())
}

fn plan_input() -> PlanDayInput {
    PlanDayInput {
        priorities: "Finish the quarterly report, call mum".into(),
        energy_level: EnergyLevel::Medium,
        available_hours: 6,
        notes: None,
    }
}

#[tokio::test(start_paused = true)]
async fn first_try_success_makes_one_call() {
    let mock = MockGenerator::returning(fixtures::day_plan());
    let plan = flows(&mock).plan_day(&plan_input()).await.unwrap();

    assert_eq!(plan.time_blocks.len(), 2);
    assert_eq!(mock.calls().await, 1);
    let requests = mock.requests().await;
    assert_eq!(requests[0].flow, "planDay");
    assert!(requests[0].prompt.contains("Finish the quarterly report"));
    assert_eq!(requests[0].output_schema["type"], "object");
}

#[tokio::test(start_paused = true)]
async fn persistent_failure_stops_after_three_attempts_with_linear_backoff() {
    let mock = MockGenerator::failing();
    let err = flows(&mock).plan_day(&plan_input()).await.unwrap_err();

    match err {
        RealmeError::FlowFailed { flow, attempts, .. } => {
            assert_eq!(flow, "planDay");
            assert_eq!(attempts, 3);
        }
        other => panic!("expected FlowFailed, got {other:?}"),
    }
    assert_eq!(mock.calls().await, 3);

    let at = mock.call_instants().await;
    assert_eq!(at[1] - at[0], Duration::from_millis(1000));
    assert_eq!(at[2] - at[1], Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn recovers_on_third_attempt() {
    let mock = MockGenerator::with_replies([
        MockReply::Fail("503".into()),
        MockReply::Empty,
        MockReply::Output(fixtures::worry_reframe()),
    ]);
    let out = flows(&mock)
        .reframe_worry(&WorryInput {
            worry: "I will fail my exam".into(),
        })
        .await
        .unwrap();

    assert!(out.within_control);
    assert_eq!(mock.calls().await, 3);
}

#[tokio::test(start_paused = true)]
async fn schema_violating_output_is_retried() {
    let mock = MockGenerator::with_replies([
        MockReply::Output(json!({"summary": "missing blocks"})),
        MockReply::Output(json!({
            "summary": "extra field",
            "timeBlocks": [{"time": "9", "activity": "a", "category": "c"}],
            "wellnessTip": "t",
            "mood": "great"
        })),
        MockReply::Output(fixtures::day_plan()),
    ]);
    let plan = flows(&mock).plan_day(&plan_input()).await.unwrap();

    assert_eq!(plan.wellness_tip, "Drink a glass of water before each block.");
    assert_eq!(mock.calls().await, 3);
}

#[tokio::test(start_paused = true)]
async fn schema_violations_exhaust_the_budget() {
    let bad = MockReply::Output(json!({"summary": "no blocks"}));
    let mock = MockGenerator::with_replies([bad.clone(), bad.clone(), bad]);
    let err = flows(&mock).plan_day(&plan_input()).await.unwrap_err();

    let RealmeError::FlowFailed { source, .. } = err else {
        panic!("expected FlowFailed");
    };
    assert!(matches!(*source, RealmeError::SchemaViolation { .. }));
}

#[tokio::test]
async fn invalid_input_is_rejected_without_generation() {
    let mock = MockGenerator::returning(fixtures::worry_reframe());
    let err = flows(&mock)
        .reframe_worry(&WorryInput { worry: "hm".into() })
        .await
        .unwrap_err();

    assert!(matches!(err, RealmeError::InvalidInput { ref flow, .. } if flow == "reframeWorry"));
    assert_eq!(mock.calls().await, 0);
}

#[tokio::test]
async fn out_of_range_hours_are_invalid_input() {
    let mock = MockGenerator::returning(fixtures::day_plan());
    let input = PlanDayInput {
        available_hours: 30,
        ..plan_input()
    };
    let err = flows(&mock).plan_day(&input).await.unwrap_err();

    assert!(matches!(err, RealmeError::InvalidInput { .. }));
    assert_eq!(mock.calls().await, 0);
}

#[tokio::test]
async fn short_text_correction_skips_generation() {
    let mock = MockGenerator::failing();
    let out = flows(&mock)
        .correct_text(&CorrectTextInput { text: "tnx".into() })
        .await
        .unwrap();

    assert_eq!(out.corrected_text, "tnx");
    assert_eq!(mock.calls().await, 0);
}

#[tokio::test]
async fn longer_text_correction_calls_generation() {
    let mock = MockGenerator::returning(fixtures::corrected_text("I am feeling better."));
    let out = flows(&mock)
        .correct_text(&CorrectTextInput {
            text: "i am feelin beter".into(),
        })
        .await
        .unwrap();

    assert_eq!(out.corrected_text, "I am feeling better.");
    assert_eq!(mock.calls().await, 1);
}

#[tokio::test]
async fn empty_organization_gets_fixed_response_without_generation() {
    let mock = MockGenerator::failing();
    let out = flows(&mock)
        .generate_organization_insights(&OrganizationInsightsInput {
            organization_name: "Acme".into(),
            members: vec![],
        })
        .await
        .unwrap();

    assert_eq!(out, OrganizationInsights::no_data());
    assert_eq!(out.recommendations.len(), 1);
    assert_eq!(mock.calls().await, 0);
}

#[tokio::test]
async fn empty_organization_short_circuits_before_input_validation() {
    let mock = MockGenerator::failing();
    let out = flows(&mock)
        .generate_organization_insights(&OrganizationInsightsInput {
            organization_name: "".into(),
            members: vec![],
        })
        .await
        .unwrap();

    assert_eq!(out, OrganizationInsights::no_data());
    assert_eq!(mock.calls().await, 0);
}

#[tokio::test]
async fn overlapping_identical_invocations_each_reach_the_generator() {
    let mut second = fixtures::worry_reframe();
    second["withinControl"] = json!(false);
    let mock = MockGenerator::with_replies([
        MockReply::Output(fixtures::worry_reframe()),
        MockReply::Output(second),
    ]);
    let flows = flows(&mock);
    let input = WorryInput {
        worry: "I will fail my exam tomorrow".into(),
    };

    let (a, b) = tokio::join!(flows.reframe_worry(&input), flows.reframe_worry(&input));
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(mock.calls().await, 2);
    // No de-duplication: each caller gets its own reply.
    assert_ne!(a.within_control, b.within_control);
    let requests = mock.requests().await;
    assert_eq!(requests[0].prompt, requests[1].prompt);
}

#[tokio::test]
async fn organization_with_records_is_generated() {
    let mock = MockGenerator::returning(fixtures::organization_insights());
    let out = flows(&mock)
        .generate_organization_insights(&OrganizationInsightsInput {
            organization_name: "Acme".into(),
            members: vec![MemberMoods {
                member_id: "m-1".into(),
                moods: vec![MoodEntry::new(Mood::Calm, fixtures::today())],
            }],
        })
        .await
        .unwrap();

    assert_eq!(out.overall_sentiment, "Cautiously positive");
    assert_eq!(mock.calls().await, 1);
}

#[tokio::test]
async fn remaining_flows_decode_their_fixtures() {
    let mock = MockGenerator::with_replies([
        MockReply::Output(fixtures::journal_analysis()),
        MockReply::Output(fixtures::assessment_result()),
        MockReply::Output(fixtures::content_suggestions()),
        MockReply::Output(fixtures::article()),
        MockReply::Output(fixtures::story_verdict(false)),
    ]);
    let flows = flows(&mock);

    let journal = flows
        .analyze_journal_entry(&JournalEntryInput {
            entry: "Rough day at work but dinner with Sam was lovely.".into(),
        })
        .await
        .unwrap();
    assert_eq!(journal.themes.len(), 2);

    let assessment = flows
        .mental_health_assessment(&AssessmentInput {
            answers: vec![AssessmentAnswer {
                question: "How have you slept?".into(),
                answer: "Poorly".into(),
            }],
        })
        .await
        .unwrap();
    assert_eq!(assessment.wellness_score, 64);

    let content = flows
        .personalized_content_suggestions(&ContentSuggestionsInput {
            assessment_summary: None,
            interests: vec!["meditation".into()],
            recent_mood: Some(Mood::Anxious),
        })
        .await
        .unwrap();
    assert_eq!(content.suggestions[0].kind, ContentKind::Meditation);

    let article = flows
        .generate_article(&ArticleInput {
            title: "Sleep hygiene basics".into(),
            audience: None,
        })
        .await
        .unwrap();
    assert_eq!(article.reading_minutes, 4);

    let verdict = flows
        .vet_story(&StoryInput {
            story: "Last year I finally asked for help, and it changed everything.".into(),
        })
        .await
        .unwrap();
    assert!(!verdict.approved);

    assert_eq!(mock.calls().await, 5);
}

#[tokio::test(start_paused = true)]
async fn out_of_range_score_is_a_violation() {
    let mut bad = fixtures::assessment_result();
    bad["wellnessScore"] = json!(140);
    let mock = MockGenerator::with_replies([
        MockReply::Output(bad),
        MockReply::Output(fixtures::assessment_result()),
    ]);
    let out = flows(&mock)
        .mental_health_assessment(&AssessmentInput {
            answers: vec![AssessmentAnswer {
                question: "Mood lately?".into(),
                answer: "Up and down".into(),
            }],
        })
        .await
        .unwrap();

    assert_eq!(out.wellness_score, 64);
    assert_eq!(mock.calls().await, 2);
}

#[tokio::test]
async fn run_json_dispatches_by_name() {
    let mock = MockGenerator::returning(fixtures::story_verdict(true));
    let out = flows(&mock)
        .run_json(
            FlowName::VetStory,
            json!({"story": "Running every morning helped me through a hard winter."}),
        )
        .await
        .unwrap();

    assert_eq!(out["approved"], true);
}

#[tokio::test]
async fn run_json_rejects_malformed_requests() {
    let mock = MockGenerator::failing();
    let err = flows(&mock)
        .run_json(FlowName::PlanDay, json!({"priorities": "Work"}))
        .await
        .unwrap_err();

    assert!(matches!(err, RealmeError::InvalidInput { .. }));
    assert_eq!(mock.calls().await, 0);
}
