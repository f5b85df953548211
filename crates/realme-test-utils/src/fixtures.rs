// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned flow outputs and dates.

use chrono::NaiveDate;
use serde_json::{Value, json};

/// A fixed "today" shared by date-sensitive tests.
pub fn today() -> NaiveDate {
    date(2026, 6, 15)
}

/// Builds a date, panicking on an invalid one (test data only).
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        panic!("invalid fixture date {year}-{month}-{day}")
    })
}

/// A valid `planDay` reply.
pub fn day_plan() -> Value {
    json!({
        "summary": "A gentle day with two focused blocks.",
        "timeBlocks": [
            {"time": "09:00-10:30", "activity": "Write report draft", "category": "Work"},
            {"time": "12:00-12:30", "activity": "Walk outside", "category": "Wellness"}
        ],
        "wellnessTip": "Drink a glass of water before each block."
    })
}

/// A valid `analyzeJournalEntry` reply.
pub fn journal_analysis() -> Value {
    json!({
        "sentiment": "Mixed",
        "themes": ["work stress", "gratitude"],
        "insights": "You noticed the good moments even on a hard day.",
        "suggestion": "Write down one thing you are looking forward to tomorrow."
    })
}

/// A valid `reframeWorry` reply.
pub fn worry_reframe() -> Value {
    json!({
        "reframedThought": "I have prepared, and one exam does not define me.",
        "copingStrategies": ["Review notes for 20 minutes", "Box breathing"],
        "withinControl": true
    })
}

/// A valid `mentalHealthAssessment` reply.
pub fn assessment_result() -> Value {
    json!({
        "summary": "You are coping, with some strain around sleep.",
        "wellnessScore": 64,
        "strengths": ["Supportive friends"],
        "areasForGrowth": ["Sleep routine"],
        "recommendations": ["Keep a consistent bedtime"]
    })
}

/// A valid `personalizedContentSuggestions` reply.
pub fn content_suggestions() -> Value {
    json!({
        "suggestions": [
            {"title": "Five-minute body scan", "kind": "Meditation", "description": "Eases tension."}
        ]
    })
}

/// A valid `generateArticle` reply.
pub fn article() -> Value {
    json!({
        "title": "Sleep hygiene basics",
        "content": "## Why sleep matters\n\nRest restores you.",
        "readingMinutes": 4
    })
}

/// A valid `generateOrganizationInsights` reply.
pub fn organization_insights() -> Value {
    json!({
        "overallSentiment": "Cautiously positive",
        "summary": "Most of the team reports calm or happy days.",
        "recommendations": ["Keep Friday afternoons meeting-free"]
    })
}

/// A valid `vetStory` reply.
pub fn story_verdict(approved: bool) -> Value {
    json!({
        "approved": approved,
        "reason": if approved { "Supportive and safe to share." } else { "Contains personal data." }
    })
}

/// A valid `correctText` reply.
pub fn corrected_text(text: &str) -> Value {
    json!({ "correctedText": text })
}
