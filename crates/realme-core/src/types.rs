// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Realme toolkit.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the kind of adapter behind a boundary trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Generation,
    Persistence,
}

/// How the user feels, as picked from the five-face mood scale.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum Mood {
    Happy,
    Calm,
    Okay,
    Anxious,
    Sad,
}

impl Mood {
    /// Whether the mood counts toward the positive side of an aggregate.
    pub fn is_positive(self) -> bool {
        matches!(self, Mood::Happy | Mood::Calm)
    }
}

/// A single mood log for one calendar date.
///
/// At most one entry per date is current; a later write for the same date
/// supersedes the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MoodEntry {
    pub mood: Mood,
    pub date: NaiveDate,
}

impl MoodEntry {
    pub fn new(mood: Mood, date: NaiveDate) -> Self {
        Self { mood, date }
    }
}

/// The identity handed over by the authentication provider.
///
/// Only `email` (persistence namespace) and the leader/organization flags
/// (authorization) are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub email: String,
    #[serde(default)]
    pub is_leader: bool,
    #[serde(default)]
    pub organization_id: Option<String>,
}

impl Identity {
    /// A member identity with no leadership role.
    pub fn member(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_leader: false,
            organization_id: None,
        }
    }

    /// A leader of the given organization.
    pub fn leader(email: impl Into<String>, organization_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            is_leader: true,
            organization_id: Some(organization_id.into()),
        }
    }

    /// Builds the namespaced persistence key `<prefix>-<email>`.
    pub fn scoped_key(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.email)
    }
}

/// UI icon associated with an achievement or interaction category.
///
/// Resolved by exhaustive matches so every category has exactly one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    BookOpen,
    Brain,
    ClipboardList,
    Target,
    Trophy,
    CalendarCheck,
    Flame,
    Sparkles,
    LifeBuoy,
    CalendarClock,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn mood_display_and_parse_round_trip() {
        for mood in Mood::iter() {
            let parsed = Mood::from_str(&mood.to_string()).expect("should parse back");
            assert_eq!(parsed, mood);
        }
        assert_eq!(Mood::iter().count(), 5);
    }

    #[test]
    fn mood_entry_serializes_date_as_iso() {
        let entry = MoodEntry::new(Mood::Calm, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["mood"], "Calm");
        assert_eq!(json["date"], "2026-03-01");
    }

    #[test]
    fn identity_scoped_key_uses_email() {
        let id = Identity::member("ana@example.com");
        assert_eq!(id.scoped_key("achievements"), "achievements-ana@example.com");
    }

    #[test]
    fn identity_deserializes_camel_case_flags() {
        let id: Identity = serde_json::from_str(
            r#"{"email":"lead@example.com","isLeader":true,"organizationId":"org-1"}"#,
        )
        .unwrap();
        assert!(id.is_leader);
        assert_eq!(id.organization_id.as_deref(), Some("org-1"));
    }

    #[test]
    fn icon_display_is_kebab_case() {
        assert_eq!(Icon::BookOpen.to_string(), "book-open");
        assert_eq!(Icon::CalendarClock.to_string(), "calendar-clock");
    }
}
