// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session records: goals, achievements, interactions.

use chrono::{DateTime, Utc};
use realme_core::{Icon, RealmeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A user-defined goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Goal {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

/// Key of an entry in the fixed achievement catalog.
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
)]
pub enum AchievementKey {
    FirstJournal,
    FirstAssessment,
    FirstGoal,
    GoalGetter,
    GoalMaster,
    MoodMapper,
    MoodMarathoner,
    ContentExplorer,
    ResourceSeeker,
}

impl AchievementKey {
    pub fn name(self) -> &'static str {
        match self {
            AchievementKey::FirstJournal => "Dear Diary",
            AchievementKey::FirstAssessment => "Self-Aware",
            AchievementKey::FirstGoal => "Goal Setter",
            AchievementKey::GoalGetter => "Goal Getter",
            AchievementKey::GoalMaster => "Goal Master",
            AchievementKey::MoodMapper => "Mood Mapper",
            AchievementKey::MoodMarathoner => "Mood Marathoner",
            AchievementKey::ContentExplorer => "Content Explorer",
            AchievementKey::ResourceSeeker => "Resource Seeker",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AchievementKey::FirstJournal => "Write your first journal entry.",
            AchievementKey::FirstAssessment => "Complete your first wellness assessment.",
            AchievementKey::FirstGoal => "Set your first goal.",
            AchievementKey::GoalGetter => "Complete 5 goals.",
            AchievementKey::GoalMaster => "Complete 10 goals.",
            AchievementKey::MoodMapper => "Log your mood 7 days in a row.",
            AchievementKey::MoodMarathoner => "Log your mood 30 days in a row.",
            AchievementKey::ContentExplorer => "Get your first personalized content suggestions.",
            AchievementKey::ResourceSeeker => "Visit the resource directory.",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            AchievementKey::FirstJournal => Icon::BookOpen,
            AchievementKey::FirstAssessment => Icon::ClipboardList,
            AchievementKey::FirstGoal => Icon::Target,
            AchievementKey::GoalGetter | AchievementKey::GoalMaster => Icon::Trophy,
            AchievementKey::MoodMapper => Icon::CalendarCheck,
            AchievementKey::MoodMarathoner => Icon::Flame,
            AchievementKey::ContentExplorer => Icon::Sparkles,
            AchievementKey::ResourceSeeker => Icon::LifeBuoy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementKey,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub unlocked: bool,
}

impl Achievement {
    pub fn locked(id: AchievementKey) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            unlocked: false,
        }
    }
}

/// The full catalog in display order, everything locked.
pub fn initial_achievements() -> Vec<Achievement> {
    AchievementKey::iter().map(Achievement::locked).collect()
}

/// Feature that produced an interaction record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum InteractionKind {
    Journal,
    WorryJar,
    Assessment,
    Planner,
}

impl InteractionKind {
    pub fn icon(self) -> Icon {
        match self {
            InteractionKind::Journal => Icon::BookOpen,
            InteractionKind::WorryJar => Icon::Brain,
            InteractionKind::Assessment => Icon::ClipboardList,
            InteractionKind::Planner => Icon::CalendarClock,
        }
    }
}

/// One completed flow invocation, kept in the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Request and response of the invocation, opaque to the store.
    #[serde(default)]
    pub data: Value,
}

impl Interaction {
    pub fn new(
        kind: InteractionKind,
        title: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            content: content.into(),
            timestamp,
            data: Value::Null,
        }
    }

    /// Attaches the flow request and response as `{"input": .., "output": ..}`.
    pub fn with_exchange<I: Serialize, O: Serialize>(
        mut self,
        input: &I,
        output: &O,
    ) -> Result<Self, RealmeError> {
        let to_value = |v: serde_json::Result<Value>| {
            v.map_err(|e| RealmeError::Internal(format!("cannot serialize interaction data: {e}")))
        };
        self.data = serde_json::json!({
            "input": to_value(serde_json::to_value(input))?,
            "output": to_value(serde_json::to_value(output))?,
        });
        Ok(self)
    }
}
