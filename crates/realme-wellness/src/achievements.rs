// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Achievement derivation rules.
//!
//! Pure functions over a read-only view of session state. The store calls
//! [`derive_unlocks`] after every mutation and unlocks whatever it returns.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;
use realme_core::MoodEntry;

use crate::model::{AchievementKey, Goal, Interaction, InteractionKind};

pub const GOAL_GETTER_THRESHOLD: usize = 5;
pub const GOAL_MASTER_THRESHOLD: usize = 10;
pub const MOOD_MAPPER_STREAK: u32 = 7;
pub const MOOD_MARATHONER_STREAK: u32 = 30;

/// The state the unlock rules read.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub goals: &'a [Goal],
    pub moods: &'a [MoodEntry],
    pub interactions: &'a [Interaction],
    pub has_assessment_result: bool,
    pub has_generated_content: bool,
    pub resources_viewed: bool,
}

/// Number of consecutive dates with a mood entry, counting back from `today`.
///
/// Zero when `today` itself has no entry.
pub fn mood_streak(moods: &[MoodEntry], today: NaiveDate) -> u32 {
    let dates: HashSet<NaiveDate> = moods.iter().map(|m| m.date).collect();
    let mut streak = 0;
    let mut day = today;
    while dates.contains(&day) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    streak
}

/// Every achievement the snapshot qualifies for, locked or not.
pub fn derive_unlocks(snapshot: &Snapshot<'_>, today: NaiveDate) -> BTreeSet<AchievementKey> {
    let mut keys = BTreeSet::new();

    let has_kind = |kind: InteractionKind| snapshot.interactions.iter().any(|i| i.kind == kind);
    if has_kind(InteractionKind::Journal) {
        keys.insert(AchievementKey::FirstJournal);
    }
    if snapshot.has_assessment_result || has_kind(InteractionKind::Assessment) {
        keys.insert(AchievementKey::FirstAssessment);
    }

    if !snapshot.goals.is_empty() {
        keys.insert(AchievementKey::FirstGoal);
    }
    let completed = snapshot.goals.iter().filter(|g| g.completed).count();
    if completed >= GOAL_GETTER_THRESHOLD {
        keys.insert(AchievementKey::GoalGetter);
    }
    if completed >= GOAL_MASTER_THRESHOLD {
        keys.insert(AchievementKey::GoalMaster);
    }

    let streak = mood_streak(snapshot.moods, today);
    if streak >= MOOD_MAPPER_STREAK {
        keys.insert(AchievementKey::MoodMapper);
    }
    if streak >= MOOD_MARATHONER_STREAK {
        keys.insert(AchievementKey::MoodMarathoner);
    }

    if snapshot.has_generated_content {
        keys.insert(AchievementKey::ContentExplorer);
    }
    if snapshot.resources_viewed {
        keys.insert(AchievementKey::ResourceSeeker);
    }

    keys
}
