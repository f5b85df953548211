// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session wellness store for Realme.
//!
//! Owns the logged-in user's moods, goals, achievements and interaction
//! history, derives achievement unlocks from that state, and persists
//! achievements and history through a [`realme_core::KeyValueStore`].

pub mod achievements;
pub mod clock;
pub mod model;
pub mod organization;
pub mod store;

pub use achievements::{Snapshot, derive_unlocks, mood_streak};
pub use clock::{Clock, FixedClock, SystemClock};
pub use model::{
    Achievement, AchievementKey, Goal, Interaction, InteractionKind, initial_achievements,
};
pub use organization::{MoodDistribution, aggregate_member_moods, organization_insights_input};
pub use store::WellnessStore;
