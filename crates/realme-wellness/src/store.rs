// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The session wellness store.
//!
//! Holds one user's session data in memory and writes achievements and the
//! interaction log through to a [`KeyValueStore`] under user-scoped keys.
//! Every mutation ends with [`WellnessStore::recompute_achievements`].

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use realme_core::{Identity, KeyValueStore, MoodEntry, PluginAdapter, RealmeError};
use realme_flows::{AssessmentResult, ContentSuggestions};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::achievements::{Snapshot, derive_unlocks};
use crate::clock::Clock;
use crate::model::{Achievement, AchievementKey, Goal, Interaction, initial_achievements};

pub const ACHIEVEMENTS_PREFIX: &str = "achievements";
pub const INTERACTIONS_PREFIX: &str = "interactions";

/// In-memory state of the logged-in user.
#[derive(Debug)]
struct Session {
    identity: Identity,
    moods: Vec<MoodEntry>,
    goals: Vec<Goal>,
    achievements: Vec<Achievement>,
    interactions: Vec<Interaction>,
    assessment_result: Option<AssessmentResult>,
    generated_content: Option<ContentSuggestions>,
    resources_viewed: bool,
    recently_unlocked: VecDeque<AchievementKey>,
}

impl Session {
    fn new(identity: Identity, achievements: Vec<Achievement>, interactions: Vec<Interaction>) -> Self {
        Self {
            identity,
            moods: Vec::new(),
            goals: Vec::new(),
            achievements,
            interactions,
            assessment_result: None,
            generated_content: None,
            resources_viewed: false,
            recently_unlocked: VecDeque::new(),
        }
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            goals: &self.goals,
            moods: &self.moods,
            interactions: &self.interactions,
            has_assessment_result: self.assessment_result.is_some(),
            has_generated_content: self.generated_content.is_some(),
            resources_viewed: self.resources_viewed,
        }
    }
}

/// Session-scoped wellness data plus its achievement rules.
pub struct WellnessStore {
    kv: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    session: Option<Session>,
}

impl std::fmt::Debug for WellnessStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WellnessStore")
            .field("kv", &self.kv.name())
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl WellnessStore {
    pub fn new(kv: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            kv,
            clock,
            session: None,
        }
    }

    // --- Session lifecycle ---

    /// Starts a session, restoring persisted achievements and history.
    ///
    /// Missing or unreadable records fall back to the locked catalog and an
    /// empty log. Any session already open is closed first.
    pub fn login(&mut self, identity: Identity) {
        if self.session.is_some() {
            self.logout();
        }

        let achievements = self
            .load::<Vec<Achievement>>(&identity.scoped_key(ACHIEVEMENTS_PREFIX))
            .map(merge_with_catalog)
            .unwrap_or_else(initial_achievements);
        let interactions = self
            .load::<Vec<Interaction>>(&identity.scoped_key(INTERACTIONS_PREFIX))
            .unwrap_or_default();

        info!(
            email = %identity.email,
            unlocked = achievements.iter().filter(|a| a.unlocked).count(),
            interactions = interactions.len(),
            "session started"
        );
        self.session = Some(Session::new(identity, achievements, interactions));
        self.recompute_achievements();
    }

    /// Ends the session. Persisted achievements and history stay in storage.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(email = %session.identity.email, "session ended");
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    /// Current instant from the store's clock, for stamping interactions.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    // --- Read access ---

    /// Mood entries, oldest date first, one per date.
    pub fn moods(&self) -> &[MoodEntry] {
        match &self.session {
            Some(s) => &s.moods,
            None => &[],
        }
    }

    pub fn goals(&self) -> &[Goal] {
        match &self.session {
            Some(s) => &s.goals,
            None => &[],
        }
    }

    pub fn achievements(&self) -> &[Achievement] {
        match &self.session {
            Some(s) => &s.achievements,
            None => &[],
        }
    }

    /// Interaction log, newest first.
    pub fn interactions(&self) -> &[Interaction] {
        match &self.session {
            Some(s) => &s.interactions,
            None => &[],
        }
    }

    pub fn assessment_result(&self) -> Option<&AssessmentResult> {
        self.session.as_ref()?.assessment_result.as_ref()
    }

    pub fn generated_content(&self) -> Option<&ContentSuggestions> {
        self.session.as_ref()?.generated_content.as_ref()
    }

    pub fn is_unlocked(&self, key: AchievementKey) -> bool {
        self.achievements()
            .iter()
            .any(|a| a.id == key && a.unlocked)
    }

    /// The oldest unlock notification not yet dismissed.
    pub fn recently_unlocked(&self) -> Option<&Achievement> {
        let session = self.session.as_ref()?;
        let key = *session.recently_unlocked.front()?;
        session.achievements.iter().find(|a| a.id == key)
    }

    /// Dismisses the oldest unlock notification.
    pub fn clear_recently_unlocked(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.recently_unlocked.pop_front();
        }
    }

    // --- Mutations ---

    /// Upserts mood entries by date; a later entry for a date replaces the earlier one.
    pub fn record_mood(
        &mut self,
        entries: impl IntoIterator<Item = MoodEntry>,
    ) -> Result<(), RealmeError> {
        let session = self.session_mut()?;
        for entry in entries {
            match session.moods.binary_search_by_key(&entry.date, |m| m.date) {
                Ok(idx) => session.moods[idx] = entry,
                Err(idx) => session.moods.insert(idx, entry),
            }
        }
        self.recompute_achievements();
        Ok(())
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) -> Result<(), RealmeError> {
        self.session_mut()?.goals = goals;
        self.recompute_achievements();
        Ok(())
    }

    /// Adds an open goal and returns its id.
    pub fn add_goal(&mut self, text: impl Into<String>) -> Result<String, RealmeError> {
        let goal = Goal::new(text);
        let id = goal.id.clone();
        self.session_mut()?.goals.push(goal);
        self.recompute_achievements();
        Ok(id)
    }

    /// Flips a goal's completion flag and returns the new value.
    pub fn toggle_goal(&mut self, id: &str) -> Result<bool, RealmeError> {
        let goal = self
            .session_mut()?
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| not_found_goal(id))?;
        goal.completed = !goal.completed;
        let completed = goal.completed;
        self.recompute_achievements();
        Ok(completed)
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<(), RealmeError> {
        let goals = &mut self.session_mut()?.goals;
        let idx = goals
            .iter()
            .position(|g| g.id == id)
            .ok_or_else(|| not_found_goal(id))?;
        goals.remove(idx);
        self.recompute_achievements();
        Ok(())
    }

    /// Prepends to the history log and persists the whole log.
    pub fn record_interaction(&mut self, interaction: Interaction) -> Result<(), RealmeError> {
        let session = self.session_mut()?;
        debug!(kind = %interaction.kind, id = %interaction.id, "interaction recorded");
        session.interactions.insert(0, interaction);
        self.persist_interactions();
        self.recompute_achievements();
        Ok(())
    }

    pub fn set_assessment_result(&mut self, result: AssessmentResult) -> Result<(), RealmeError> {
        self.session_mut()?.assessment_result = Some(result);
        self.recompute_achievements();
        Ok(())
    }

    pub fn set_generated_content(&mut self, content: ContentSuggestions) -> Result<(), RealmeError> {
        self.session_mut()?.generated_content = Some(content);
        self.recompute_achievements();
        Ok(())
    }

    pub fn mark_resources_viewed(&mut self) -> Result<(), RealmeError> {
        self.session_mut()?.resources_viewed = true;
        self.recompute_achievements();
        Ok(())
    }

    /// Unlocks `key`, persisting the set and queueing one notification.
    ///
    /// Returns `false` without side effects when already unlocked or when no
    /// session is open.
    pub fn unlock_achievement(&mut self, key: AchievementKey) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(achievement) = session.achievements.iter_mut().find(|a| a.id == key) else {
            return false;
        };
        if achievement.unlocked {
            return false;
        }

        achievement.unlocked = true;
        session.recently_unlocked.push_back(key);
        info!(achievement = %key, email = %session.identity.email, "achievement unlocked");
        self.persist_achievements();
        true
    }

    /// Re-evaluates the unlock rules and returns what was newly unlocked.
    pub fn recompute_achievements(&mut self) -> Vec<AchievementKey> {
        let today = self.clock.today();
        let Some(session) = self.session.as_ref() else {
            return Vec::new();
        };
        let due = derive_unlocks(&session.snapshot(), today);
        due.into_iter()
            .filter(|key| self.unlock_achievement(*key))
            .collect()
    }

    // --- Persistence ---

    fn session_mut(&mut self) -> Result<&mut Session, RealmeError> {
        self.session
            .as_mut()
            .ok_or_else(|| RealmeError::Unauthorized("no active session".to_string()))
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored state, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed stored state, using defaults");
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(|e| RealmeError::Internal(e.to_string()))
            .and_then(|json| self.kv.set(key, &json));
        if let Err(e) = result {
            warn!(key, error = %e, "failed to persist state");
        }
    }

    fn persist_achievements(&self) {
        if let Some(session) = &self.session {
            self.save(
                &session.identity.scoped_key(ACHIEVEMENTS_PREFIX),
                &session.achievements,
            );
        }
    }

    fn persist_interactions(&self) {
        if let Some(session) = &self.session {
            self.save(
                &session.identity.scoped_key(INTERACTIONS_PREFIX),
                &session.interactions,
            );
        }
    }
}

fn not_found_goal(id: &str) -> RealmeError {
    RealmeError::NotFound {
        kind: "goal",
        id: id.to_string(),
    }
}

/// Lays stored unlock flags over the current catalog.
///
/// Catalog order, names and descriptions win; unknown stored keys are dropped.
fn merge_with_catalog(stored: Vec<Achievement>) -> Vec<Achievement> {
    let mut catalog = initial_achievements();
    for achievement in &mut catalog {
        achievement.unlocked = stored
            .iter()
            .any(|s| s.id == achievement.id && s.unlocked);
    }
    catalog
}
