// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Leader-only organization view over anonymized member moods.

use std::collections::BTreeMap;

use realme_core::{Identity, Mood, RealmeError};
use realme_flows::{MemberMoods, OrganizationInsightsInput};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Mood counts across an organization. Carries no member identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodDistribution {
    /// Members with at least one record.
    pub reporting_members: usize,
    pub total_records: usize,
    /// Records per mood; every mood is present, zero if unused.
    pub counts: BTreeMap<Mood, usize>,
}

impl MoodDistribution {
    /// Share of records that are Happy or Calm, in percent.
    pub fn positive_percent(&self) -> Option<u8> {
        if self.total_records == 0 {
            return None;
        }
        let positive: usize = self
            .counts
            .iter()
            .filter(|(mood, _)| mood.is_positive())
            .map(|(_, n)| n)
            .sum();
        u8::try_from(positive * 100 / self.total_records).ok()
    }
}

pub fn aggregate_member_moods(members: &[MemberMoods]) -> MoodDistribution {
    let mut counts: BTreeMap<Mood, usize> = Mood::iter().map(|m| (m, 0)).collect();
    for entry in members.iter().flat_map(|m| &m.moods) {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }
    MoodDistribution {
        reporting_members: members.iter().filter(|m| !m.moods.is_empty()).count(),
        total_records: members.iter().map(|m| m.moods.len()).sum(),
        counts,
    }
}

/// Builds the insights request for a leader's organization.
///
/// Member ids are replaced with positional pseudonyms before anything leaves
/// this function.
pub fn organization_insights_input(
    identity: &Identity,
    organization_name: &str,
    members: Vec<MemberMoods>,
) -> Result<OrganizationInsightsInput, RealmeError> {
    if !identity.is_leader || identity.organization_id.is_none() {
        return Err(RealmeError::Unauthorized(format!(
            "{} is not an organization leader",
            identity.email
        )));
    }

    let members = members
        .into_iter()
        .enumerate()
        .map(|(i, m)| MemberMoods {
            member_id: format!("member-{}", i + 1),
            moods: m.moods,
        })
        .collect();

    Ok(OrganizationInsightsInput {
        organization_name: organization_name.to_string(),
        members,
    })
}
