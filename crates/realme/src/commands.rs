// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand handlers. Output goes to a caller-supplied writer.

use std::io::Write;
use std::str::FromStr;

use realme_core::{Identity, RealmeError};
use realme_flows::{FlowName, JournalEntryInput, RealmeFlows};
use realme_wellness::{Interaction, InteractionKind, WellnessStore};
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::debug;

fn io_err(e: std::io::Error) -> RealmeError {
    RealmeError::Internal(format!("cannot write output: {e}"))
}

/// Reads a flow request given inline or as `@path`.
pub async fn read_request(flow: &str, raw: &str) -> Result<Value, RealmeError> {
    let text = match raw.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            RealmeError::InvalidInput {
                flow: flow.to_string(),
                violations: vec![format!("cannot read {path}: {e}")],
            }
        })?,
        None => raw.to_string(),
    };
    serde_json::from_str(&text).map_err(|e| RealmeError::InvalidInput {
        flow: flow.to_string(),
        violations: vec![format!("request is not valid JSON: {e}")],
    })
}

/// `realme flow <name> <json|@file>`
pub async fn flow(
    flows: &RealmeFlows,
    name: &str,
    raw: &str,
    out: &mut impl Write,
) -> Result<(), RealmeError> {
    let flow_name = FlowName::from_str(name).map_err(|_| {
        let known: Vec<String> = FlowName::iter().map(|f| f.to_string()).collect();
        RealmeError::InvalidInput {
            flow: name.to_string(),
            violations: vec![format!("unknown flow, expected one of {}", known.join(", "))],
        }
    })?;
    let request = read_request(name, raw).await?;
    let response = flows.run_json(flow_name, request).await?;
    let pretty = serde_json::to_string_pretty(&response)
        .map_err(|e| RealmeError::Internal(e.to_string()))?;
    writeln!(out, "{pretty}").map_err(io_err)
}

/// `realme journal --email <e> <text>`
pub async fn journal(
    flows: &RealmeFlows,
    store: &mut WellnessStore,
    email: &str,
    text: &str,
    out: &mut impl Write,
) -> Result<(), RealmeError> {
    store.login(Identity::member(email));

    let input = JournalEntryInput {
        entry: text.to_string(),
    };
    let analysis = flows.analyze_journal_entry(&input).await?;

    let interaction = Interaction::new(
        InteractionKind::Journal,
        format!("Journal: {}", analysis.sentiment),
        text,
        store.now(),
    )
    .with_exchange(&input, &analysis)?;
    store.record_interaction(interaction)?;

    writeln!(out, "Sentiment: {}", analysis.sentiment).map_err(io_err)?;
    if !analysis.themes.is_empty() {
        writeln!(out, "Themes: {}", analysis.themes.join(", ")).map_err(io_err)?;
    }
    writeln!(out, "\n{}\n\nTry this: {}", analysis.insights, analysis.suggestion)
        .map_err(io_err)?;

    while let Some(achievement) = store.recently_unlocked() {
        writeln!(
            out,
            "\nAchievement unlocked: {} ({})",
            achievement.name, achievement.description
        )
        .map_err(io_err)?;
        store.clear_recently_unlocked();
    }

    store.logout();
    Ok(())
}

/// `realme achievements --email <e>`
pub fn achievements(
    store: &mut WellnessStore,
    email: &str,
    out: &mut impl Write,
) -> Result<(), RealmeError> {
    store.login(Identity::member(email));
    for a in store.achievements() {
        let mark = if a.unlocked { "x" } else { " " };
        writeln!(
            out,
            "[{mark}] {:<18} {:<16} {}",
            a.name,
            a.id.icon(),
            a.description
        )
        .map_err(io_err)?;
    }
    store.logout();
    Ok(())
}

/// `realme history --email <e> [--limit n]`
pub fn history(
    store: &mut WellnessStore,
    email: &str,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<(), RealmeError> {
    store.login(Identity::member(email));
    let interactions = store.interactions();
    debug!(total = interactions.len(), ?limit, "listing history");

    if interactions.is_empty() {
        writeln!(out, "No interactions yet.").map_err(io_err)?;
    }
    for i in interactions.iter().take(limit.unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "{}  {:<10} {}",
            i.timestamp.format("%Y-%m-%d %H:%M"),
            i.kind,
            i.title
        )
        .map_err(io_err)?;
    }
    store.logout();
    Ok(())
}
