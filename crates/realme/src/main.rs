// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Realme - mental-wellness toolkit.
//!
//! Binary entry point: wires configuration, logging, storage, the Gemini
//! adapter, the flows and the wellness store behind a small CLI.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use realme_config::RealmeConfig;
use realme_core::RealmeError;
use realme_flows::RealmeFlows;
use realme_gemini::GeminiGenerator;
use realme_storage::SqliteKeyValueStore;
use realme_wellness::{SystemClock, WellnessStore};
use tracing::error;

/// Realme - mental-wellness toolkit.
#[derive(Parser, Debug)]
#[command(name = "realme", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run any flow by name on a JSON request (inline or @file).
    Flow {
        /// Flow name, e.g. planDay or reframeWorry.
        name: String,
        /// JSON request, or @path to a file containing one.
        input: String,
    },
    /// Analyze a journal entry and record it in the history.
    Journal {
        #[arg(long)]
        email: String,
        text: String,
    },
    /// List the achievement catalog with unlock state.
    Achievements {
        #[arg(long)]
        email: String,
    },
    /// List recorded interactions, newest first.
    History {
        #[arg(long)]
        email: String,
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => realme_config::load_and_validate_path(path),
        None => realme_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            realme_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    if let Err(e) = run(cli.command, &config).await {
        error!(error = %e, "command failed");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &RealmeConfig) -> Result<(), RealmeError> {
    let mut stdout = std::io::stdout().lock();
    match command {
        Commands::Flow { name, input } => {
            commands::flow(&build_flows(config)?, &name, &input, &mut stdout).await
        }
        Commands::Journal { email, text } => {
            let flows = build_flows(config)?;
            let mut store = build_store(config)?;
            commands::journal(&flows, &mut store, &email, &text, &mut stdout).await
        }
        Commands::Achievements { email } => {
            commands::achievements(&mut build_store(config)?, &email, &mut stdout)
        }
        Commands::History { email, limit } => {
            commands::history(&mut build_store(config)?, &email, limit, &mut stdout)
        }
    }
}

fn build_flows(config: &RealmeConfig) -> Result<RealmeFlows, RealmeError> {
    let generator = GeminiGenerator::new(&config.gemini)?;
    Ok(RealmeFlows::new(Arc::new(generator), &config.flows))
}

fn build_store(config: &RealmeConfig) -> Result<WellnessStore, RealmeError> {
    let kv = SqliteKeyValueStore::from_config(&config.storage)?;
    Ok(WellnessStore::new(Arc::new(kv), Arc::new(SystemClock)))
}

/// Installs the global subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("realme={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_history_with_limit() {
        let cli = Cli::try_parse_from([
            "realme", "history", "--email", "a@b.c", "--limit", "3",
        ])
        .unwrap();
        match cli.command {
            Commands::History { email, limit } => {
                assert_eq!(email, "a@b.c");
                assert_eq!(limit, Some(3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::try_parse_from([
            "realme", "flow", "planDay", "@req.json", "--config", "/tmp/realme.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/realme.toml")));
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = realme_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.app.name, "realme");
        assert_eq!(config.flows.max_attempts, 3);
    }
}
