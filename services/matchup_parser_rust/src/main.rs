mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use spreadline_core::{AliasIndex, League, MatchupParser, ParsingResult, Roster};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Parse free-text spread bets into structured matchups (JSON, one per line).
#[derive(Debug, Parser)]
#[command(name = "matchup_parser", version)]
struct Cli {
    /// Sentences to parse; read one per line from stdin when omitted
    texts: Vec<String>,

    /// League to assume (nfl, nba, nhl)
    #[arg(long, value_parser = parse_league)]
    league: Option<League>,

    /// Roster JSON file replacing the built-in roster
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Resolver confidence floor
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

fn parse_league(code: &str) -> Result<League, String> {
    League::from_code(code).ok_or_else(|| format!("unknown league '{}'", code))
}

fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(path) = cli.roster.clone() {
        config.roster_path = Some(path);
    }
    if let Some(min_confidence) = cli.min_confidence {
        config.min_confidence = min_confidence;
    }
    config.pretty |= cli.pretty;

    let index = match &config.roster_path {
        Some(path) => {
            let roster = Roster::load(path)
                .with_context(|| format!("Failed to load roster from {}", path.display()))?;
            info!("Loaded {} teams from {}", roster.len(), path.display());
            Arc::new(AliasIndex::new(&roster))
        }
        None => AliasIndex::builtin(),
    };
    let parser = MatchupParser::with_config(index, config.parser_config());

    let texts = if cli.texts.is_empty() {
        read_stdin_lines()?
    } else {
        cli.texts
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for text in &texts {
        let outcome = parser.parse_with_league(text, cli.league);
        if let Err(err) = &outcome {
            warn!("{:?}: {}", text, err);
        }
        let result = ParsingResult::from(outcome);
        let json = if config.pretty {
            serde_json::to_string_pretty(&result)
        } else {
            serde_json::to_string(&result)
        }
        .context("Failed to serialize parse result")?;
        writeln!(out, "{}", json).context("Failed to write output")?;
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}
