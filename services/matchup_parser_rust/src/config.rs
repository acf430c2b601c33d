//! Configuration for the matchup parser front end.
//!
//! Defaults are overridden by environment variables (a `.env` file is read
//! first), and command-line flags override both.

use std::env;
use std::path::PathBuf;

use spreadline_core::matching::resolver::{DEFAULT_AMBIGUITY_GAP, DEFAULT_MIN_CONFIDENCE};
use spreadline_core::parser::DEFAULT_VENUE_WINDOW;
use spreadline_core::{ParserConfig, ResolverConfig};

#[derive(Debug, Clone)]
pub struct Config {
    /// Resolver confidence floor (default: 0.8)
    pub min_confidence: f64,
    /// Required lead of a fuzzy match over the runner-up (default: 0.2)
    pub ambiguity_gap: f64,
    /// Roster JSON to use instead of the built-in roster
    pub roster_path: Option<PathBuf>,
    /// Max bytes between a home/away word and its team (default: 30)
    pub venue_window: usize,
    /// Pretty-print JSON output (default: false)
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            min_confidence: env::var("MATCHUP_MIN_CONFIDENCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MIN_CONFIDENCE),

            ambiguity_gap: env::var("MATCHUP_AMBIGUITY_GAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_AMBIGUITY_GAP),

            roster_path: env::var("MATCHUP_ROSTER_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),

            venue_window: env::var("MATCHUP_VENUE_WINDOW")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_VENUE_WINDOW),

            pretty: env::var("MATCHUP_PRETTY")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            resolver: ResolverConfig::default()
                .with_min_confidence(self.min_confidence)
                .with_ambiguity_gap(self.ambiguity_gap),
            venue_window: self.venue_window,
            ..ParserConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_carries_thresholds() {
        let config = Config {
            min_confidence: 0.9,
            ambiguity_gap: 0.1,
            roster_path: None,
            venue_window: 12,
            pretty: false,
        };
        let parser = config.parser_config();
        assert_eq!(parser.resolver.min_confidence, 0.9);
        assert_eq!(parser.resolver.ambiguity_gap, 0.1);
        assert_eq!(parser.venue_window, 12);
        assert_eq!(parser.pick_window, ParserConfig::default().pick_window);
    }
}
