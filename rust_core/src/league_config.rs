//! League configuration for supported sports.
//!
//! This module provides:
//! - Static configuration for all supported leagues
//! - Keyword lookup used for explicit league detection in free text

use crate::models::League;

/// Configuration for a single league.
#[derive(Debug, Clone)]
pub struct LeagueConfig {
    pub league: League,
    /// League code (e.g., "nfl", "nba")
    pub league_code: &'static str,
    /// Whole-word keywords that name the league explicitly
    pub keywords: &'static [&'static str],
}

/// Static configuration for all supported leagues, in combined-view priority order.
pub static LEAGUE_CONFIGS: &[LeagueConfig] = &[
    // Basketball
    LeagueConfig {
        league: League::NBA,
        league_code: "nba",
        keywords: &["nba", "basketball", "hoops"],
    },
    // Hockey
    LeagueConfig {
        league: League::NHL,
        league_code: "nhl",
        keywords: &["nhl", "hockey", "puck line", "puckline"],
    },
    // Football
    LeagueConfig {
        league: League::NFL,
        league_code: "nfl",
        keywords: &["nfl", "football"],
    },
];

/// Get league configuration by code.
pub fn get_league_config(league: &str) -> Option<&'static LeagueConfig> {
    LEAGUE_CONFIGS
        .iter()
        .find(|c| c.league_code.eq_ignore_ascii_case(league.trim()))
}

/// Find the league a normalized keyword phrase names, if any.
pub fn league_for_keyword(keyword: &str) -> Option<League> {
    LEAGUE_CONFIGS
        .iter()
        .find(|c| c.keywords.iter().any(|k| *k == keyword))
        .map(|c| c.league)
}

// ============================================================================
// Tests
// ============================================================================
