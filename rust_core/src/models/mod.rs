// Shared models for Spreadline parsing
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::league_config::get_league_config;
use crate::validator::{self, ValidationReport};

// ============================================================================
// League Enum
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    NFL,
    NBA,
    NHL,
}

impl League {
    /// Every supported league, in combined-view priority order.
    pub const PRIORITY: [League; 3] = [League::NBA, League::NHL, League::NFL];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::NFL => "nfl",
            League::NBA => "nba",
            League::NHL => "nhl",
        }
    }

    pub fn from_code(code: &str) -> Option<League> {
        get_league_config(code).map(|c| c.league)
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Team Records
// ============================================================================

/// A team as it appears in the roster. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub league: League,
    /// Canonical team name without the city (e.g. "Chiefs")
    pub name: String,
    /// City or region the team is named after (e.g. "Kansas City", "New England")
    pub city: String,
    pub abbreviation: String,
    /// Home venue name (e.g. "Arrowhead Stadium")
    pub venue: String,
    /// City the venue is actually in (e.g. "Foxborough" for New England)
    pub home_city: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl TeamRecord {
    /// "Kansas City Chiefs"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }

    /// Teams are identified by league and abbreviation.
    pub fn is_same_team(&self, other: &TeamRecord) -> bool {
        self.league == other.league && self.abbreviation.eq_ignore_ascii_case(&other.abbreviation)
    }
}

/// How the resolver matched an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Abbreviation,
    Alias,
    Contains,
    Fuzzy,
}

impl MatchKind {
    /// Tie-break rank when two candidates share a score. Higher wins.
    pub fn rank(&self) -> u8 {
        match self {
            MatchKind::Abbreviation => 3,
            MatchKind::Alias => 2,
            MatchKind::Contains => 1,
            MatchKind::Fuzzy => 0,
        }
    }
}

/// Output of a successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTeam {
    pub team: Arc<TeamRecord>,
    pub league: League,
    /// Normalized alias that won
    pub alias: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    pub kind: MatchKind,
}

// ============================================================================
// Parsed Matchups
// ============================================================================

/// Venue from the pick team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
    Neutral,
}

impl Venue {
    /// The same venue seen from the other team.
    pub fn flipped(&self) -> Venue {
        match self {
            Venue::Home => Venue::Away,
            Venue::Away => Venue::Home,
            Venue::Neutral => Venue::Neutral,
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Venue::Home => "home",
            Venue::Away => "away",
            Venue::Neutral => "neutral",
        };
        f.write_str(s)
    }
}

/// A fully parsed spread bet request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedMatchup {
    pub league: League,
    pub pick_team: Arc<TeamRecord>,
    pub opponent_team: Arc<TeamRecord>,
    /// Spread from the pick team's perspective (negative = pick favored)
    pub spread: f64,
    pub venue: Venue,
    /// True when the venue was not stated and neutral was assumed
    pub venue_assumed: bool,
    /// American odds, if the text gave any
    pub odds: Option<i32>,
    pub raw_text: String,
    /// Every assumption made while parsing, in order
    pub notes: Vec<String>,
}

impl ParsedMatchup {
    pub fn to_draft(&self) -> MatchupDraft {
        MatchupDraft::from(self)
    }

    pub fn validate(&self) -> ValidationReport {
        validator::validate(&self.to_draft())
    }
}

/// A matchup as a caller may assemble it by hand, with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchupDraft {
    pub league: Option<League>,
    pub pick_team: Option<Arc<TeamRecord>>,
    pub opponent_team: Option<Arc<TeamRecord>>,
    pub spread: Option<f64>,
    pub venue: Option<Venue>,
    pub odds: Option<i32>,
}

impl From<&ParsedMatchup> for MatchupDraft {
    fn from(parsed: &ParsedMatchup) -> Self {
        Self {
            league: Some(parsed.league),
            pick_team: Some(Arc::clone(&parsed.pick_team)),
            opponent_team: Some(Arc::clone(&parsed.opponent_team)),
            spread: Some(parsed.spread),
            venue: Some(parsed.venue),
            odds: parsed.odds,
        }
    }
}

/// Fields a caller should re-prompt for after a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClarificationField {
    League,
    Teams,
    Spread,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_codes_round_trip() {
        for league in League::PRIORITY {
            assert_eq!(League::from_code(league.as_str()), Some(league));
        }
        assert_eq!(League::from_code(" NBA "), Some(League::NBA));
        assert_eq!(League::from_code("mlb"), None);
    }

    #[test]
    fn test_match_kind_rank() {
        assert!(MatchKind::Abbreviation.rank() > MatchKind::Alias.rank());
        assert!(MatchKind::Alias.rank() > MatchKind::Contains.rank());
        assert!(MatchKind::Contains.rank() > MatchKind::Fuzzy.rank());
    }

    #[test]
    fn test_venue_flipped() {
        assert_eq!(Venue::Home.flipped(), Venue::Away);
        assert_eq!(Venue::Away.flipped(), Venue::Home);
        assert_eq!(Venue::Neutral.flipped(), Venue::Neutral);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&League::NHL).unwrap(), "\"nhl\"");
        assert_eq!(serde_json::to_string(&MatchKind::Fuzzy).unwrap(), "\"fuzzy\"");
        assert_eq!(
            serde_json::to_string(&ClarificationField::Spread).unwrap(),
            "\"spread\""
        );
    }
}
