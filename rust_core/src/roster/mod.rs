//! Team roster: the reference data every resolution is made against.
//!
//! This module provides:
//! - The built-in NFL/NBA/NHL roster
//! - JSON loading/saving so a deployment can supply its own roster
//! - Structural checks on caller-supplied rosters

mod nba;
mod nfl;
mod nhl;

use crate::models::{League, TeamRecord};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

pub use nba::NBA_TEAMS;
pub use nfl::NFL_TEAMS;
pub use nhl::NHL_TEAMS;

/// Static seed for one built-in team.
#[derive(Debug, Clone, Copy)]
pub struct TeamSeed {
    pub name: &'static str,
    pub city: &'static str,
    pub abbreviation: &'static str,
    pub venue: &'static str,
    pub home_city: &'static str,
    pub aliases: &'static [&'static str],
}

impl TeamSeed {
    pub const fn new(
        name: &'static str,
        city: &'static str,
        abbreviation: &'static str,
        venue: &'static str,
        home_city: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            city,
            abbreviation,
            venue,
            home_city,
            aliases,
        }
    }

    pub fn to_record(&self, league: League) -> TeamRecord {
        TeamRecord {
            league,
            name: self.name.to_string(),
            city: self.city.to_string(),
            abbreviation: self.abbreviation.to_string(),
            venue: self.venue.to_string(),
            home_city: self.home_city.to_string(),
            aliases: self.aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed roster JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("roster contains no teams")]
    Empty,
    #[error("team #{index} has an empty {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("abbreviation {abbreviation} is used twice in {league}")]
    DuplicateAbbreviation { league: League, abbreviation: String },
}

/// An immutable list of teams. Cheap to clone; records are shared.
#[derive(Debug, Clone)]
pub struct Roster {
    teams: Vec<Arc<TeamRecord>>,
}

impl Roster {
    /// The built-in roster for every supported league.
    pub fn builtin() -> Self {
        let seeds: [(League, &[TeamSeed]); 3] = [
            (League::NBA, NBA_TEAMS),
            (League::NHL, NHL_TEAMS),
            (League::NFL, NFL_TEAMS),
        ];

        let teams = seeds
            .iter()
            .flat_map(|(league, seeds)| seeds.iter().map(move |s| Arc::new(s.to_record(*league))))
            .collect();

        Self { teams }
    }

    /// Build a roster from caller-supplied records, checking that every team
    /// has a name, city and abbreviation and that abbreviations are unique
    /// within a league.
    pub fn from_records(records: Vec<TeamRecord>) -> Result<Self, RosterError> {
        if records.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen: HashSet<(League, String)> = HashSet::new();
        for (index, record) in records.iter().enumerate() {
            for (field, value) in [
                ("name", &record.name),
                ("city", &record.city),
                ("abbreviation", &record.abbreviation),
            ] {
                if value.trim().is_empty() {
                    return Err(RosterError::MissingField { index, field });
                }
            }

            let key = (record.league, record.abbreviation.trim().to_lowercase());
            if !seen.insert(key) {
                return Err(RosterError::DuplicateAbbreviation {
                    league: record.league,
                    abbreviation: record.abbreviation.clone(),
                });
            }
        }

        debug!("Roster built from {} records", records.len());

        Ok(Self {
            teams: records.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a roster from JSON: `[{ "league": "nba", "name": "Lakers", ... }]`.
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let records: Vec<TeamRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Load a roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| {
            warn!("Could not read roster file {}: {}", path.display(), source);
            RosterError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize to the same JSON format `from_json_str` reads.
    pub fn to_json_string(&self) -> Result<String, RosterError> {
        let records: Vec<&TeamRecord> = self.teams.iter().map(|t| t.as_ref()).collect();
        Ok(serde_json::to_string_pretty(&records)?)
    }

    pub fn teams(&self) -> &[Arc<TeamRecord>] {
        &self.teams
    }

    pub fn teams_in(&self, league: League) -> impl Iterator<Item = &Arc<TeamRecord>> + '_ {
        self.teams.iter().filter(move |t| t.league == league)
    }

    /// Find a team by league and abbreviation (case-insensitive).
    pub fn find(&self, league: League, abbreviation: &str) -> Option<&Arc<TeamRecord>> {
        self.teams_in(league)
            .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation.trim()))
    }

    /// Leagues present in this roster, in priority order.
    pub fn leagues(&self) -> Vec<League> {
        League::PRIORITY
            .iter()
            .copied()
            .filter(|l| self.teams.iter().any(|t| t.league == *l))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(league: League, name: &str, city: &str, abbr: &str) -> TeamRecord {
        TeamRecord {
            league,
            name: name.to_string(),
            city: city.to_string(),
            abbreviation: abbr.to_string(),
            venue: String::new(),
            home_city: city.to_string(),
            aliases: vec![],
        }
    }

    #[test]
    fn test_builtin_team_counts() {
        let roster = Roster::builtin();
        assert_eq!(roster.teams_in(League::NFL).count(), 32);
        assert_eq!(roster.teams_in(League::NBA).count(), 30);
        assert_eq!(roster.teams_in(League::NHL).count(), 32);
        assert_eq!(roster.len(), 94);
    }

    #[test]
    fn test_builtin_passes_own_checks() {
        let records: Vec<TeamRecord> = Roster::builtin()
            .teams()
            .iter()
            .map(|t| t.as_ref().clone())
            .collect();
        assert!(Roster::from_records(records).is_ok());
    }

    #[test]
    fn test_find_by_abbreviation() {
        let roster = Roster::builtin();
        let chiefs = roster.find(League::NFL, "kc").unwrap();
        assert_eq!(chiefs.name, "Chiefs");
        assert_eq!(chiefs.full_name(), "Kansas City Chiefs");
        assert!(roster.find(League::NBA, "KC").is_none());
    }

    #[test]
    fn test_leagues_in_priority_order() {
        assert_eq!(
            Roster::builtin().leagues(),
            vec![League::NBA, League::NHL, League::NFL]
        );
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(matches!(Roster::from_records(vec![]), Err(RosterError::Empty)));
    }

    #[test]
    fn test_duplicate_abbreviation_rejected() {
        let records = vec![
            record(League::NBA, "Lakers", "Los Angeles", "LAL"),
            record(League::NBA, "Lasers", "Las Vegas", "lal"),
        ];
        match Roster::from_records(records) {
            Err(RosterError::DuplicateAbbreviation { league, .. }) => {
                assert_eq!(league, League::NBA)
            }
            other => panic!("expected duplicate abbreviation, got {:?}", other),
        }
    }

    #[test]
    fn test_same_abbreviation_across_leagues_allowed() {
        let records = vec![
            record(League::NBA, "Hawks", "Atlanta", "ATL"),
            record(League::NFL, "Falcons", "Atlanta", "ATL"),
        ];
        assert_eq!(Roster::from_records(records).unwrap().len(), 2);
    }

    #[test]
    fn test_missing_field_rejected() {
        let records = vec![record(League::NHL, "Kraken", "", "SEA")];
        assert!(matches!(
            Roster::from_records(records),
            Err(RosterError::MissingField { index: 0, field: "city" })
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let roster = Roster::from_records(vec![record(League::NHL, "Kraken", "Seattle", "SEA")])
            .unwrap();
        let json = roster.to_json_string().unwrap();
        let loaded = Roster::from_json_str(&json).unwrap();
        assert_eq!(loaded.teams()[0].as_ref(), roster.teams()[0].as_ref());
    }

    #[test]
    fn test_json_aliases_optional() {
        let json = r#"[{"league":"nfl","name":"Bills","city":"Buffalo","abbreviation":"BUF",
                        "venue":"Highmark Stadium","home_city":"Orchard Park"}]"#;
        let roster = Roster::from_json_str(json).unwrap();
        assert!(roster.teams()[0].aliases.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Roster::from_json_str("{not json"),
            Err(RosterError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Roster::load("/nonexistent/roster.json").unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }
}
