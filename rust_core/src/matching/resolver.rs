//! Team resolution: free text to a single roster team, or a reason why not.
//!
//! Every alias in scope is scored against the normalized input:
//! - exact abbreviation match: 1.0
//! - exact match on any other alias: 1.0
//! - whole-word containment of the alias: `contains_score`
//! - otherwise normalized Levenshtein similarity (fuzzy)
//!
//! The best candidate per team is kept, and the winner must clear the
//! confidence floor, beat the runner-up team clearly when fuzzy, and be
//! visibly anchored in the input when fuzzy.

use std::cmp::Ordering;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use super::alias_index::{AliasEntry, AliasForm, AliasIndex};
use super::{contains_phrase, is_anchored, normalize, similarity};
use crate::models::{ClarificationField, League, MatchKind, ResolvedTeam};

pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_AMBIGUITY_GAP: f64 = 0.2;
pub const CONTAINS_SCORE: f64 = 0.97;
pub const MIN_CONTAINS_ALIAS_LEN: usize = 3;
pub const ANCHOR_PREFIX_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Scores below this are rejected
    pub min_confidence: f64,
    /// Required lead of a fuzzy winner over the runner-up team
    pub ambiguity_gap: f64,
    pub contains_score: f64,
    pub min_contains_alias_len: usize,
    pub anchor_prefix_len: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            ambiguity_gap: DEFAULT_AMBIGUITY_GAP,
            contains_score: CONTAINS_SCORE,
            min_contains_alias_len: MIN_CONTAINS_ALIAS_LEN,
            anchor_prefix_len: ANCHOR_PREFIX_LEN,
        }
    }
}

impl ResolverConfig {
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_ambiguity_gap(mut self, ambiguity_gap: f64) -> Self {
        self.ambiguity_gap = ambiguity_gap;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("no team matches \"{input}\" with enough confidence")]
    NoConfidentMatch {
        input: String,
        /// Closest alias and its score, for diagnostics
        closest: Option<(String, f64)>,
    },
    #[error("\"{input}\" could be {}", .candidates.join(" or "))]
    AmbiguousMatch {
        input: String,
        candidates: Vec<String>,
    },
    #[error("\"{input}\" only loosely resembles {team} (\"{alias}\")")]
    UnanchoredMatch {
        input: String,
        alias: String,
        team: String,
    },
}

impl ResolveError {
    /// Stable machine-readable code
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::NoConfidentMatch { .. } => "no-confident-match",
            ResolveError::AmbiguousMatch { .. } => "ambiguous-match",
            ResolveError::UnanchoredMatch { .. } => "unanchored-match",
        }
    }

    pub fn clarification_needed(&self) -> Vec<ClarificationField> {
        vec![ClarificationField::Teams]
    }

    pub fn input(&self) -> &str {
        match self {
            ResolveError::NoConfidentMatch { input, .. }
            | ResolveError::AmbiguousMatch { input, .. }
            | ResolveError::UnanchoredMatch { input, .. } => input,
        }
    }
}

/// One team's best-scoring alias.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    entry: &'a AliasEntry,
    score: f64,
    kind: MatchKind,
}

impl Candidate<'_> {
    fn rank(&self, other: &Candidate<'_>) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then(self.kind.rank().cmp(&other.kind.rank()))
            .then(self.entry.alias.len().cmp(&other.entry.alias.len()))
    }
}

#[derive(Debug, Clone)]
pub struct TeamResolver {
    index: Arc<AliasIndex>,
    config: ResolverConfig,
}

impl TeamResolver {
    pub fn new(index: Arc<AliasIndex>) -> Self {
        Self::with_config(index, ResolverConfig::default())
    }

    pub fn with_config(index: Arc<AliasIndex>, config: ResolverConfig) -> Self {
        Self { index, config }
    }

    /// Resolver over the shared built-in index with default thresholds.
    pub fn builtin() -> Self {
        Self::new(AliasIndex::builtin())
    }

    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Score one alias against already-normalized input.
    pub fn score(&self, input: &str, entry: &AliasEntry) -> (f64, MatchKind) {
        if input == entry.alias {
            let kind = if entry.form == AliasForm::Abbreviation {
                MatchKind::Abbreviation
            } else {
                MatchKind::Alias
            };
            return (1.0, kind);
        }

        if entry.alias.chars().count() >= self.config.min_contains_alias_len
            && contains_phrase(input, &entry.alias)
        {
            return (self.config.contains_score, MatchKind::Contains);
        }

        (similarity(input, &entry.alias), MatchKind::Fuzzy)
    }

    /// Resolve free text to one team, optionally restricted to a league.
    pub fn resolve(
        &self,
        text: &str,
        league_hint: Option<League>,
    ) -> Result<ResolvedTeam, ResolveError> {
        let input = normalize(text);
        if input.is_empty() {
            return Err(ResolveError::NoConfidentMatch {
                input: text.trim().to_string(),
                closest: None,
            });
        }

        let ranked = self.rank_teams(&input, league_hint);
        let best = match ranked.first() {
            Some(best) => *best,
            None => {
                return Err(ResolveError::NoConfidentMatch {
                    input,
                    closest: None,
                })
            }
        };
        let runner_up = ranked.get(1);

        debug!(
            "resolve {:?}: best {} via {:?} \"{}\" ({:.3}), runner-up {:?}",
            input,
            best.entry.team.full_name(),
            best.kind,
            best.entry.alias,
            best.score,
            runner_up.map(|r| (r.entry.team.full_name(), r.score))
        );

        if best.score < self.config.min_confidence {
            return Err(ResolveError::NoConfidentMatch {
                input,
                closest: Some((best.entry.alias.clone(), best.score)),
            });
        }

        if best.kind == MatchKind::Fuzzy {
            let runner_score = runner_up.map_or(0.0, |r| r.score);
            if best.score - runner_score < self.config.ambiguity_gap {
                let mut candidates = vec![describe(best.entry)];
                candidates.extend(runner_up.map(|r| describe(r.entry)));
                return Err(ResolveError::AmbiguousMatch { input, candidates });
            }
        }

        if best.kind != MatchKind::Abbreviation {
            let tied: Vec<String> = ranked
                .iter()
                .filter(|c| c.score == best.score && c.entry.alias == best.entry.alias)
                .map(|c| describe(c.entry))
                .collect();
            if tied.len() > 1 {
                return Err(ResolveError::AmbiguousMatch {
                    input,
                    candidates: tied,
                });
            }
        }

        if best.kind == MatchKind::Fuzzy
            && !is_anchored(&input, &best.entry.alias, self.config.anchor_prefix_len)
        {
            return Err(ResolveError::UnanchoredMatch {
                alias: best.entry.alias.clone(),
                team: best.entry.team.full_name(),
                input,
            });
        }

        Ok(ResolvedTeam {
            team: Arc::clone(&best.entry.team),
            league: best.entry.league,
            alias: best.entry.alias.clone(),
            confidence: best.score,
            kind: best.kind,
        })
    }

    /// Best candidate per team, strongest first. Exact ties keep league
    /// priority order.
    fn rank_teams<'a>(&'a self, input: &str, league_hint: Option<League>) -> Vec<Candidate<'a>> {
        let mut ranked: Vec<Candidate<'a>> = Vec::new();
        let mut slots: FxHashMap<(League, &'a str), usize> = FxHashMap::default();

        for entry in self.index.entries(league_hint) {
            let (score, kind) = self.score(input, entry);
            let candidate = Candidate { entry, score, kind };
            let key = (entry.league, entry.team.abbreviation.as_str());

            match slots.get(&key) {
                Some(&slot) => {
                    if candidate.rank(&ranked[slot]) == Ordering::Greater {
                        ranked[slot] = candidate;
                    }
                }
                None => {
                    slots.insert(key, ranked.len());
                    ranked.push(candidate);
                }
            }
        }

        ranked.sort_by(|a, b| b.rank(a));
        ranked
    }
}

fn describe(entry: &AliasEntry) -> String {
    format!("{} ({})", entry.team.full_name(), entry.league)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamRecord;
    use crate::roster::Roster;

    fn resolver() -> TeamResolver {
        TeamResolver::builtin()
    }

    fn team(league: League, name: &str, city: &str, abbr: &str, aliases: &[&str]) -> TeamRecord {
        TeamRecord {
            league,
            name: name.to_string(),
            city: city.to_string(),
            abbreviation: abbr.to_string(),
            venue: String::new(),
            home_city: city.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    // ------------------------------------------------------------------------
    // Exact and contains matches
    // ------------------------------------------------------------------------

    #[test]
    fn test_exact_alias() {
        let resolved = resolver().resolve("Lakers", None).unwrap();
        assert_eq!(resolved.team.name, "Lakers");
        assert_eq!(resolved.league, League::NBA);
        assert_eq!(resolved.confidence, 1.0);
        assert_eq!(resolved.kind, MatchKind::Alias);
    }

    #[test]
    fn test_exact_abbreviation() {
        let resolved = resolver().resolve("KC", Some(League::NFL)).unwrap();
        assert_eq!(resolved.team.name, "Chiefs");
        assert_eq!(resolved.kind, MatchKind::Abbreviation);
    }

    #[test]
    fn test_abbreviation_shared_across_leagues_prefers_priority() {
        // ATL is both the Hawks and the Falcons; basketball comes first
        let resolved = resolver().resolve("ATL", None).unwrap();
        assert_eq!(resolved.team.name, "Hawks");
        let resolved = resolver().resolve("ATL", Some(League::NFL)).unwrap();
        assert_eq!(resolved.team.name, "Falcons");
    }

    #[test]
    fn test_contains_match() {
        let resolved = resolver()
            .resolve("the mighty Chiefs tonight", Some(League::NFL))
            .unwrap();
        assert_eq!(resolved.team.name, "Chiefs");
        assert_eq!(resolved.kind, MatchKind::Contains);
        assert_eq!(resolved.confidence, CONTAINS_SCORE);
    }

    #[test]
    fn test_contains_prefers_longer_alias() {
        let resolved = resolver()
            .resolve("go los angeles lakers", None)
            .unwrap();
        assert_eq!(resolved.team.name, "Lakers");
        assert_eq!(resolved.alias, "los angeles lakers");
    }

    #[test]
    fn test_punctuation_and_case_ignored() {
        let resolved = resolver().resolve("  st. LOUIS blues!! ", None).unwrap();
        assert_eq!(resolved.team.name, "Blues");
        assert_eq!(resolved.kind, MatchKind::Alias);
    }

    // ------------------------------------------------------------------------
    // Fuzzy matches
    // ------------------------------------------------------------------------

    #[test]
    fn test_fuzzy_typo() {
        let resolved = resolver().resolve("lakrs", None).unwrap();
        assert_eq!(resolved.team.name, "Lakers");
        assert_eq!(resolved.kind, MatchKind::Fuzzy);
        assert!((resolved.confidence - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_unanchored_rejected() {
        let err = resolver().resolve("ruins", Some(League::NHL)).unwrap_err();
        assert_eq!(err.kind(), "unanchored-match");
        assert!(matches!(err, ResolveError::UnanchoredMatch { ref team, .. } if team == "Boston Bruins"));
    }

    #[test]
    fn test_fuzzy_close_runner_up_is_ambiguous() {
        let roster = Roster::from_records(vec![
            team(League::NBA, "Hornets", "Charlotte", "CHA", &[]),
            team(League::NBA, "Horners", "Springfield", "SPR", &[]),
        ])
        .unwrap();
        let resolver = TeamResolver::new(Arc::new(AliasIndex::new(&roster)));
        let err = resolver.resolve("hornrs", None).unwrap_err();
        assert_eq!(err.kind(), "ambiguous-match");
        if let ResolveError::AmbiguousMatch { candidates, .. } = err {
            assert_eq!(candidates.len(), 2);
        }
    }

    // ------------------------------------------------------------------------
    // Rejections
    // ------------------------------------------------------------------------

    #[test]
    fn test_shared_city_alias_is_ambiguous() {
        let err = resolver().resolve("LA", None).unwrap_err();
        assert_eq!(err.kind(), "ambiguous-match");
        assert_eq!(err.clarification_needed(), vec![ClarificationField::Teams]);
        match err {
            ResolveError::AmbiguousMatch { candidates, .. } => {
                assert!(candidates.contains(&"Los Angeles Lakers (nba)".to_string()));
                assert!(candidates.contains(&"Los Angeles Clippers (nba)".to_string()));
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_city_ambiguous_within_league() {
        let err = resolver().resolve("New York", Some(League::NFL)).unwrap_err();
        assert_eq!(err.kind(), "ambiguous-match");
    }

    #[test]
    fn test_no_confident_match() {
        let err = resolver().resolve("xyzzy", None).unwrap_err();
        assert_eq!(err.kind(), "no-confident-match");
        assert_eq!(err.input(), "xyzzy");
        assert!(err.to_string().contains("xyzzy"));
    }

    #[test]
    fn test_empty_input() {
        let err = resolver().resolve("  ?! ", None).unwrap_err();
        assert!(matches!(err, ResolveError::NoConfidentMatch { closest: None, .. }));
    }

    #[test]
    fn test_league_hint_scopes_candidates() {
        assert!(resolver().resolve("Lakers", Some(League::NHL)).is_err());
        let kings = resolver().resolve("Kings", Some(League::NHL)).unwrap();
        assert_eq!(kings.team.abbreviation, "LAK");
    }

    // ------------------------------------------------------------------------
    // Calibration
    // ------------------------------------------------------------------------

    #[test]
    fn test_default_thresholds() {
        let config = ResolverConfig::default();
        assert_eq!(config.min_confidence, 0.8);
        assert_eq!(config.ambiguity_gap, 0.2);
        assert_eq!(config.contains_score, 0.97);
        assert_eq!(config.min_contains_alias_len, 3);
        assert_eq!(config.anchor_prefix_len, 3);
    }

    #[test]
    fn test_raised_confidence_floor_rejects_typo() {
        let strict = TeamResolver::with_config(
            AliasIndex::builtin(),
            ResolverConfig::default().with_min_confidence(0.9),
        );
        let err = strict.resolve("lakrs", None).unwrap_err();
        assert_eq!(err.kind(), "no-confident-match");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let r = resolver();
        for text in ["lakrs", "Chiefs", "habs", "Trail Blazers"] {
            assert_eq!(r.resolve(text, None), r.resolve(text, None));
        }
    }
}
