//! Normalized alias lookup built once from a roster.

use std::ops::Range;
use std::sync::{Arc, OnceLock};

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::debug;

use super::{normalize, tokenize};
use crate::models::{League, TeamRecord};
use crate::roster::Roster;

/// Aliases this short only match sentence words written in upper case.
pub const SHORT_ALIAS_LEN: usize = 3;

/// Which field of the team record an alias came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasForm {
    Abbreviation,
    Name,
    City,
    FullName,
    Nickname,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasEntry {
    /// Normalized alias text
    pub alias: String,
    pub team: Arc<TeamRecord>,
    pub league: League,
    pub form: AliasForm,
}

/// An exact alias occurrence in a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasHit {
    pub start: usize,
    pub end: usize,
    pub alias: String,
    /// Every in-scope entry carrying this alias
    pub entries: Vec<AliasEntry>,
}

impl AliasHit {
    /// The single team owning this alias, if it is unambiguous.
    pub fn sole_team(&self) -> Option<&Arc<TeamRecord>> {
        let first = &self.entries.first()?.team;
        self.entries
            .iter()
            .all(|e| e.team.is_same_team(first))
            .then_some(first)
    }

    pub fn names(&self, team: &TeamRecord) -> bool {
        self.entries.iter().any(|e| e.team.is_same_team(team))
    }
}

pub struct AliasIndex {
    /// Entries grouped by league in priority order, roster order within a league.
    entries: Vec<AliasEntry>,
    league_ranges: FxHashMap<League, Range<usize>>,
    exact: FxHashMap<String, Vec<usize>>,
    max_words: usize,
}

static BUILTIN_INDEX: OnceLock<Arc<AliasIndex>> = OnceLock::new();

impl AliasIndex {
    pub fn new(roster: &Roster) -> Self {
        let mut entries = Vec::new();
        let mut league_ranges = FxHashMap::default();

        for league in League::PRIORITY {
            let start = entries.len();

            for team in roster.teams_in(league) {
                let forms = [
                    (AliasForm::Abbreviation, team.abbreviation.clone()),
                    (AliasForm::Name, team.name.clone()),
                    (AliasForm::City, team.city.clone()),
                    (AliasForm::FullName, team.full_name()),
                ]
                .into_iter()
                .chain(team.aliases.iter().map(|a| (AliasForm::Nickname, a.clone())));

                let mut seen: FxHashSet<String> = FxHashSet::default();
                for (form, raw) in forms {
                    let alias = normalize(&raw);
                    if alias.is_empty() || !seen.insert(alias.clone()) {
                        continue;
                    }
                    entries.push(AliasEntry {
                        alias,
                        team: Arc::clone(team),
                        league,
                        form,
                    });
                }
            }

            if entries.len() > start {
                league_ranges.insert(league, start..entries.len());
            }
        }

        let mut exact: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut max_words = 1;
        for (i, entry) in entries.iter().enumerate() {
            max_words = max_words.max(entry.alias.split_whitespace().count());
            exact.entry(entry.alias.clone()).or_default().push(i);
        }

        debug!(
            "Alias index built: {} entries, {} distinct aliases, {} leagues",
            entries.len(),
            exact.len(),
            league_ranges.len()
        );

        Self {
            entries,
            league_ranges,
            exact,
            max_words,
        }
    }

    /// Shared index over the built-in roster.
    pub fn builtin() -> Arc<AliasIndex> {
        Arc::clone(BUILTIN_INDEX.get_or_init(|| Arc::new(AliasIndex::new(&Roster::builtin()))))
    }

    /// Entries for one league, or the combined view (basketball, hockey,
    /// football) when `league` is `None`.
    pub fn entries(&self, league: Option<League>) -> &[AliasEntry] {
        match league {
            Some(league) => self
                .league_ranges
                .get(&league)
                .map_or(&[][..], |range| &self.entries[range.clone()]),
            None => &self.entries,
        }
    }

    /// Exact lookup of an already-normalized alias.
    pub fn lookup(&self, alias: &str, league: Option<League>) -> Vec<&AliasEntry> {
        self.exact
            .get(alias)
            .map(|ids| {
                ids.iter()
                    .map(|&i| &self.entries[i])
                    .filter(|e| league.map_or(true, |l| e.league == l))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn leagues(&self) -> Vec<League> {
        League::PRIORITY
            .iter()
            .copied()
            .filter(|l| self.league_ranges.contains_key(l))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find alias occurrences left to right, longest first, without overlap.
    /// Windows never span a clause break or the `@` symbol.
    pub fn scan(&self, text: &str, league: Option<League>) -> Vec<AliasHit> {
        let tokens = tokenize(text);
        let mut hits = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let widest = self.max_words.min(tokens.len() - i);
            let mut matched = None;

            for len in (1..=widest).rev() {
                let window = &tokens[i..i + len];
                if window.iter().any(|t| t.is_symbol())
                    || window[0].clause != window[len - 1].clause
                {
                    continue;
                }

                let key = window
                    .iter()
                    .map(|t| t.norm.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                if key.chars().count() <= SHORT_ALIAS_LEN && !window.iter().all(|t| t.is_upper()) {
                    continue;
                }

                let found = self.lookup(&key, league);
                if !found.is_empty() {
                    matched = Some((len, key, found));
                    break;
                }
            }

            match matched {
                Some((len, alias, found)) => {
                    hits.push(AliasHit {
                        start: tokens[i].start,
                        end: tokens[i + len - 1].end,
                        alias,
                        entries: found.into_iter().cloned().collect(),
                    });
                    i += len;
                }
                None => i += 1,
            }
        }

        hits
    }
}

impl std::fmt::Debug for AliasIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasIndex")
            .field("entries", &self.entries.len())
            .field("aliases", &self.exact.len())
            .field("leagues", &self.leagues())
            .finish()
    }
}
