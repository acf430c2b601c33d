//! Matchup Parser
//!
//! Turns one free-text sentence into a `ParsedMatchup`:
//! league -> teams -> spread -> attachment -> pick -> orientation -> venue -> odds.
//! Each stage is a separate function; notes record every assumption made
//! along the way.

/// Compile a literal pattern once per process.
macro_rules! static_regex {
    ($pattern:expr) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($pattern).expect("static regex"))
    }};
}

pub mod league;
pub mod odds;
pub mod pick;
pub mod spread;
pub mod teams;
pub mod venue;

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::matching::{tokenize, AliasIndex, ResolverConfig, TeamResolver};
use crate::models::{ClarificationField, League, ParsedMatchup};

use league::LeagueSource;
use odds::DEFAULT_ODDS;

pub const DEFAULT_VENUE_WINDOW: usize = 30;
pub const DEFAULT_PICK_WINDOW: usize = 24;

/// Byte range in the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One of the two teams found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("could not tell which league this is: {reason}")]
    MissingLeague { reason: String },
    #[error("could not identify both teams: {reason}")]
    MissingTeams { reason: String },
    #[error("could not find a point spread: {reason}")]
    MissingSpread { reason: String },
}

impl ParseError {
    /// Stable machine-readable code
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MissingLeague { .. } => "missing-league",
            ParseError::MissingTeams { .. } => "missing-teams",
            ParseError::MissingSpread { .. } => "missing-spread",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            ParseError::MissingLeague { reason }
            | ParseError::MissingTeams { reason }
            | ParseError::MissingSpread { reason } => reason,
        }
    }

    pub fn clarification_needed(&self) -> Vec<ClarificationField> {
        match self {
            ParseError::MissingLeague { .. } => vec![ClarificationField::League],
            ParseError::MissingTeams { .. } => vec![ClarificationField::Teams],
            ParseError::MissingSpread { .. } => vec![ClarificationField::Spread],
        }
    }
}

/// JSON envelope handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsingResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<ParsedMatchup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    pub clarification_needed: Vec<ClarificationField>,
}

impl From<Result<ParsedMatchup, ParseError>> for ParsingResult {
    fn from(result: Result<ParsedMatchup, ParseError>) -> Self {
        match result {
            Ok(parsed) => Self {
                success: true,
                parsed: Some(parsed),
                error: None,
                error_kind: None,
                clarification_needed: Vec::new(),
            },
            Err(err) => Self {
                success: false,
                parsed: None,
                error: Some(err.to_string()),
                error_kind: Some(err.kind()),
                clarification_needed: err.clarification_needed(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParserConfig {
    pub resolver: ResolverConfig,
    /// Max bytes between a home/away word and the team it describes
    pub venue_window: usize,
    /// Max bytes between a pick phrase and the team it names
    pub pick_window: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            resolver: ResolverConfig::default(),
            venue_window: DEFAULT_VENUE_WINDOW,
            pick_window: DEFAULT_PICK_WINDOW,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchupParser {
    resolver: TeamResolver,
    config: ParserConfig,
}

impl MatchupParser {
    pub fn new(index: Arc<AliasIndex>) -> Self {
        Self::with_config(index, ParserConfig::default())
    }

    pub fn with_config(index: Arc<AliasIndex>, config: ParserConfig) -> Self {
        Self {
            resolver: TeamResolver::with_config(index, config.resolver),
            config,
        }
    }

    /// Parser over the shared built-in index with default settings.
    pub fn builtin() -> Self {
        Self::new(AliasIndex::builtin())
    }

    pub fn resolver(&self) -> &TeamResolver {
        &self.resolver
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse(&self, text: &str) -> Result<ParsedMatchup, ParseError> {
        self.parse_with_league(text, None)
    }

    /// Parse with a caller-supplied league, treated like an explicit keyword.
    pub fn parse_with_league(
        &self,
        text: &str,
        hint: Option<League>,
    ) -> Result<ParsedMatchup, ParseError> {
        let mut notes = Vec::new();
        let index = self.resolver.index();
        let tokens = tokenize(text);

        let (league, source) = league::detect_league(&tokens, &index.scan(text, None), hint)?;
        if source == LeagueSource::Inferred {
            notes.push(format!("league inferred from team names: {}", league));
        }

        let hits = index.scan(text, Some(league));
        let pair = teams::extract_teams(&tokens, &hits, &self.resolver, league)?;

        let mention = spread::find_spread(text).ok_or_else(|| ParseError::MissingSpread {
            reason: "no signed number or spread phrase in the text".to_string(),
        })?;
        let attached = spread::attached_side(text, &mention, &pair);
        let explicit = pick::explicit_pick(text, &pair, self.config.pick_window);

        let pick = match (explicit, attached) {
            (Some(side), _) => side,
            (None, Some(side)) => {
                notes.push(format!(
                    "no explicit pick; backing {}, the team the spread was written for",
                    pair.team(side).team.full_name()
                ));
                side
            }
            (None, None) => {
                let side = pair.first_mentioned();
                notes.push(format!(
                    "no explicit pick; assuming the first team mentioned, {}",
                    pair.team(side).team.full_name()
                ));
                side
            }
        };
        let pick_team = &pair.team(pick).team;
        let opponent_team = &pair.team(pick.other()).team;

        let spread = match attached {
            Some(side) if side != pick => {
                let value = -mention.value;
                notes.push(format!(
                    "spread {:+} was written for {}; {} gets {:+}",
                    mention.value, opponent_team.name, pick_team.name, value
                ));
                value
            }
            Some(_) => mention.value,
            None => {
                notes.push(format!(
                    "spread {:+} is not next to either team; read as {}'s line",
                    mention.value, pick_team.name
                ));
                mention.value
            }
        };

        let venue = venue::infer_venue(text, &pair, pick, &hits, self.config.venue_window);
        if venue.assumed {
            notes.push("no venue stated; assuming a neutral site".to_string());
        }

        let odds = odds::find_odds(text, mention.span);
        if odds.is_none() {
            notes.push(format!("no odds given; apply the standard {}", DEFAULT_ODDS));
        }

        debug!(
            "parsed {} {} {:+} vs {} ({}, odds {:?})",
            league, pick_team.name, spread, opponent_team.name, venue.venue, odds
        );

        Ok(ParsedMatchup {
            league,
            pick_team: Arc::clone(pick_team),
            opponent_team: Arc::clone(opponent_team),
            spread,
            venue: venue.venue,
            venue_assumed: venue.assumed,
            odds,
            raw_text: text.to_string(),
            notes,
        })
    }

    /// Parse many texts in parallel. Output order matches input order.
    pub fn parse_batch<S>(&self, texts: &[S]) -> Vec<Result<ParsedMatchup, ParseError>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.parse(text.as_ref()))
            .collect()
    }
}

impl Default for MatchupParser {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Parse with the built-in roster and default settings.
pub fn parse(text: &str) -> Result<ParsedMatchup, ParseError> {
    MatchupParser::builtin().parse(text)
}
