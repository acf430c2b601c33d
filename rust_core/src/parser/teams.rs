//! Team extraction: find the two teams a sentence is about.
//!
//! Structured patterns ("A at B", "A vs B") are tried first. Each side of a
//! connector is the run of words next to it within the same clause, resolved
//! nearest word first and widened one word at a time. Without a usable
//! connector, the first two unambiguous alias mentions win, topped up by
//! fuzzy resolution of single longer words.

use std::sync::Arc;

use tracing::debug;

use super::{ParseError, Side, Span};
use crate::matching::{AliasForm, AliasHit, ResolveError, TeamResolver, Token};
use crate::models::{League, MatchKind, ResolvedTeam, TeamRecord};

const AT_WORDS: &[&str] = &["at", "@"];
const VERSUS_WORDS: &[&str] = &["vs", "versus", "v"];

/// Words that turn "at" into a location or price rather than a matchup.
const NOT_AFTER_AT: &[&str] = &["home", "a", "neutral", "odds", "least", "all"];

pub const MAX_SIDE_WORDS: usize = 4;

/// Shortest word tried on its own during the fuzzy fallback.
pub const MIN_FUZZY_WORD_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    At,
    Versus,
}

impl Connector {
    fn words(&self) -> &'static [&'static str] {
        match self {
            Connector::At => AT_WORDS,
            Connector::Versus => VERSUS_WORDS,
        }
    }
}

/// The two teams of a matchup and where each is mentioned.
#[derive(Debug, Clone)]
pub struct TeamPair {
    /// Left of the connector, or the earlier mention
    pub first: ResolvedTeam,
    pub second: ResolvedTeam,
    pub connector: Option<Connector>,
    spans: [Vec<Span>; 2],
}

impl TeamPair {
    pub fn team(&self, side: Side) -> &ResolvedTeam {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    pub fn spans(&self, side: Side) -> &[Span] {
        match side {
            Side::First => &self.spans[0],
            Side::Second => &self.spans[1],
        }
    }

    /// The side whose earliest mention comes first in the text.
    pub fn first_mentioned(&self) -> Side {
        let earliest = |side| self.spans(side).iter().map(|s| s.start).min();
        match (earliest(Side::First), earliest(Side::Second)) {
            (Some(a), Some(b)) if b < a => Side::Second,
            _ => Side::First,
        }
    }

    fn build(
        first: (ResolvedTeam, Span),
        second: (ResolvedTeam, Span),
        connector: Option<Connector>,
        hits: &[AliasHit],
    ) -> Self {
        let spans = [
            mention_spans(first.1, &first.0.team, &second.0.team, hits),
            mention_spans(second.1, &second.0.team, &first.0.team, hits),
        ];
        Self {
            first: first.0,
            second: second.0,
            connector,
            spans,
        }
    }
}

/// Every place a team is named without also naming the other team.
fn mention_spans(
    found_at: Span,
    team: &TeamRecord,
    other: &TeamRecord,
    hits: &[AliasHit],
) -> Vec<Span> {
    let mut spans: Vec<Span> = hits
        .iter()
        .filter(|h| h.names(team) && !h.names(other))
        .map(|h| Span::new(h.start, h.end))
        .collect();
    spans.push(found_at);
    spans.sort();
    spans.dedup();
    spans
}

pub fn extract_teams(
    tokens: &[Token<'_>],
    hits: &[AliasHit],
    resolver: &TeamResolver,
    league: League,
) -> Result<TeamPair, ParseError> {
    let mut last_error: Option<ResolveError> = None;

    for connector in [Connector::At, Connector::Versus] {
        for (i, token) in tokens.iter().enumerate() {
            if !connector.words().contains(&token.norm.as_str()) {
                continue;
            }
            if connector == Connector::At && !at_is_connector(tokens, i) {
                continue;
            }

            let left = side_words(tokens, i, false);
            let right = side_words(tokens, i, true);
            let a = resolve_side(&left, resolver, league, &mut last_error);
            let b = resolve_side(&right, resolver, league, &mut last_error);

            if let (Some(a), Some(b)) = (a, b) {
                if a.0.team.is_same_team(&b.0.team) {
                    debug!(
                        "connector {:?} at {} names {} twice",
                        connector, token.start, a.0.team.name
                    );
                    continue;
                }
                debug!(
                    "teams from {:?} connector: {} / {}",
                    connector, a.0.team.name, b.0.team.name
                );
                return Ok(TeamPair::build(a, b, Some(connector), hits));
            }
        }
    }

    let found = mentioned_teams(tokens, hits, resolver, league, &mut last_error);
    if let [a, b, ..] = found.as_slice() {
        debug!("teams from mentions: {} / {}", a.0.team.name, b.0.team.name);
        return Ok(TeamPair::build(a.clone(), b.clone(), None, hits));
    }

    let reason = match (last_error, found.first()) {
        (Some(err), _) => err.to_string(),
        (None, Some((only, _))) => format!("only found {} in {}", only.team.full_name(), league),
        (None, None) => format!("no {} team names found", league),
    };
    Err(ParseError::MissingTeams { reason })
}

/// "at" followed by a number or a place word is not a matchup connector.
fn at_is_connector(tokens: &[Token<'_>], i: usize) -> bool {
    match tokens.get(i + 1) {
        Some(next) => !next.is_numeric() && !NOT_AFTER_AT.contains(&next.norm.as_str()),
        None => false,
    }
}

fn is_connector_word(token: &Token<'_>) -> bool {
    token.is_symbol()
        || AT_WORDS.contains(&token.norm.as_str())
        || VERSUS_WORDS.contains(&token.norm.as_str())
}

/// Words beside the connector at `at`, nearest first, in the same clause.
fn side_words<'t, 'a>(tokens: &'t [Token<'a>], at: usize, rightward: bool) -> Vec<&'t Token<'a>> {
    let clause = tokens[at].clause;
    let order: Vec<usize> = if rightward {
        (at + 1..tokens.len()).collect()
    } else {
        (0..at).rev().collect()
    };

    let mut words = Vec::new();
    for token in order.into_iter().map(|i| &tokens[i]) {
        if token.clause != clause || is_connector_word(token) {
            break;
        }
        if token.is_numeric() {
            continue;
        }
        words.push(token);
        if words.len() == MAX_SIDE_WORDS {
            break;
        }
    }
    words
}

/// Resolve the shortest run of nearest words that names a team.
fn resolve_side(
    words: &[&Token<'_>],
    resolver: &TeamResolver,
    league: League,
    last_error: &mut Option<ResolveError>,
) -> Option<(ResolvedTeam, Span)> {
    for k in 1..=words.len() {
        let mut fragment: Vec<&Token<'_>> = words[..k].to_vec();
        fragment.sort_by_key(|t| t.start);

        let phrase = fragment
            .iter()
            .map(|t| t.raw)
            .collect::<Vec<_>>()
            .join(" ");
        match resolver.resolve(&phrase, Some(league)) {
            Ok(resolved) => {
                let span = Span::new(fragment[0].start, fragment[k - 1].end);
                return Some((resolved, span));
            }
            Err(err) => *last_error = Some(err),
        }
    }
    None
}

/// First two distinct teams named anywhere in the text, in text order.
fn mentioned_teams(
    tokens: &[Token<'_>],
    hits: &[AliasHit],
    resolver: &TeamResolver,
    league: League,
    last_error: &mut Option<ResolveError>,
) -> Vec<(ResolvedTeam, Span)> {
    let mut found: Vec<(ResolvedTeam, Span)> = Vec::new();

    for hit in hits {
        if found.len() == 2 {
            break;
        }
        let Some(team) = hit.sole_team() else { continue };
        if already_found(&found, team) {
            continue;
        }
        let kind = match hit.entries.first().map(|e| e.form) {
            Some(AliasForm::Abbreviation) => MatchKind::Abbreviation,
            _ => MatchKind::Alias,
        };
        found.push((
            ResolvedTeam {
                team: Arc::clone(team),
                league,
                alias: hit.alias.clone(),
                confidence: 1.0,
                kind,
            },
            Span::new(hit.start, hit.end),
        ));
    }

    for token in tokens {
        if found.len() == 2 {
            break;
        }
        if token.is_symbol()
            || token.is_numeric()
            || token.norm.chars().count() < MIN_FUZZY_WORD_LEN
            || hits.iter().any(|h| token.start >= h.start && token.end <= h.end)
        {
            continue;
        }
        match resolver.resolve(token.raw, Some(league)) {
            Ok(resolved) => {
                if !already_found(&found, &resolved.team) {
                    found.push((resolved, Span::new(token.start, token.end)));
                }
            }
            Err(ResolveError::NoConfidentMatch { .. }) => {}
            Err(err) => *last_error = Some(err),
        }
    }

    found.sort_by_key(|(_, span)| span.start);
    found
}

fn already_found(found: &[(ResolvedTeam, Span)], team: &TeamRecord) -> bool {
    found.iter().any(|(r, _)| r.team.is_same_team(team))
}
